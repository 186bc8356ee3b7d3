//! Stateless entry points.
//!
//! Each function builds a cursor, drives it to its first match and returns a
//! [`SearchOutcome`]. Names combine three choices:
//!
//! - `find_*` runs a [`Finder`], `locate_*` a [`Locator`]; both report the
//!   same position.
//! - `*_first` scans front to back, `*_last` back to front, `sorted_*` binary
//!   searches a sorted sequence whose direction is inferred from its ends.
//! - no suffix uses the element type's `Ord`, `*_by` takes a [`Comparator`],
//!   `*_where` a predicate (linear scans only).
//!
//! The `Err` arm of the returned `Result` carries comparator failures; a miss
//! is an `Ok` outcome whose strict accessors report `NotFound`.

use sift_common::{Result, result::not_found_as_none};

use crate::{
    comparator::{Comparator, Matching},
    finder::Finder,
    locator::Locator,
    natural::NaturalOrder,
    outcome::SearchOutcome,
    traversal::Traversal,
};

fn finder_outcome<'a, K, T, C, S>(
    sequence: &'a [T],
    mut finder: Finder<'_, K, T, C, S>,
) -> Result<SearchOutcome<'a, T>>
where
    C: Comparator<K, T>,
    S: Traversal,
{
    let index = not_found_as_none(finder.found())?;
    Ok(SearchOutcome::new(sequence, index))
}

fn locator_outcome<'a, K, T, C, S>(
    sequence: &'a [T],
    mut locator: Locator<'_, K, T, C, S>,
) -> Result<SearchOutcome<'a, T>>
where
    C: Comparator<K, T>,
    S: Traversal,
{
    locator.found()?;
    Ok(SearchOutcome::new(sequence, locator.index_opt()))
}

/// First element equal to `key`.
pub fn find_first<'a, T: Ord>(key: &T, sequence: &'a [T]) -> Result<SearchOutcome<'a, T>> {
    find_first_by(key, sequence, NaturalOrder)
}

/// First element for which `comparator` reports equality with `key`.
pub fn find_first_by<'a, K, T, C>(
    key: &K,
    sequence: &'a [T],
    comparator: C,
) -> Result<SearchOutcome<'a, T>>
where
    C: Comparator<K, T>,
{
    finder_outcome(sequence, Finder::linear(key, sequence, comparator))
}

/// First element satisfying `predicate`.
pub fn find_first_where<'a, T, P>(sequence: &'a [T], predicate: P) -> Result<SearchOutcome<'a, T>>
where
    P: Fn(&T) -> bool,
{
    find_first_by(&(), sequence, Matching(predicate))
}

/// Last element equal to `key`.
pub fn find_last<'a, T: Ord>(key: &T, sequence: &'a [T]) -> Result<SearchOutcome<'a, T>> {
    find_last_by(key, sequence, NaturalOrder)
}

pub fn find_last_by<'a, K, T, C>(
    key: &K,
    sequence: &'a [T],
    comparator: C,
) -> Result<SearchOutcome<'a, T>>
where
    C: Comparator<K, T>,
{
    finder_outcome(sequence, Finder::linear_reversed(key, sequence, comparator))
}

pub fn find_last_where<'a, T, P>(sequence: &'a [T], predicate: P) -> Result<SearchOutcome<'a, T>>
where
    P: Fn(&T) -> bool,
{
    find_last_by(&(), sequence, Matching(predicate))
}

/// Same result as [`find_first`], computed by a [`Locator`].
pub fn locate_first<'a, T: Ord>(key: &T, sequence: &'a [T]) -> Result<SearchOutcome<'a, T>> {
    locate_first_by(key, sequence, NaturalOrder)
}

pub fn locate_first_by<'a, K, T, C>(
    key: &K,
    sequence: &'a [T],
    comparator: C,
) -> Result<SearchOutcome<'a, T>>
where
    C: Comparator<K, T>,
{
    locator_outcome(sequence, Locator::linear(key, sequence, comparator))
}

pub fn locate_first_where<'a, T, P>(
    sequence: &'a [T],
    predicate: P,
) -> Result<SearchOutcome<'a, T>>
where
    P: Fn(&T) -> bool,
{
    locate_first_by(&(), sequence, Matching(predicate))
}

/// Same result as [`find_last`], computed by a [`Locator`].
pub fn locate_last<'a, T: Ord>(key: &T, sequence: &'a [T]) -> Result<SearchOutcome<'a, T>> {
    locate_last_by(key, sequence, NaturalOrder)
}

pub fn locate_last_by<'a, K, T, C>(
    key: &K,
    sequence: &'a [T],
    comparator: C,
) -> Result<SearchOutcome<'a, T>>
where
    C: Comparator<K, T>,
{
    locator_outcome(sequence, Locator::linear_reversed(key, sequence, comparator))
}

pub fn locate_last_where<'a, T, P>(
    sequence: &'a [T],
    predicate: P,
) -> Result<SearchOutcome<'a, T>>
where
    P: Fn(&T) -> bool,
{
    locate_last_by(&(), sequence, Matching(predicate))
}

/// Binary search for `key` in a sorted sequence.
///
/// With duplicates, the reported position is whichever one the halving
/// reaches first, not necessarily the first or last occurrence.
pub fn sorted_find<'a, T: Ord>(key: &T, sequence: &'a [T]) -> Result<SearchOutcome<'a, T>> {
    sorted_find_by(key, sequence, NaturalOrder)
}

pub fn sorted_find_by<'a, T, C>(
    key: &T,
    sequence: &'a [T],
    comparator: C,
) -> Result<SearchOutcome<'a, T>>
where
    C: Comparator<T>,
{
    finder_outcome(sequence, Finder::sorted(key, sequence, comparator)?)
}

/// Same result as [`sorted_find`], computed by a [`Locator`].
pub fn sorted_locate<'a, T: Ord>(key: &T, sequence: &'a [T]) -> Result<SearchOutcome<'a, T>> {
    sorted_locate_by(key, sequence, NaturalOrder)
}

pub fn sorted_locate_by<'a, T, C>(
    key: &T,
    sequence: &'a [T],
    comparator: C,
) -> Result<SearchOutcome<'a, T>>
where
    C: Comparator<T>,
{
    locator_outcome(sequence, Locator::sorted(key, sequence, comparator)?)
}

/// Positions of all elements equal to `key`, in ascending order.
pub fn find_all<T: Ord>(key: &T, sequence: &[T]) -> Result<Vec<usize>> {
    find_all_by(key, sequence, NaturalOrder)
}

pub fn find_all_by<K, T, C>(key: &K, sequence: &[T], comparator: C) -> Result<Vec<usize>>
where
    C: Comparator<K, T>,
{
    Finder::linear(key, sequence, comparator)
        .matches()
        .map(|m| m.map(|(index, _)| index))
        .collect()
}

pub fn find_all_where<T, P>(sequence: &[T], predicate: P) -> Result<Vec<usize>>
where
    P: Fn(&T) -> bool,
{
    find_all_by(&(), sequence, Matching(predicate))
}
