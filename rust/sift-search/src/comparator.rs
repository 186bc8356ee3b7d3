//! The comparison rule that drives every cursor.
//!
//! A [`Comparator`] relates a search key to a candidate element. Cursors only
//! ever call it as `compare(key, element)`; linear scans consult equality
//! alone, binary search also consults the sign.

use std::cmp::Ordering;

use sift_common::Result;

/// Establishes order and equality between a search key of type `K` and an
/// element of type `T`.
///
/// Any `Fn(&K, &T) -> Ordering` closure is a comparator. Comparators that can
/// fail (for instance when elements are not mutually comparable) are wrapped
/// in [`Fallible`]; their errors reach the caller of the cursor unchanged.
///
/// Closures passed where a `Comparator` is expected need annotated argument
/// types, e.g. `|k: &i32, e: &i32| k.cmp(e)`.
pub trait Comparator<K, T = K> {
    /// Compares `key` against `element`.
    ///
    /// `Ordering::Equal` means `element` matches `key`. `Less` means `key`
    /// orders before `element`, `Greater` after it.
    fn compare(&self, key: &K, element: &T) -> Result<Ordering>;
}

impl<K, T, F> Comparator<K, T> for F
where
    F: Fn(&K, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, key: &K, element: &T) -> Result<Ordering> {
        Ok(self(key, element))
    }
}

/// Adapts a fallible comparison function into a [`Comparator`].
///
/// ```
/// use std::cmp::Ordering;
/// use sift_search::{Error, Fallible, find_first_by};
///
/// let values = [1.0, 2.5, f64::NAN, 4.0];
/// let cmp = Fallible(|k: &f64, e: &f64| -> sift_search::Result<Ordering> {
///     k.partial_cmp(e)
///         .ok_or_else(|| Error::comparator(std::fmt::Error))
/// });
/// let err = find_first_by(&4.0, &values, cmp).unwrap_err();
/// assert!(!err.is_not_found());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<K, T, F> Comparator<K, T> for Fallible<F>
where
    F: Fn(&K, &T) -> Result<Ordering>,
{
    #[inline]
    fn compare(&self, key: &K, element: &T) -> Result<Ordering> {
        (self.0)(key, element)
    }
}

/// Turns an element predicate into a [`Comparator`] that ignores the key.
///
/// An element satisfying the predicate compares `Equal`; any other element
/// compares `Less`. Only equality is meaningful in this mode, so a
/// `Matching` comparator suits linear scans but not sorted search.
#[derive(Debug, Clone, Copy)]
pub struct Matching<P>(pub P);

impl<K, T, P> Comparator<K, T> for Matching<P>
where
    P: Fn(&T) -> bool,
{
    #[inline]
    fn compare(&self, _key: &K, element: &T) -> Result<Ordering> {
        Ok(if (self.0)(element) {
            Ordering::Equal
        } else {
            Ordering::Less
        })
    }
}
