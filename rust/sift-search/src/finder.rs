//! A cursor that reports matching positions only.

use std::{
    cmp::Ordering,
    iter::FusedIterator,
    ops::{Range, RangeBounds},
};

use sift_common::{Error, Result, try_or_ret_some_err, verify_arg};

use crate::{
    comparator::Comparator,
    options::SearchOptions,
    outcome::SearchOutcome,
    state::SearchState,
    traversal::{
        Traversal,
        binary::{BinaryScan, SortOrder, resolve_order},
        linear::LinearScan,
    },
};

pub type LinearFinder<'a, K, T, C> = Finder<'a, K, T, C, LinearScan>;
pub type SortedFinder<'a, K, T, C> = Finder<'a, K, T, C, BinaryScan>;

/// A pull cursor over the positions whose element matches the key.
///
/// Non-matching positions are skipped transparently. The traversal
/// strategy `S` decides the visiting order: [`LinearScan`] visits every
/// position of the window, [`BinaryScan`] halves a sorted window and yields at
/// most one match per search.
///
/// A `Finder` keeps its place between calls. [`found`](Finder::found)
/// locates the next match without consuming it, and
/// [`next_match`](Finder::next_match) consumes it so that the following
/// search resumes after it. Already rejected positions are never compared
/// again.
///
/// ```
/// use sift_search::{LinearFinder, NaturalOrder};
///
/// let seq = [4, 1, 4, 2, 4];
/// let mut finder = LinearFinder::linear(&4, &seq, NaturalOrder);
/// let mut hits = Vec::new();
/// while finder.has_next().unwrap() {
///     hits.push(finder.next_match().unwrap().0);
/// }
/// assert_eq!(hits, [0, 2, 4]);
/// assert!(finder.next_match().unwrap_err().is_not_found());
/// ```
#[derive(Debug, Clone)]
pub struct Finder<'a, K, T, C, S> {
    state: SearchState<'a, K, T, C>,
    scan: S,
    /// Match located by look-ahead and not yet consumed.
    pending: Option<usize>,
    /// Match reported by the last `found()` or `next_match()`.
    current: Option<usize>,
}

impl<'a, K, T, C, S> Finder<'a, K, T, C, S>
where
    S: Traversal,
{
    /// Assembles a cursor from a state record and a traversal strategy.
    pub fn from_parts(state: SearchState<'a, K, T, C>, mut scan: S) -> Self {
        scan.rewind(state.window());
        Finder {
            state,
            scan,
            pending: None,
            current: None,
        }
    }

    pub fn state(&self) -> &SearchState<'a, K, T, C> {
        &self.state
    }

    pub fn traversal(&self) -> &S {
        &self.scan
    }

    pub fn sequence(&self) -> &'a [T] {
        self.state.sequence()
    }

    pub fn window(&self) -> Range<usize> {
        self.state.window()
    }

    /// Starts over with a new key, keeping sequence, comparator and window.
    pub fn reset(&mut self, key: &'a K) {
        self.state.set_key(key);
        self.rewind();
    }

    /// Starts over with a new key and window, keeping sequence and
    /// comparator. Returns the effective (clamped) window.
    pub fn reset_with(&mut self, key: &'a K, window: impl RangeBounds<usize>) -> Range<usize> {
        self.state.set_key(key);
        self.set_window(window)
    }

    /// Replaces the window and starts over. Returns the effective (clamped)
    /// window.
    pub fn set_window(&mut self, window: impl RangeBounds<usize>) -> Range<usize> {
        let window = self.state.set_window(window);
        self.rewind();
        window
    }

    /// Supplies or replaces the comparator and starts over.
    pub fn set_comparator(&mut self, comparator: C) {
        self.state.set_comparator(comparator);
        self.rewind();
    }

    /// The match reported by the last [`found`](Finder::found) or
    /// [`next_match`](Finder::next_match).
    pub fn outcome(&self) -> SearchOutcome<'a, T> {
        SearchOutcome::new(self.state.sequence(), self.current)
    }

    pub fn element(&self) -> Result<&'a T> {
        self.outcome().element()
    }

    pub fn element_or(&self, fallback: &'a T) -> &'a T {
        self.outcome().element_or(fallback)
    }

    pub fn element_opt(&self) -> Option<&'a T> {
        self.outcome().element_opt()
    }

    pub fn index(&self) -> Result<usize> {
        self.outcome().index()
    }

    pub fn index_or(&self, fallback: usize) -> usize {
        self.outcome().index_or(fallback)
    }

    pub fn index_opt(&self) -> Option<usize> {
        self.outcome().index_opt()
    }

    fn rewind(&mut self) {
        self.scan.rewind(self.state.window());
        self.pending = None;
        self.current = None;
    }
}

impl<'a, K, T, C, S> Finder<'a, K, T, C, S>
where
    C: Comparator<K, T>,
    S: Traversal,
{
    /// Returns `true` if another match lies ahead of the resume point.
    ///
    /// The match is remembered, so a following `found()` or `next_match()`
    /// does not search again.
    pub fn has_next(&mut self) -> Result<bool> {
        Ok(self.seek()?.is_some())
    }

    /// Returns the next match and moves the resume point past it.
    ///
    /// Fails with `NotFound` if no match remains in the window.
    pub fn next_match(&mut self) -> Result<(usize, &'a T)> {
        let index = self
            .seek()?
            .ok_or_else(|| Error::not_found("no further match in the window"))?;
        self.pending = None;
        self.current = Some(index);
        Ok((index, &self.state.sequence()[index]))
    }

    /// Moves to the first match at or after the resume point and returns its
    /// index; the match is then available from [`element`](Finder::element)
    /// and [`index`](Finder::index).
    ///
    /// Calling `found()` again without an intervening `next_match()` reports
    /// the same match. Fails with `NotFound` if no match remains.
    pub fn found(&mut self) -> Result<usize> {
        self.current = self.seek()?;
        self.current
            .ok_or_else(|| Error::not_found("no element in the window matches the key"))
    }

    /// Iterates over the remaining matches as `(index, element)` pairs.
    ///
    /// The iterator ends after yielding the first error.
    pub fn matches(&mut self) -> Matches<'_, 'a, K, T, C, S> {
        Matches {
            finder: self,
            failed: false,
        }
    }

    fn seek(&mut self) -> Result<Option<usize>> {
        if self.pending.is_some() {
            return Ok(self.pending);
        }
        self.state.require_comparator()?;
        self.scan.prepare(&self.state)?;
        while let Some(index) = self.scan.probe() {
            let ordering = self.state.compare_at(index)?;
            self.scan.advance(ordering);
            if ordering == Ordering::Equal {
                self.pending = Some(index);
                return Ok(self.pending);
            }
        }
        Ok(None)
    }
}

impl<'a, K, T, C> Finder<'a, K, T, C, LinearScan> {
    /// A forward scan over the whole sequence.
    pub fn linear(key: &'a K, sequence: &'a [T], comparator: C) -> Self {
        Self::from_parts(
            SearchState::new(key, sequence, Some(comparator)),
            LinearScan::forward(),
        )
    }

    /// A backward scan over the whole sequence.
    pub fn linear_reversed(key: &'a K, sequence: &'a [T], comparator: C) -> Self {
        Self::from_parts(
            SearchState::new(key, sequence, Some(comparator)),
            LinearScan::backward(),
        )
    }

    /// A scan over the whole sequence with the given step.
    ///
    /// The comparator may be supplied later through
    /// [`set_comparator`](Finder::set_comparator). Fails with
    /// `InvalidArgument` if `step` is zero.
    pub fn with_step(
        key: &'a K,
        sequence: &'a [T],
        comparator: Option<C>,
        step: isize,
    ) -> Result<Self> {
        Ok(Self::from_parts(
            SearchState::new(key, sequence, comparator),
            LinearScan::new(step)?,
        ))
    }

    pub fn step(&self) -> isize {
        self.scan.step()
    }

    /// Changes the step and starts over from the leading edge of the window
    /// for the new direction. Fails with `InvalidArgument` if `step` is zero.
    pub fn set_step(&mut self, step: isize) -> Result<()> {
        self.scan.set_step(step)?;
        self.rewind();
        Ok(())
    }
}

impl<'a, K, T, C> Finder<'a, K, T, C, LinearScan>
where
    C: Comparator<K, T>,
{
    /// A scan configured by `options` (window and step).
    pub fn linear_from_options(
        key: &'a K,
        sequence: &'a [T],
        comparator: Option<C>,
        options: &SearchOptions,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_parts(
            options.state(key, sequence, comparator),
            LinearScan::new(options.step)?,
        ))
    }
}

impl<'a, K, T, C> Finder<'a, K, T, C, BinaryScan> {
    /// A binary search for a key of another type than the elements.
    ///
    /// Such a comparator cannot order two elements, so the direction must be
    /// given: fails with `InvalidArgument` for `SortOrder::Infer`.
    /// `SortOrder::Unresolved` is accepted and must be replaced through
    /// [`set_order`](Finder::set_order) before searching.
    pub fn sorted_by_key(
        key: &'a K,
        sequence: &'a [T],
        comparator: Option<C>,
        order: SortOrder,
    ) -> Result<Self> {
        verify_arg!(order, order != SortOrder::Infer);
        Ok(Self::from_parts(
            SearchState::new(key, sequence, comparator),
            BinaryScan::new(order),
        ))
    }

    pub fn order(&self) -> SortOrder {
        self.scan.order()
    }

    /// Sets the direction of the window and starts over. `SortOrder::Infer`
    /// is resolved before the next search.
    pub fn set_order(&mut self, order: SortOrder) {
        self.scan.set_order(order);
        self.rewind();
    }
}

impl<'a, T, C> Finder<'a, T, T, C, BinaryScan>
where
    C: Comparator<T>,
{
    /// A binary search over the whole sequence, with the direction inferred
    /// from its first and last elements.
    pub fn sorted(key: &'a T, sequence: &'a [T], comparator: C) -> Result<Self> {
        Self::sorted_in_order(key, sequence, Some(comparator), SortOrder::Infer)
    }

    /// A binary search over the whole sequence in the given direction.
    ///
    /// `SortOrder::Infer` is resolved here when a comparator is given,
    /// otherwise before the first search after
    /// [`set_comparator`](Finder::set_comparator). `SortOrder::Unresolved`
    /// makes searching fail with `InvalidArgument` until
    /// [`set_order`](Finder::set_order) resolves it.
    pub fn sorted_in_order(
        key: &'a T,
        sequence: &'a [T],
        comparator: Option<C>,
        order: SortOrder,
    ) -> Result<Self> {
        let state = SearchState::new(key, sequence, comparator).with_direction_inference();
        let order = resolve_order(order, &state)?;
        Ok(Self::from_parts(state, BinaryScan::new(order)))
    }

    /// A binary search configured by `options` (window and order). An
    /// `Infer` order is resolved against the configured window when a
    /// comparator is present.
    pub fn sorted_from_options(
        key: &'a T,
        sequence: &'a [T],
        comparator: Option<C>,
        options: &SearchOptions,
    ) -> Result<Self> {
        let state = options
            .state(key, sequence, comparator)
            .with_direction_inference();
        let order = resolve_order(options.order, &state)?;
        Ok(Self::from_parts(state, BinaryScan::new(order)))
    }

    /// Infers the direction from the current window, sets it and starts over.
    ///
    /// Fails with `InvalidArgument` if no comparator has been supplied.
    pub fn infer_order(&mut self) -> Result<SortOrder> {
        self.state.enable_direction_inference();
        self.state.require_comparator()?;
        let order = resolve_order(SortOrder::Infer, &self.state)?;
        self.set_order(order);
        Ok(order)
    }
}

/// Iterator over the remaining matches of a [`Finder`].
///
/// Yields `Err` once if the comparator fails or the cursor is misconfigured,
/// and ends there.
pub struct Matches<'f, 'a, K, T, C, S> {
    finder: &'f mut Finder<'a, K, T, C, S>,
    failed: bool,
}

impl<'a, K, T, C, S> Iterator for Matches<'_, 'a, K, T, C, S>
where
    C: Comparator<K, T>,
    S: Traversal,
{
    type Item = Result<(usize, &'a T)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let has_next = self.finder.has_next();
        self.failed = has_next.is_err();
        if !try_or_ret_some_err!(has_next) {
            return None;
        }
        let item = self.finder.next_match();
        self.failed = item.is_err();
        Some(item)
    }
}

impl<K, T, C, S> FusedIterator for Matches<'_, '_, K, T, C, S>
where
    C: Comparator<K, T>,
    S: Traversal,
{
}
