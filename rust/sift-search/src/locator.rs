//! A cursor that reports a verdict for every visited position.

use std::{
    cmp::Ordering,
    iter::FusedIterator,
    ops::{Range, RangeBounds},
};

use sift_common::{Error, Result, verify_arg};

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

pub type LinearLocator<'a, K, T, C> = Locator<'a, K, T, C, LinearScan>;
pub type SortedLocator<'a, K, T, C> = Locator<'a, K, T, C, BinaryScan>;

/// The outcome of comparing the key against one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub index: usize,
    pub matched: bool,
}

/// A pull cursor that evaluates the key at each visited position.
///
/// Unlike [`Finder`](crate::Finder), a `Locator` exposes non-matching
/// positions as well, which lets the caller build its own filtering on top
/// of the traversal order of `S`.
///
/// ```
/// use sift_search::{LinearLocator, NaturalOrder};
///
/// let seq = [5, 7, 5];
/// let mut locator = LinearLocator::linear(&5, &seq, NaturalOrder);
/// let mut verdicts = Vec::new();
/// while locator.has_next() {
///     verdicts.push(locator.next_verdict().unwrap());
/// }
/// assert_eq!(verdicts, [true, false, true]);
/// ```
#[derive(Debug, Clone)]
pub struct Locator<'a, K, T, C, S> {
    state: SearchState<'a, K, T, C>,
    scan: S,
    /// Verdict at the most recently visited position.
    last: Option<Verdict>,
}

impl<'a, K, T, C, S> Locator<'a, K, T, C, S>
where
    S: Traversal,
{
    /// Assembles a cursor from a state record and a traversal strategy.
    pub fn from_parts(state: SearchState<'a, K, T, C>, mut scan: S) -> Self {
        scan.rewind(state.window());
        Locator {
            state,
            scan,
            last: None,
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

    /// Returns `true` while the probe position remains within the window.
    pub fn has_next(&self) -> bool {
        self.scan.probe().is_some()
    }

    /// The most recent verdict, if any position has been visited since the
    /// last reset.
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last
    }

    /// Whether the most recent verdict was a match.
    pub fn element_found(&self) -> bool {
        self.last.is_some_and(|v| v.matched)
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

    /// The matching position of the last verdict, if it matched.
    pub fn outcome(&self) -> SearchOutcome<'a, T> {
        let index = self.last.filter(|v| v.matched).map(|v| v.index);
        SearchOutcome::new(self.state.sequence(), index)
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
        self.last = None;
    }
}

impl<'a, K, T, C, S> Locator<'a, K, T, C, S>
where
    C: Comparator<K, T>,
    S: Traversal,
{
    /// Compares the key at the current probe, records and returns the
    /// verdict, then moves on.
    ///
    /// Fails with `NotFound` once the window is exhausted.
    pub fn next_verdict(&mut self) -> Result<bool> {
        self.visit().map(|v| v.matched)
    }

    /// Visits positions until one matches or the window is exhausted, and
    /// returns whether a match was reached.
    ///
    /// If the last verdict already matched, returns `true` without moving,
    /// so repeated calls report the same position.
    pub fn found(&mut self) -> Result<bool> {
        if self.element_found() {
            return Ok(true);
        }
        while self.has_next() {
            if self.next_verdict()? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Iterates over the verdicts of the remaining positions.
    ///
    /// The iterator ends after yielding the first error.
    pub fn verdicts(&mut self) -> Verdicts<'_, 'a, K, T, C, S> {
        Verdicts {
            locator: self,
            failed: false,
        }
    }

    fn visit(&mut self) -> Result<Verdict> {
        self.state.require_comparator()?;
        self.scan.prepare(&self.state)?;
        let index = self
            .scan
            .probe()
            .ok_or_else(|| Error::not_found("no position left in the window"))?;
        let ordering = self.state.compare_at(index)?;
        self.scan.advance(ordering);
        let verdict = Verdict {
            index,
            matched: ordering == Ordering::Equal,
        };
        self.last = Some(verdict);
        Ok(verdict)
    }
}

impl<'a, K, T, C> Locator<'a, K, T, C, LinearScan> {
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

    /// A scan over the whole sequence with the given step. Fails with
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

    /// Changes the step and starts over. Fails with `InvalidArgument` if
    /// `step` is zero.
    pub fn set_step(&mut self, step: isize) -> Result<()> {
        self.scan.set_step(step)?;
        self.rewind();
        Ok(())
    }
}

impl<'a, K, T, C> Locator<'a, K, T, C, LinearScan>
where
    C: Comparator<K, T>,
{
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

impl<'a, K, T, C> Locator<'a, K, T, C, BinaryScan> {
    /// A binary search for a key of another type than the elements; see
    /// [`Finder::sorted_by_key`](crate::Finder::sorted_by_key).
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

    pub fn set_order(&mut self, order: SortOrder) {
        self.scan.set_order(order);
        self.rewind();
    }
}

impl<'a, T, C> Locator<'a, T, T, C, BinaryScan>
where
    C: Comparator<T>,
{
    /// A binary search over the whole sequence, with the direction inferred
    /// from its first and last elements.
    pub fn sorted(key: &'a T, sequence: &'a [T], comparator: C) -> Result<Self> {
        Self::sorted_in_order(key, sequence, Some(comparator), SortOrder::Infer)
    }

    /// A binary search in the given direction; see
    /// [`Finder::sorted_in_order`](crate::Finder::sorted_in_order).
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

    pub fn infer_order(&mut self) -> Result<SortOrder> {
        self.state.enable_direction_inference();
        self.state.require_comparator()?;
        let order = resolve_order(SortOrder::Infer, &self.state)?;
        self.set_order(order);
        Ok(order)
    }
}

/// Iterator over the verdicts of a [`Locator`]'s remaining positions.
///
/// Yields `Err` once if the comparator fails or the cursor is misconfigured,
/// and ends there.
pub struct Verdicts<'l, 'a, K, T, C, S> {
    locator: &'l mut Locator<'a, K, T, C, S>,
    failed: bool,
}

impl<K, T, C, S> Iterator for Verdicts<'_, '_, K, T, C, S>
where
    C: Comparator<K, T>,
    S: Traversal,
{
    type Item = Result<Verdict>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.locator.has_next() {
            return None;
        }
        let verdict = self.locator.visit();
        self.failed = verdict.is_err();
        Some(verdict)
    }
}

impl<K, T, C, S> FusedIterator for Verdicts<'_, '_, K, T, C, S>
where
    C: Comparator<K, T>,
    S: Traversal,
{
}
