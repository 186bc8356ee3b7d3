//! The state record shared by every cursor.

use std::{
    cmp::Ordering,
    ops::{Bound, Range, RangeBounds},
};

use sift_common::{Error, Result};

use crate::{comparator::Comparator, traversal::binary::infer_ascending};

/// Decides whether a window ascends under a comparator between elements.
pub type DirectionFn<T, C> = fn(&[T], &C) -> Result<bool>;

/// Sequence, key, comparator and window of a search session.
///
/// The sequence is borrowed for the lifetime of the state and never replaced.
/// The key, comparator and window may be changed any number of times to run
/// another search against the same sequence.
///
/// The comparator is optional so that a cursor can be created before its
/// comparison rule is known; every comparison fails with `InvalidArgument`
/// until one is supplied.
#[derive(Debug, Clone)]
pub struct SearchState<'a, K, T, C> {
    /// The searched elements.
    sequence: &'a [T],
    /// The value being searched for.
    key: &'a K,
    /// Relates `key` to each element.
    comparator: Option<C>,
    /// Active half-open index range, always within `0..sequence.len()`.
    window: Range<usize>,
    /// Present when the comparator can also order two elements, which is
    /// what direction inference of a sorted window needs.
    direction: Option<DirectionFn<T, C>>,
}

impl<'a, K, T, C> SearchState<'a, K, T, C> {
    /// Creates a state whose window covers the whole `sequence`.
    pub fn new(key: &'a K, sequence: &'a [T], comparator: Option<C>) -> Self {
        SearchState {
            sequence,
            key,
            comparator,
            window: 0..sequence.len(),
            direction: None,
        }
    }

    pub fn sequence(&self) -> &'a [T] {
        self.sequence
    }

    pub fn key(&self) -> &'a K {
        self.key
    }

    pub fn set_key(&mut self, key: &'a K) {
        self.key = key;
    }

    pub fn comparator(&self) -> Option<&C> {
        self.comparator.as_ref()
    }

    pub fn set_comparator(&mut self, comparator: C) {
        self.comparator = Some(comparator);
    }

    /// Returns the active window.
    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }

    /// The elements inside the active window.
    pub fn window_slice(&self) -> &'a [T] {
        &self.sequence[self.window.clone()]
    }

    /// Replaces the active window and returns the effective (clamped) range.
    ///
    /// Out-of-range bounds are corrected silently: the end is clamped to the
    /// sequence length and the start to the end.
    pub fn set_window(&mut self, window: impl RangeBounds<usize>) -> Range<usize> {
        self.window = clamp_window(window, self.sequence.len());
        self.window()
    }

    /// Returns the comparator, or `InvalidArgument` if none was supplied.
    pub fn require_comparator(&self) -> Result<&C> {
        self.comparator
            .as_ref()
            .ok_or_else(|| Error::invalid_arg("comparator", "comparator must be set before searching"))
    }

    /// Whether [`infer_direction`](Self::infer_direction) can decide
    /// anything once a comparator is present.
    pub fn can_infer_direction(&self) -> bool {
        self.direction.is_some()
    }

    /// Decides whether the active window ascends.
    ///
    /// Returns `None` when there is no comparator yet, or when elements
    /// cannot be compared with each other (the key is of another type).
    pub fn infer_direction(&self) -> Result<Option<bool>> {
        match (self.direction, &self.comparator) {
            (Some(direction), Some(comparator)) => {
                direction(self.window_slice(), comparator).map(Some)
            }
            _ => Ok(None),
        }
    }
}

impl<'a, T, C> SearchState<'a, T, T, C>
where
    C: Comparator<T>,
{
    /// Lets the state infer the direction of its window, using the
    /// comparator to order the window's first and last elements.
    pub fn enable_direction_inference(&mut self) {
        self.direction = Some(infer_ascending::<T, C>);
    }

    /// Builder form of
    /// [`enable_direction_inference`](Self::enable_direction_inference).
    pub fn with_direction_inference(mut self) -> Self {
        self.enable_direction_inference();
        self
    }
}

impl<'a, K, T, C> SearchState<'a, K, T, C>
where
    C: Comparator<K, T>,
{
    /// Compares the key against the element at `index`.
    ///
    /// Errors raised by the comparator are returned as is.
    #[inline]
    pub fn compare_at(&self, index: usize) -> Result<Ordering> {
        let ordering = self
            .require_comparator()?
            .compare(self.key, &self.sequence[index])?;
        log::trace!("probe {index}: key is {ordering:?} the element");
        Ok(ordering)
    }
}

/// Resolves `bounds` against a sequence of `len` elements.
///
/// The result satisfies `start <= end <= len`.
pub fn clamp_window(bounds: impl RangeBounds<usize>, len: usize) -> Range<usize> {
    let end = match bounds.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    }
    .min(len);
    let start = match bounds.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    }
    .min(end);
    start..end
}
