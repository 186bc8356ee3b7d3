//! Binary search over a sorted window.
//!
//! The window is expected to be sorted consistently with the comparator and
//! the [`SortOrder`] in effect. An unsorted window gives unspecified (but
//! memory-safe) results.
//!
//! With duplicate keys the search reports whichever matching position the
//! halving lands on first. That position is deterministic for a given
//! window, but it is neither the leftmost nor the rightmost match in
//! general.

use std::{cmp::Ordering, ops::Range};

use serde::{Deserialize, Serialize};
use sift_common::{Error, Result};

use super::Traversal;
use crate::{comparator::Comparator, state::SearchState};

/// Direction of a sorted window under its comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Derive the direction from the window's first and last elements
    /// (see [`infer_ascending`]), when the cursor is built or, lacking a
    /// comparator then, before its first search.
    #[default]
    Infer,
    Ascending,
    Descending,
    /// The direction is deliberately left open; it must be set before the
    /// first search step.
    Unresolved,
}

/// Where the key lies relative to a probed element, in window terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The probed element matches.
    Hit,
    /// The key lies after the probe: continue in `mid + 1..high`.
    Above,
    /// The key lies before the probe: continue in `low..mid`.
    Below,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> SortOrder {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    /// Returns `Some(true)` for ascending, `Some(false)` for descending and
    /// `None` while the direction is not known.
    pub fn ascending(self) -> Option<bool> {
        match self {
            SortOrder::Ascending => Some(true),
            SortOrder::Descending => Some(false),
            SortOrder::Infer | SortOrder::Unresolved => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        self.ascending().is_some()
    }

    /// Maps the result of `compare(key, element)` onto the window.
    ///
    /// In an ascending window a key ordering after the element lies above the
    /// probe; in a descending window the same ordering lies below it. Returns
    /// `None` if the direction is not resolved.
    pub fn classify(self, ordering: Ordering) -> Option<Probe> {
        let ascending = self.ascending()?;
        Some(match (ordering, ascending) {
            (Ordering::Equal, _) => Probe::Hit,
            (Ordering::Greater, true) | (Ordering::Less, false) => Probe::Above,
            (Ordering::Less, true) | (Ordering::Greater, false) => Probe::Below,
        })
    }
}

/// Decides whether `window` ascends under `comparator`.
///
/// A window of zero or one element is ascending. Otherwise the window
/// ascends iff its first element orders before its last one, i.e.
/// `compare(first, last) == Less`. A window whose ends compare equal is
/// reported as descending; all its elements are then equal anyway.
pub fn infer_ascending<T, C>(window: &[T], comparator: &C) -> Result<bool>
where
    C: Comparator<T> + ?Sized,
{
    match window {
        [] | [_] => Ok(true),
        [first, .., last] => Ok(comparator.compare(first, last)? == Ordering::Less),
    }
}

/// Halving traversal of a sorted window.
///
/// Keeps the half-open candidate range `low..high`. Each probe inspects
/// `mid = low + (high - low) / 2` and narrows to `mid + 1..high` or `low..mid`.
/// A hit collapses the range, so after a match no further probe remains.
#[derive(Debug, Clone)]
pub struct BinaryScan {
    order: SortOrder,
    low: usize,
    high: usize,
}

impl BinaryScan {
    pub fn new(order: SortOrder) -> BinaryScan {
        BinaryScan {
            order,
            low: 0,
            high: 0,
        }
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Sets the direction used by subsequent probes.
    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    /// The remaining candidate range.
    pub fn bounds(&self) -> Range<usize> {
        self.low..self.high
    }

    fn mid(&self) -> usize {
        self.low + (self.high - self.low) / 2
    }
}

impl Traversal for BinaryScan {
    fn rewind(&mut self, window: Range<usize>) {
        self.low = window.start;
        self.high = window.end;
    }

    fn prepare<K, T, C>(&mut self, state: &SearchState<'_, K, T, C>) -> Result<()> {
        self.order = resolve_order(self.order, state)?;
        match self.order {
            SortOrder::Ascending | SortOrder::Descending => Ok(()),
            SortOrder::Infer => Err(Error::invalid_arg(
                "order",
                "sort order cannot be inferred when the key is not an element",
            )),
            SortOrder::Unresolved => Err(Error::invalid_arg(
                "order",
                "sort order must be resolved before searching",
            )),
        }
    }

    fn probe(&self) -> Option<usize> {
        (self.low < self.high).then(|| self.mid())
    }

    fn advance(&mut self, ordering: Ordering) {
        let mid = self.mid();
        match self.order.classify(ordering) {
            Some(Probe::Above) => self.low = mid + 1,
            Some(Probe::Below) => self.high = mid,
            Some(Probe::Hit) | None => self.low = self.high,
        }
    }
}

/// Replaces [`SortOrder::Infer`] with the direction of the state's window.
///
/// Any other order is returned unchanged. `Infer` stays in place when the
/// state cannot decide yet (see [`SearchState::infer_direction`]).
pub(crate) fn resolve_order<K, T, C>(
    order: SortOrder,
    state: &SearchState<'_, K, T, C>,
) -> Result<SortOrder> {
    if order != SortOrder::Infer {
        return Ok(order);
    }
    match state.infer_direction()? {
        Some(ascending) => {
            log::debug!(
                "inferred {} order over window {:?}",
                if ascending { "ascending" } else { "descending" },
                state.window()
            );
            Ok(SortOrder::from_ascending(ascending))
        }
        None => Ok(order),
    }
}
