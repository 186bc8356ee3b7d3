//! Traversal strategies: where to probe next and how to move after a probe.
//!
//! A strategy owns the probe position and nothing else. Cursors ask it for
//! the next [`probe`](Traversal::probe) index, compare the key against the
//! element there, and feed the resulting ordering back through
//! [`advance`](Traversal::advance). Whether an ordering is a match is the
//! same for all strategies: `Ordering::Equal`.

use std::{cmp::Ordering, ops::Range};

use sift_common::Result;

use crate::state::SearchState;

pub mod binary;
pub mod linear;

pub trait Traversal {
    /// Re-arms the strategy over `window`, placing the probe on the window's
    /// leading edge.
    fn rewind(&mut self, window: Range<usize>);

    /// Settles whatever the strategy derives from the state before the
    /// first probe.
    ///
    /// Fails with `InvalidArgument` if the strategy cannot search yet.
    fn prepare<K, T, C>(&mut self, state: &SearchState<'_, K, T, C>) -> Result<()> {
        let _ = state;
        Ok(())
    }

    /// The index to compare next, or `None` once the window is exhausted.
    fn probe(&self) -> Option<usize>;

    /// Moves past the current probe given the key's ordering against the
    /// probed element.
    ///
    /// Must only be called after [`probe`](Traversal::probe) returned `Some`.
    fn advance(&mut self, ordering: Ordering);
}
