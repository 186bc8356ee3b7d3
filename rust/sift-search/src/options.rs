//! Cursor settings that can be stored and loaded with serde.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use sift_common::{Result, verify_arg};

use crate::{comparator::Comparator, state::SearchState, traversal::binary::SortOrder};

/// Construction settings for a cursor.
///
/// Every field has a default, so a partial document is enough:
///
/// ```
/// use sift_search::{SearchOptions, SortOrder};
///
/// let options: SearchOptions = serde_json::from_str(r#"{ "step": -2 }"#).unwrap();
/// assert_eq!(options.step, -2);
/// assert_eq!(options.window, None);
/// assert_eq!(options.order, SortOrder::Infer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Initial window; `None` searches the whole sequence. Clamped to the
    /// sequence when applied.
    pub window: Option<Range<usize>>,
    /// Linear scans only: distance between probes, negative for backward
    /// scans. Must not be zero.
    pub step: isize,
    /// Sorted searches only: direction of the window.
    pub order: SortOrder,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            window: None,
            step: 1,
            order: SortOrder::Infer,
        }
    }
}

impl SearchOptions {
    pub fn new() -> SearchOptions {
        Default::default()
    }

    pub fn with_window(mut self, window: Range<usize>) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_step(mut self, step: isize) -> Self {
        self.step = step;
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Fails with `InvalidArgument` if the options cannot drive a cursor.
    pub fn validate(&self) -> Result<()> {
        verify_arg!(step, self.step != 0);
        Ok(())
    }

    /// Builds the state record these options describe.
    pub(crate) fn state<'a, K, T, C>(
        &self,
        key: &'a K,
        sequence: &'a [T],
        comparator: Option<C>,
    ) -> SearchState<'a, K, T, C>
    where
        C: Comparator<K, T>,
    {
        let mut state = SearchState::new(key, sequence, comparator);
        if let Some(window) = &self.window {
            state.set_window(window.clone());
        }
        state
    }
}
