//! The result of a completed search.

use sift_common::{Error, Result};

/// A search result: the matching position in a sequence, if any.
///
/// The strict accessors ([`element`](Self::element), [`index`](Self::index))
/// fail with `NotFound` when nothing matched; the `_or` and `_opt` accessors
/// never fail.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchOutcome<'a, T> {
    sequence: &'a [T],
    index: Option<usize>,
}

impl<T> Clone for SearchOutcome<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SearchOutcome<'_, T> {}

impl<'a, T> SearchOutcome<'a, T> {
    /// Creates an outcome for `sequence`. `index` comes from a cursor over
    /// the same sequence and is therefore in bounds.
    pub(crate) fn new(sequence: &'a [T], index: Option<usize>) -> Self {
        debug_assert!(index.is_none_or(|i| i < sequence.len()));
        SearchOutcome { sequence, index }
    }

    pub fn not_found(sequence: &'a [T]) -> Self {
        SearchOutcome {
            sequence,
            index: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }

    pub fn element(&self) -> Result<&'a T> {
        self.element_opt()
            .ok_or_else(|| Error::not_found("no element matched the search key"))
    }

    pub fn element_or(&self, fallback: &'a T) -> &'a T {
        self.element_opt().unwrap_or(fallback)
    }

    pub fn element_opt(&self) -> Option<&'a T> {
        self.index.map(|i| &self.sequence[i])
    }

    pub fn index(&self) -> Result<usize> {
        self.index
            .ok_or_else(|| Error::not_found("no position matched the search key"))
    }

    pub fn index_or(&self, fallback: usize) -> usize {
        self.index.unwrap_or(fallback)
    }

    pub fn index_opt(&self) -> Option<usize> {
        self.index
    }
}
