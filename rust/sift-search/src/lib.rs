//! Stateful search cursors over borrowed sequences.
//!
//! This crate locates elements inside a fixed slice using a pluggable
//! [`Comparator`], either by scanning the slice linearly (forward, backward,
//! with any nonzero step) or by binary search over a sorted window
//! (ascending or descending). It offers:
//!
//! - **Cursors**: [`Finder`] yields only matching positions, [`Locator`]
//!   yields a match verdict for every visited position. Both keep their
//!   traversal state and can be reset with a new key or window.
//! - **Traversal strategies**: [`LinearScan`] and [`BinaryScan`], composed
//!   into the cursors rather than inherited.
//! - **Natural ordering**: [`NaturalOrder`] and
//!   [`NaturalOrderAroundAbsentKey`] derive a comparator from `Ord`.
//! - **Facades**: stateless functions such as [`find_first`] and
//!   [`sorted_find`] that drive a cursor to completion and return a
//!   [`SearchOutcome`].
//!
//! # Example
//!
//! ```
//! use sift_search::{find_first, find_last, sorted_find};
//!
//! let seq = [1, 3, 3, 5, 7];
//! assert_eq!(find_first(&3, &seq).unwrap().index().unwrap(), 1);
//! assert_eq!(find_last(&3, &seq).unwrap().index().unwrap(), 2);
//! assert_eq!(*sorted_find(&5, &seq).unwrap().element().unwrap(), 5);
//! assert_eq!(find_first(&4, &seq).unwrap().element_opt(), None);
//! ```

pub mod comparator;
pub mod facade;
pub mod finder;
pub mod locator;
pub mod natural;
pub mod options;
pub mod outcome;
pub mod state;
pub mod traversal;

#[cfg(test)]
mod tests;

pub use comparator::{Comparator, Fallible, Matching};
pub use facade::{
    find_all, find_all_by, find_all_where, find_first, find_first_by, find_first_where,
    find_last, find_last_by, find_last_where, locate_first, locate_first_by, locate_first_where,
    locate_last, locate_last_by, locate_last_where, sorted_find, sorted_find_by, sorted_locate,
    sorted_locate_by,
};
pub use finder::{Finder, LinearFinder, SortedFinder};
pub use locator::{LinearLocator, Locator, SortedLocator, Verdict};
pub use natural::{MaybeAbsent, NaturalOrder, NaturalOrderAroundAbsentKey};
pub use options::SearchOptions;
pub use outcome::SearchOutcome;
pub use sift_common::{Error, ErrorKind, Result};
pub use state::SearchState;
pub use traversal::{
    Traversal,
    binary::{BinaryScan, Probe, SortOrder, infer_ascending},
    linear::LinearScan,
};
