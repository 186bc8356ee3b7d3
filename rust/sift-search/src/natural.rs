//! Comparators derived from a type's intrinsic ordering.

use std::cmp::Ordering;

use sift_common::Result;

use crate::comparator::Comparator;

/// Compares the key against each element with `Ord`: `key.cmp(element)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, key: &T, element: &T) -> Result<Ordering> {
        Ok(key.cmp(element))
    }
}

/// Values that may stand for "no value", such as `None`.
pub trait MaybeAbsent {
    fn is_absent(&self) -> bool;
}

impl<U> MaybeAbsent for Option<U> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

/// Natural ordering that evaluates absent keys from the element's side.
///
/// A present key compares as `key.cmp(element)`. An absent key compares as
/// `element.cmp(key).reverse()`: the element orders itself against the absent
/// key and the sign is negated, so the result is still phrased from the key's
/// point of view. This lets an absent sentinel be searched for in a naturally
/// ordered sequence, e.g. `None` in `[None, Some("a"), Some("b")]`.
///
/// ```
/// use sift_search::{NaturalOrderAroundAbsentKey, find_first_by};
///
/// let seq = [None, Some("a"), Some("b")];
/// let hit = find_first_by(&None, &seq, NaturalOrderAroundAbsentKey).unwrap();
/// assert_eq!(hit.index().unwrap(), 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrderAroundAbsentKey;

impl<T: Ord + MaybeAbsent> Comparator<T> for NaturalOrderAroundAbsentKey {
    #[inline]
    fn compare(&self, key: &T, element: &T) -> Result<Ordering> {
        if key.is_absent() {
            Ok(element.cmp(key).reverse())
        } else {
            Ok(key.cmp(element))
        }
    }
}
