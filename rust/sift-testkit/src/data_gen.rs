//! Data generation utilities for testing.
//!
//! All generators take an explicit [`fastrand::Rng`] so that a failing test
//! can be replayed from its seed.

use std::ops::Range;

/// Generates `len` values drawn uniformly from `values`, in no particular
/// order.
pub fn random_values(rng: &mut fastrand::Rng, len: usize, values: Range<i32>) -> Vec<i32> {
    assert!(!values.is_empty());
    (0..len).map(|_| rng.i32(values.clone())).collect()
}

/// Generates `len` values from `values`, sorted ascending.
///
/// A narrow `values` range relative to `len` produces long runs of
/// duplicates.
pub fn sorted_values(rng: &mut fastrand::Rng, len: usize, values: Range<i32>) -> Vec<i32> {
    let mut v = random_values(rng, len, values);
    v.sort_unstable();
    v
}

/// Generates `len` values from `values`, sorted descending.
pub fn sorted_values_desc(rng: &mut fastrand::Rng, len: usize, values: Range<i32>) -> Vec<i32> {
    let mut v = sorted_values(rng, len, values);
    v.reverse();
    v
}

/// Generates a strictly ascending sequence of `len` values starting at
/// `start`, with gaps of 1 to `max_gap`.
pub fn distinct_sorted_values(
    rng: &mut fastrand::Rng,
    len: usize,
    start: i32,
    max_gap: i32,
) -> Vec<i32> {
    assert!(max_gap >= 1);
    let mut next = start;
    (0..len)
        .map(|_| {
            let value = next;
            next += rng.i32(1..=max_gap);
            value
        })
        .collect()
}

/// Generates a random window `start..end` with `start <= end <= len`.
pub fn random_window(rng: &mut fastrand::Rng, len: usize) -> Range<usize> {
    let start = rng.usize(..=len);
    let end = rng.usize(start..=len);
    start..end
}

/// Picks a search key: an element of `values` half of the time, otherwise a
/// value drawn from `fallback` (which may or may not be present).
pub fn pick_key(rng: &mut fastrand::Rng, values: &[i32], fallback: Range<i32>) -> i32 {
    if !values.is_empty() && rng.bool() {
        values[rng.usize(..values.len())]
    } else {
        rng.i32(fallback)
    }
}
