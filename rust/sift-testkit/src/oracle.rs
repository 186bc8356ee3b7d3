//! Straightforward reference searches used to validate the cursors.

use std::ops::Range;

/// Positions within `window` whose element equals `key`, ascending.
pub fn positions_of<T: PartialEq>(sequence: &[T], key: &T, window: Range<usize>) -> Vec<usize> {
    window.filter(|&i| sequence[i] == *key).collect()
}

/// Positions within `window` visited by a scan with `step`, in visiting
/// order: from `window.start` for a positive step, from `window.end - 1` for
/// a negative one.
pub fn scan_order(window: Range<usize>, step: isize) -> Vec<usize> {
    assert_ne!(step, 0);
    let stride = step.unsigned_abs();
    if step > 0 {
        window.step_by(stride).collect()
    } else {
        window.rev().step_by(stride).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order() {
        assert_eq!(scan_order(0..5, 1), [0, 1, 2, 3, 4]);
        assert_eq!(scan_order(0..5, 2), [0, 2, 4]);
        assert_eq!(scan_order(1..6, -2), [5, 3, 1]);
        assert_eq!(scan_order(3..3, -1), Vec::<usize>::new());
    }

    #[test]
    fn test_positions_of() {
        let v = [1, 3, 3, 5, 3];
        assert_eq!(positions_of(&v, &3, 0..5), [1, 2, 4]);
        assert_eq!(positions_of(&v, &3, 2..4), [2]);
        assert!(positions_of(&v, &9, 0..5).is_empty());
    }
}
