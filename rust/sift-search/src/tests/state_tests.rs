use std::cmp::Ordering;

use crate::{NaturalOrder, state::SearchState, state::clamp_window};

#[test]
fn test_clamp_window() {
    assert_eq!(clamp_window(.., 5), 0..5);
    assert_eq!(clamp_window(1..3, 5), 1..3);
    assert_eq!(clamp_window(1..=3, 5), 1..4);
    assert_eq!(clamp_window(2.., 5), 2..5);
    assert_eq!(clamp_window(..=9, 5), 0..5);
    assert_eq!(clamp_window(3..100, 5), 3..5);
    assert_eq!(clamp_window(7..100, 5), 5..5);
    assert_eq!(clamp_window(4..2, 5), 2..2);
    assert_eq!(clamp_window(0..0, 0), 0..0);
    assert_eq!(clamp_window(..=usize::MAX, 5), 0..5);
}

#[test]
fn test_window_is_clamped_silently() {
    let seq = [10, 20, 30];
    let mut state = SearchState::new(&20, &seq, Some(NaturalOrder));
    assert_eq!(state.window(), 0..3);

    assert_eq!(state.set_window(1..10), 1..3);
    assert_eq!(state.window_slice(), &[20, 30]);

    assert_eq!(state.set_window(5..10), 3..3);
    assert!(state.window_slice().is_empty());
}

#[test]
fn test_compare_at() {
    let seq = [10, 20, 30];
    let mut state = SearchState::new(&20, &seq, Some(NaturalOrder));
    assert_eq!(state.compare_at(0).unwrap(), Ordering::Greater);
    assert_eq!(state.compare_at(1).unwrap(), Ordering::Equal);
    assert_eq!(state.compare_at(2).unwrap(), Ordering::Less);

    state.set_key(&30);
    assert_eq!(state.compare_at(2).unwrap(), Ordering::Equal);
}

#[test]
fn test_missing_comparator() {
    let seq = [1, 2];
    let mut state = SearchState::<i32, i32, NaturalOrder>::new(&1, &seq, None);
    let err = state.compare_at(0).unwrap_err();
    assert!(err.is_invalid_arg());
    assert!(state.require_comparator().is_err());

    state.set_comparator(NaturalOrder);
    assert_eq!(state.compare_at(0).unwrap(), Ordering::Equal);
}
