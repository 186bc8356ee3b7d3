use std::cmp::Ordering;

use crate::{
    Fallible, SearchOutcome, find_all, find_all_by, find_all_where, find_first, find_first_by,
    find_first_where, find_last, find_last_by, find_last_where, locate_first, locate_first_by,
    locate_first_where, locate_last, locate_last_by, locate_last_where, sorted_find,
    sorted_find_by, sorted_locate, sorted_locate_by,
};

#[test]
fn test_first_and_last() {
    let seq = [1, 3, 3, 5, 7];
    assert_eq!(find_first(&3, &seq).unwrap().index().unwrap(), 1);
    assert_eq!(find_last(&3, &seq).unwrap().index().unwrap(), 2);
    assert_eq!(locate_first(&3, &seq).unwrap().index().unwrap(), 1);
    assert_eq!(locate_last(&3, &seq).unwrap().index().unwrap(), 2);
    assert_eq!(*find_first(&7, &seq).unwrap().element().unwrap(), 7);
}

#[test]
fn test_sorted_duplicates_land_on_first_probe() {
    let seq = [1, 3, 3, 5, 7];
    let index = sorted_find(&3, &seq).unwrap().index().unwrap();
    assert_eq!(seq[index], 3);
    assert_eq!(index, 2);
    assert_eq!(sorted_locate(&3, &seq).unwrap().index().unwrap(), 2);

    // Same answer on every call.
    for _ in 0..3 {
        assert_eq!(sorted_find(&3, &seq).unwrap().index().unwrap(), 2);
    }

    // Neither leftmost nor rightmost in general.
    let seq = [2, 2, 2, 2, 2, 2, 2, 2];
    assert_eq!(sorted_find(&2, &seq).unwrap().index().unwrap(), 4);
}

#[test]
fn test_not_found_and_fallbacks() {
    let seq = [1, 3, 3, 5, 7];
    let outcome = find_first(&4, &seq).unwrap();
    assert!(!outcome.is_found());
    assert!(outcome.element().unwrap_err().is_not_found());
    assert!(outcome.index().unwrap_err().is_not_found());
    assert_eq!(outcome.element_opt(), None);
    assert_eq!(*outcome.element_or(&0), 0);
    assert_eq!(outcome.index_or(usize::MAX), usize::MAX);
    assert_eq!(outcome.index_opt(), None);

    assert!(!sorted_find(&4, &seq).unwrap().is_found());
    assert!(!locate_last(&4, &seq).unwrap().is_found());
    assert!(!sorted_locate(&8, &seq).unwrap().is_found());
}

#[test]
fn test_empty_sequence() {
    let seq: [Option<&str>; 0] = [];
    assert_eq!(find_first(&Some("x"), &seq).unwrap().element_opt(), None);
    assert_eq!(find_last(&None, &seq).unwrap().element_opt(), None);
    assert_eq!(locate_first(&None, &seq).unwrap().index_opt(), None);
    assert_eq!(locate_last(&None, &seq).unwrap().index_opt(), None);
    assert_eq!(sorted_find(&None, &seq).unwrap().element_opt(), None);
    assert_eq!(sorted_locate(&None, &seq).unwrap().element_opt(), None);
    assert!(find_all(&None, &seq).unwrap().is_empty());
}

#[test]
fn test_by_comparator() {
    let words = ["apple", "Banana", "cherry", "banana"];
    let ignore_case = |k: &&str, e: &&str| k.to_lowercase().cmp(&e.to_lowercase());
    assert_eq!(find_first_by(&"BANANA", &words, ignore_case).unwrap().index().unwrap(), 1);
    assert_eq!(find_last_by(&"BANANA", &words, ignore_case).unwrap().index().unwrap(), 3);
    assert_eq!(locate_first_by(&"Cherry", &words, ignore_case).unwrap().index().unwrap(), 2);
    assert_eq!(locate_last_by(&"APPLE", &words, ignore_case).unwrap().index().unwrap(), 0);
    assert_eq!(find_all_by(&"banana", &words, ignore_case).unwrap(), [1, 3]);

    let by_len = |k: &usize, e: &&str| k.cmp(&e.len());
    assert_eq!(*find_first_by(&6, &words, by_len).unwrap().element().unwrap(), "Banana");
}

#[test]
fn test_sorted_by_comparator_descending() {
    let seq = [50, 40, 30, 20, 10];
    let reversed = |k: &i32, e: &i32| e.cmp(k);
    // Under the reversed comparator the sequence ascends.
    assert_eq!(sorted_find_by(&20, &seq, reversed).unwrap().index().unwrap(), 3);
    assert_eq!(sorted_locate_by(&50, &seq, reversed).unwrap().index().unwrap(), 0);
    // Natural order sees it descending.
    assert_eq!(sorted_find(&20, &seq).unwrap().index().unwrap(), 3);
    assert!(!sorted_find(&25, &seq).unwrap().is_found());
}

#[test]
fn test_predicates() {
    let seq = [4, 9, 16, 25, 36];
    let odd = |x: &i32| x % 2 == 1;
    assert_eq!(find_first_where(&seq, odd).unwrap().index().unwrap(), 1);
    assert_eq!(find_last_where(&seq, odd).unwrap().index().unwrap(), 3);
    assert_eq!(locate_first_where(&seq, |x| *x > 20).unwrap().index().unwrap(), 3);
    assert_eq!(*locate_last_where(&seq, |x| *x < 10).unwrap().element().unwrap(), 9);
    assert_eq!(find_all_where(&seq, |x| x % 4 == 0).unwrap(), [0, 2, 4]);
    assert!(!find_first_where(&seq, |x| *x < 0).unwrap().is_found());
}

#[test]
fn test_find_all() {
    let seq = [7, 1, 7, 7, 2];
    assert_eq!(find_all(&7, &seq).unwrap(), [0, 2, 3]);
    assert!(find_all(&5, &seq).unwrap().is_empty());
}

#[test]
fn test_comparator_errors_are_not_misses() {
    let seq = [1.0, f64::NAN, 3.0];
    let partial = Fallible(|k: &f64, e: &f64| {
        k.partial_cmp(e)
            .ok_or_else(|| crate::Error::comparator(std::fmt::Error))
    });
    let err = find_first_by(&3.0, &seq, partial).unwrap_err();
    assert!(!err.is_not_found());
    assert!(find_all_by(&3.0, &seq, partial).is_err());

    // A miss before reaching the NaN is still an ordinary outcome.
    assert_eq!(find_first_by(&1.0, &seq, partial).unwrap().index().unwrap(), 0);
}

#[test]
fn test_outcome_accessors() {
    let seq = ["x", "y"];
    let hit = SearchOutcome::new(&seq, Some(1));
    assert!(hit.is_found());
    assert_eq!(*hit.element().unwrap(), "y");
    assert_eq!(hit.index_or(0), 1);

    let miss = SearchOutcome::not_found(&seq);
    assert_eq!(*miss.element_or(&"z"), "z");

    let copy = hit;
    assert_eq!(copy, hit);
    assert_eq!(
        find_first_by(&"y", &seq, |k: &&str, e: &&str| -> Ordering { k.cmp(e) }).unwrap(),
        hit
    );
}
