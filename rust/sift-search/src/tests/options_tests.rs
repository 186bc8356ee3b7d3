use crate::{
    LinearFinder, LinearLocator, NaturalOrder, SearchOptions, SortOrder, SortedFinder,
    SortedLocator,
};

#[test]
fn test_defaults() {
    let options = SearchOptions::default();
    assert_eq!(options.window, None);
    assert_eq!(options.step, 1);
    assert_eq!(options.order, SortOrder::Infer);
    assert!(options.validate().is_ok());
    assert_eq!(SearchOptions::new(), options);
}

#[test]
fn test_json_round_trip() {
    let options = SearchOptions::new()
        .with_window(2..8)
        .with_step(-3)
        .with_order(SortOrder::Descending);
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(
        json,
        r#"{"window":{"start":2,"end":8},"step":-3,"order":"descending"}"#
    );
    let parsed: SearchOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, options);

    let parsed: SearchOptions = serde_json::from_str(r#"{"order":"unresolved"}"#).unwrap();
    assert_eq!(parsed.order, SortOrder::Unresolved);
    assert_eq!(parsed.step, 1);

    assert!(serde_json::from_str::<SearchOptions>(r#"{"order":"sideways"}"#).is_err());
}

#[test]
fn test_zero_step_rejected() {
    let seq = [1, 2, 3];
    let options: SearchOptions = serde_json::from_str(r#"{"step":0}"#).unwrap();
    assert!(options.validate().unwrap_err().is_invalid_arg());
    let err =
        LinearFinder::linear_from_options(&1, &seq, Some(NaturalOrder), &options).unwrap_err();
    assert!(err.is_invalid_arg());
    assert!(LinearLocator::linear_from_options(&1, &seq, Some(NaturalOrder), &options).is_err());
}

#[test]
fn test_linear_from_options() {
    let seq = [3, 0, 3, 0, 3, 0, 3];
    let options = SearchOptions::new().with_window(1..6).with_step(-2);
    let mut finder =
        LinearFinder::linear_from_options(&3, &seq, Some(NaturalOrder), &options).unwrap();
    assert_eq!(finder.window(), 1..6);
    // Visits 5, 3, 1.
    assert!(finder.found().unwrap_err().is_not_found());

    let options = options.with_step(-1);
    let mut locator =
        LinearLocator::linear_from_options(&3, &seq, Some(NaturalOrder), &options).unwrap();
    assert!(locator.found().unwrap());
    assert_eq!(locator.index().unwrap(), 4);
}

#[test]
fn test_sorted_from_options() {
    let seq = [90, 80, 70, 10, 20, 30, 40];
    // Only the window is sorted; inference looks at the window's ends.
    let options = SearchOptions::new().with_window(3..100);
    let mut finder =
        SortedFinder::sorted_from_options(&30, &seq, Some(NaturalOrder), &options).unwrap();
    assert_eq!(finder.window(), 3..7);
    assert_eq!(finder.order(), SortOrder::Ascending);
    assert_eq!(finder.found().unwrap(), 5);

    let options = SearchOptions::new()
        .with_window(0..3)
        .with_order(SortOrder::Descending);
    let mut locator =
        SortedLocator::sorted_from_options(&80, &seq, Some(NaturalOrder), &options).unwrap();
    assert!(locator.found().unwrap());
    assert_eq!(locator.index().unwrap(), 1);

    // Without a comparator nothing can be inferred yet.
    let finder = SortedFinder::<i32, i32, NaturalOrder>::sorted_from_options(
        &30,
        &seq,
        None,
        &SearchOptions::new(),
    )
    .unwrap();
    assert_eq!(finder.order(), SortOrder::Infer);
}
