mod facade_tests;
mod options_tests;
mod state_tests;

#[track_caller]
fn assert_not_found<T: std::fmt::Debug>(result: crate::Result<T>) {
    match result {
        Err(e) if e.is_not_found() => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}
