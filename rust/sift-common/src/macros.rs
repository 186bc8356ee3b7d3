/// Unwraps a `Result` inside an `Iterator<Item = Result<T>>::next()`.
///
/// `Ok(t)` yields `t`; `Err(e)` makes the enclosing `next()` return
/// `Some(Err(e))`, so a failing comparator surfaces as one error item.
#[macro_export]
macro_rules! try_or_ret_some_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => {
                return Some(Err(err));
            }
        }
    };
}
