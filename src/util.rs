/// Numeric conversion and formatting helpers.
///
/// This module provides the checked conversions between `i64`, `usize` and
/// `f64` that the coercion rules and built-in functions rely on, plus the
/// shortest-form double formatting used when values are printed.
///
/// All conversions return a `Result`, which is `Ok` if the value fits the
/// target type and an `OutOfRange` or `InvalidArgument` error otherwise.
pub mod num;
