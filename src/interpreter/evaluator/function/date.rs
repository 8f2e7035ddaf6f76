use chrono::{Datelike, Local, NaiveDateTime, Timelike};

use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// The current local time, to the second.
#[allow(clippy::unnecessary_wraps)]
pub fn now(_args: &[Value]) -> EvalResult<Value> {
    let now = Local::now().naive_local();
    Ok(Value::Date(now.with_nanosecond(0).unwrap_or(now)))
}

/// Extracts one numeric component of a date argument.
fn component(args: &[Value], extract: fn(&NaiveDateTime) -> u32) -> EvalResult<Value> {
    Ok(Value::Int(i64::from(extract(&args[0].to_date()?))))
}

/// Day of the month, 1-31.
///
/// # Errors
/// `TypeMismatch` if the argument is not a date.
///
/// # Example
/// ```
/// use cinder::interpreter::{
///     evaluator::function::date::{day, day_of_week},
///     value::core::Value,
/// };
///
/// let date = Value::from("16.10.1974");
/// assert_eq!(day(&[date.clone()]).unwrap(), Value::Int(16));
/// assert_eq!(day_of_week(&[date]).unwrap(), Value::Int(3));
/// ```
pub fn day(args: &[Value]) -> EvalResult<Value> {
    component(args, Datelike::day)
}

/// Month, 1-12.
///
/// # Errors
/// `TypeMismatch` if the argument is not a date.
pub fn month(args: &[Value]) -> EvalResult<Value> {
    component(args, Datelike::month)
}

/// Four-digit year.
///
/// # Errors
/// `TypeMismatch` if the argument is not a date.
pub fn year(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Int(i64::from(args[0].to_date()?.year())))
}

/// Hour, 0-23.
///
/// # Errors
/// `TypeMismatch` if the argument is not a date.
pub fn hour(args: &[Value]) -> EvalResult<Value> {
    component(args, Timelike::hour)
}

/// Minute, 0-59.
///
/// # Errors
/// `TypeMismatch` if the argument is not a date.
pub fn minute(args: &[Value]) -> EvalResult<Value> {
    component(args, Timelike::minute)
}

/// Second, 0-59.
///
/// # Errors
/// `TypeMismatch` if the argument is not a date.
pub fn second(args: &[Value]) -> EvalResult<Value> {
    component(args, Timelike::second)
}

/// Day of the week, 0 for Sunday through 6 for Saturday.
///
/// # Errors
/// `TypeMismatch` if the argument is not a date.
pub fn day_of_week(args: &[Value]) -> EvalResult<Value> {
    component(args, |date| date.weekday().num_days_from_sunday())
}

/// Day of the year, 1-366.
///
/// # Errors
/// `TypeMismatch` if the argument is not a date.
pub fn day_of_year(args: &[Value]) -> EvalResult<Value> {
    component(args, Datelike::ordinal)
}
