use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Converts to an integer; doubles round half up.
///
/// # Errors
/// `TypeMismatch` if the argument is not numeric.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::function::convert::int, value::core::Value};
///
/// assert_eq!(int(&[Value::Double(2.6)]).unwrap(), Value::Int(3));
/// assert_eq!(int(&[Value::from(" 12 ")]).unwrap(), Value::Int(12));
/// ```
pub fn int(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Int(args[0].to_int()?))
}

/// Converts to a double.
///
/// # Errors
/// `TypeMismatch` if the argument is not numeric.
pub fn dbl(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Double(args[0].to_double()?))
}

/// Converts to the printed text of the argument.
#[allow(clippy::unnecessary_wraps)]
pub fn text(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string()))
}

/// Converts to a date; strings use the date literal grammar.
///
/// # Errors
/// `TypeMismatch` for numbers; `SyntaxError` for malformed text.
pub fn date(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Date(args[0].to_date()?))
}
