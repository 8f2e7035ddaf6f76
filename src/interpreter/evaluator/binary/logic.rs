use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// `a; b` yields `b`.
#[allow(clippy::unnecessary_wraps)]
pub fn sequence(_left: Value, right: Value) -> EvalResult<Value> {
    Ok(right)
}

/// `left & right`, bitwise on integers.
///
/// # Errors
/// `TypeMismatch` for non-numeric operands.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::binary::logic::bit_and, value::core::Value};
///
/// assert_eq!(bit_and(Value::Int(6), Value::Int(3)).unwrap(), Value::Int(2));
/// ```
pub fn bit_and(left: Value, right: Value) -> EvalResult<Value> {
    Ok(Value::Int(left.to_int()? & right.to_int()?))
}

/// `left | right`, bitwise on integers.
///
/// # Errors
/// `TypeMismatch` for non-numeric operands.
pub fn bit_or(left: Value, right: Value) -> EvalResult<Value> {
    Ok(Value::Int(left.to_int()? | right.to_int()?))
}
