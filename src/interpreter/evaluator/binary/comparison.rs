use std::cmp::Ordering;

use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// `left == right`, yielding `true` (-1) or `false` (0).
///
/// # Errors
/// Propagates dereference errors.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::binary::comparison::equal, value::core::Value};
///
/// assert_eq!(equal(Value::Int(2), Value::Double(2.0)).unwrap(), Value::Int(-1));
/// assert_eq!(equal(Value::from("a"), Value::from("b")).unwrap(), Value::Int(0));
/// ```
pub fn equal(left: Value, right: Value) -> EvalResult<Value> {
    Ok(left.equals(&right)?.into())
}

/// `left != right`
///
/// # Errors
/// Propagates dereference errors.
pub fn not_equal(left: Value, right: Value) -> EvalResult<Value> {
    Ok((!left.equals(&right)?).into())
}

/// `left < right`
///
/// # Errors
/// `TypeMismatch` when the operands cannot be ordered.
pub fn less(left: Value, right: Value) -> EvalResult<Value> {
    Ok((left.compare(&right)? == Ordering::Less).into())
}

/// `left <= right`
///
/// # Errors
/// `TypeMismatch` when the operands cannot be ordered.
pub fn less_equal(left: Value, right: Value) -> EvalResult<Value> {
    Ok((left.compare(&right)? != Ordering::Greater).into())
}

/// `left > right`
///
/// # Errors
/// `TypeMismatch` when the operands cannot be ordered.
pub fn greater(left: Value, right: Value) -> EvalResult<Value> {
    Ok((left.compare(&right)? == Ordering::Greater).into())
}

/// `left >= right`
///
/// # Errors
/// `TypeMismatch` when the operands cannot be ordered.
pub fn greater_equal(left: Value, right: Value) -> EvalResult<Value> {
    Ok((left.compare(&right)? != Ordering::Less).into())
}
