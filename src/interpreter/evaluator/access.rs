use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::{core::EvalResult, unary::step},
        value::core::Value,
    },
};

/// `x++`; yields the value before the increment.
///
/// # Errors
/// `TypeMismatch` if the operand is not assignable or not numeric.
pub fn post_increment(left: Value, _right: Value) -> EvalResult<Value> {
    step(&left, 1).map(|(old, _)| old)
}

/// `x--`; yields the value before the decrement.
///
/// # Errors
/// `TypeMismatch` if the operand is not assignable or not numeric.
pub fn post_decrement(left: Value, _right: Value) -> EvalResult<Value> {
    step(&left, -1).map(|(old, _)| old)
}

/// `f(args)`
///
/// # Errors
/// `TypeMismatch` if the callee is not callable, otherwise what the callee
/// reports.
pub fn call(left: Value, right: Value) -> EvalResult<Value> {
    match left {
        Value::Object(object) => object.call(right),
        _ => Err(ErrorKind::TypeMismatch),
    }
}

/// `x[i]`; yields an assignable reference where the object supports one.
///
/// # Errors
/// `InvalidArgument` for a bad index; `TypeMismatch` if the operand cannot be
/// indexed.
pub fn index(left: Value, right: Value) -> EvalResult<Value> {
    match left {
        Value::Object(object) => object.index(&right),
        _ => Err(ErrorKind::TypeMismatch),
    }
}

/// `x.name`; the right operand carries the member name.
///
/// # Errors
/// `UnknownVariable` for a missing instance member; `TypeMismatch` if the
/// operand has no members.
pub fn member(left: Value, right: Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Object(object), Value::Str(name)) => object.item(&name),
        _ => Err(ErrorKind::TypeMismatch),
    }
}
