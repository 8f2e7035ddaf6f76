use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::{
            binary::arithmetic::{add, divide, multiply, subtract},
            core::EvalResult,
        },
        object::core::Object,
        value::core::Value,
    },
};

/// The assignable object behind an assignment target.
///
/// # Errors
/// `TypeMismatch` if the target is not a variable, an array element or a
/// host object.
pub fn target(value: &Value) -> EvalResult<&Object> {
    match value {
        Value::Object(object) if object.is_settable() => Ok(object),
        _ => Err(ErrorKind::TypeMismatch),
    }
}

/// `target = value`; yields the assigned value.
///
/// # Errors
/// `TypeMismatch` if the left side cannot be assigned.
pub fn assign(left: Value, right: Value) -> EvalResult<Value> {
    target(&left)?.set(right)
}

/// Reads the target, combines it with `right` and writes the result back.
fn compound(left: &Value,
            right: Value,
            op: fn(Value, Value) -> EvalResult<Value>)
            -> EvalResult<Value> {
    let object = target(left)?;
    let current = object.get()?.deref()?;
    object.set(op(current, right)?)
}

/// `target += value`
///
/// # Errors
/// As for `=` and `+`.
pub fn add_assign(left: Value, right: Value) -> EvalResult<Value> {
    compound(&left, right, add)
}

/// `target -= value`
///
/// # Errors
/// As for `=` and `-`.
pub fn subtract_assign(left: Value, right: Value) -> EvalResult<Value> {
    compound(&left, right, subtract)
}

/// `target *= value`
///
/// # Errors
/// As for `=` and `*`.
pub fn multiply_assign(left: Value, right: Value) -> EvalResult<Value> {
    compound(&left, right, multiply)
}

/// `target /= value`
///
/// # Errors
/// As for `=` and `/`.
pub fn divide_assign(left: Value, right: Value) -> EvalResult<Value> {
    compound(&left, right, divide)
}
