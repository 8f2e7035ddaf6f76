use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::{
            binary::{arithmetic::add, assign::target},
            core::EvalResult,
        },
        value::core::{Number, Value},
    },
};

/// Adds `delta` to an assignable target. Returns the old and the new value.
pub(crate) fn step(reference: &Value, delta: i64) -> EvalResult<(Value, Value)> {
    let object = target(reference)?;
    let old = object.get()?.deref()?;
    let base = match &old {
        Value::Date(_) => old.clone(),
        _ => old.to_number()?.into(),
    };
    let new = add(base, Value::Int(delta))?;
    object.set(new.clone())?;
    Ok((old, new))
}

/// `++x`; yields the incremented value.
///
/// # Errors
/// `TypeMismatch` if the operand is not assignable or not numeric.
pub fn pre_increment(_left: Value, right: Value) -> EvalResult<Value> {
    step(&right, 1).map(|(_, new)| new)
}

/// `--x`; yields the decremented value.
///
/// # Errors
/// `TypeMismatch` if the operand is not assignable or not numeric.
pub fn pre_decrement(_left: Value, right: Value) -> EvalResult<Value> {
    step(&right, -1).map(|(_, new)| new)
}

/// `-x`
///
/// # Errors
/// `TypeMismatch` for non-numeric operands; `OutOfRange` for the smallest
/// integer.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::unary::negate, value::core::Value};
///
/// assert_eq!(negate(Value::Empty, Value::Int(5)).unwrap(), Value::Int(-5));
/// assert_eq!(negate(Value::Empty, Value::Double(0.5)).unwrap(), Value::Double(-0.5));
/// ```
pub fn negate(_left: Value, right: Value) -> EvalResult<Value> {
    match right.to_number()? {
        Number::Int(n) => n.checked_neg().map(Value::Int).ok_or(ErrorKind::OutOfRange),
        Number::Double(d) => Ok(Value::Double(-d)),
    }
}

/// `~x`, bitwise complement. `~true` is `false`.
///
/// # Errors
/// `TypeMismatch` for non-numeric operands.
pub fn bit_not(_left: Value, right: Value) -> EvalResult<Value> {
    Ok(Value::Int(!right.to_int()?))
}

/// `!x`, logical negation yielding `true` (-1) or `false` (0).
///
/// # Errors
/// `TypeMismatch` for non-numeric operands.
pub fn logical_not(_left: Value, right: Value) -> EvalResult<Value> {
    Ok((!right.truthy()?).into())
}

/// `new x`; instantiates a class (or a host object that supports it).
///
/// # Errors
/// `TypeMismatch` if the operand cannot be instantiated.
pub fn instantiate(_left: Value, right: Value) -> EvalResult<Value> {
    match right {
        Value::Object(object) => object.create(),
        _ => Err(ErrorKind::TypeMismatch),
    }
}
