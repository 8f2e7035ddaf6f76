use std::{cmp::Ordering, rc::Rc};

use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::core::EvalResult,
        object::{
            array::Array,
            core::Object,
            function::{Functional, FunctionalKind},
        },
        value::core::Value,
    },
    util::num::{i64_to_usize_checked, usize_to_i64_checked},
};

/// Number of arguments, so `size(list)` is the length of the list.
///
/// # Errors
/// `OutOfRange` for counts that do not fit an integer.
pub fn size(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Int(usize_to_i64_checked(args.len())?))
}

/// `add(list, item)`: appends `item` and yields the list.
///
/// A list argument is extended in place; anything else starts a new list.
#[allow(clippy::unnecessary_wraps)]
pub fn add(args: &[Value]) -> EvalResult<Value> {
    let list = Array::from_value(&args[0]);
    list.push(args[1].clone());
    Ok(list.into())
}

/// `remove(list, index)`: removes the element at `index` and yields the
/// list.
///
/// # Errors
/// `InvalidArgument` for an index outside the list.
pub fn remove(args: &[Value]) -> EvalResult<Value> {
    let list = Array::from_value(&args[0]);
    list.remove(i64_to_usize_checked(args[1].to_int()?)?)?;
    Ok(list.into())
}

/// The first argument, or `empty`.
#[allow(clippy::unnecessary_wraps)]
pub fn head(args: &[Value]) -> EvalResult<Value> {
    Ok(args.first().cloned().unwrap_or_default())
}

/// Every argument but the first.
#[allow(clippy::unnecessary_wraps)]
pub fn tail(args: &[Value]) -> EvalResult<Value> {
    Ok(Array::new(args.iter().skip(1).cloned().collect()).into())
}

/// Picks the extreme argument for `wanted`; `empty` without arguments.
fn extreme(args: &[Value], wanted: Ordering) -> EvalResult<Value> {
    let mut best: Option<&Value> = None;
    for candidate in args {
        best = match best {
            Some(current) if candidate.compare(current)? != wanted => Some(current),
            _ => Some(candidate),
        };
    }
    Ok(best.cloned().unwrap_or_default())
}

/// The smallest argument.
///
/// # Errors
/// `TypeMismatch` if the arguments cannot be ordered.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::function::list::min, value::core::Value};
///
/// let r = min(&[Value::Int(3), Value::Double(1.5), Value::Int(2)]).unwrap();
/// assert_eq!(r, Value::Double(1.5));
/// ```
pub fn min(args: &[Value]) -> EvalResult<Value> {
    extreme(args, Ordering::Less)
}

/// The largest argument.
///
/// # Errors
/// `TypeMismatch` if the arguments cannot be ordered.
pub fn max(args: &[Value]) -> EvalResult<Value> {
    extreme(args, Ordering::Greater)
}

/// `fold(f)`, `map(f)` and `filter(f)`: wraps `f` so it can be applied to a
/// list, as in `map(f)(list)`.
///
/// # Errors
/// `TypeMismatch` if the argument is not a function object.
pub fn functional(kind: FunctionalKind, args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Object(function) => {
            Ok(Object::Functional(Rc::new(Functional::new(kind, function.clone()))).into())
        },
        _ => Err(ErrorKind::TypeMismatch),
    }
}
