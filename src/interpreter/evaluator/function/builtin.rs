use std::f64::consts::PI;

use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Number, Value},
    },
};

/// Applies a real function to the single argument.
///
/// The generated functions convert their argument to a double and return a
/// double.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Double(std::f64::consts::PI / 2.0);
/// assert_eq!(sin(&[x]).unwrap(), Value::Double(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            Ok(Value::Double(args[0].to_double()?.$real_fn()))
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(atan, atan);
real_builtin!(exp, exp);
// Truncates toward zero; the result has the sign of the argument.
real_builtin!(fract, fract);

/// π
#[allow(clippy::unnecessary_wraps)]
pub fn pi(_args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Double(PI))
}

/// A uniformly distributed random double in `[0, 1)`.
#[allow(clippy::unnecessary_wraps)]
pub fn rnd(_args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Double(rand::random::<f64>()))
}

/// Natural logarithm.
///
/// # Errors
/// `InvalidArgument` for arguments that are not positive.
pub fn log(args: &[Value]) -> EvalResult<Value> {
    let x = args[0].to_double()?;
    if x <= 0.0 {
        return Err(ErrorKind::InvalidArgument);
    }
    Ok(Value::Double(x.ln()))
}

/// Square root.
///
/// # Errors
/// `InvalidArgument` for negative arguments.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::function::builtin::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::Int(9)]).unwrap(), Value::Double(3.0));
/// assert!(sqrt(&[Value::Int(-1)]).is_err());
/// ```
pub fn sqrt(args: &[Value]) -> EvalResult<Value> {
    let x = args[0].to_double()?;
    if x < 0.0 {
        return Err(ErrorKind::InvalidArgument);
    }
    Ok(Value::Double(x.sqrt()))
}

/// Absolute value; integers stay integers.
///
/// # Errors
/// `TypeMismatch` for non-numeric arguments; `OutOfRange` for the smallest
/// integer.
pub fn abs(args: &[Value]) -> EvalResult<Value> {
    match args[0].to_number()? {
        Number::Int(n) => n.checked_abs().map(Value::Int).ok_or(ErrorKind::OutOfRange),
        Number::Double(d) => Ok(Value::Double(d.abs())),
    }
}

/// Sign as an integer: `-1`, `0` or `1`.
///
/// # Errors
/// `TypeMismatch` for non-numeric arguments.
pub fn sgn(args: &[Value]) -> EvalResult<Value> {
    let sign = match args[0].to_number()? {
        Number::Int(n) => n.signum(),
        Number::Double(d) if d > 0.0 => 1,
        Number::Double(d) if d < 0.0 => -1,
        Number::Double(_) => 0,
    };
    Ok(Value::Int(sign))
}

/// `atan2(y, x)`
///
/// # Errors
/// `TypeMismatch` for non-numeric arguments.
pub fn atan2(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Double(args[0].to_double()?.atan2(args[1].to_double()?)))
}

/// Fails unless the argument is truthy; yields the argument.
///
/// # Errors
/// `AssertionFailed` for a false argument.
pub fn assert_fn(args: &[Value]) -> EvalResult<Value> {
    if !args[0].truthy()? {
        return Err(ErrorKind::AssertionFailed);
    }
    Ok(args[0].clone())
}
