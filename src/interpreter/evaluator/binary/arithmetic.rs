use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::{Number, Value},
            date::{days_between, shift_days},
        },
    },
};

/// Applies an arithmetic operation to two numbers.
///
/// Two integers use the checked integer operation; any double makes the
/// operation a double one.
fn numeric(left: &Value,
           right: &Value,
           int_op: fn(i64, i64) -> Option<i64>,
           float_op: fn(f64, f64) -> f64)
           -> EvalResult<Value> {
    match (left.to_number()?, right.to_number()?) {
        (Number::Int(a), Number::Int(b)) => int_op(a, b).map(Value::Int)
                                                         .ok_or(ErrorKind::OutOfRange),
        (a, b) => Ok(Value::Double(float_op(a.as_f64(), b.as_f64()))),
    }
}

/// `left + right`
///
/// A string on either side concatenates the textual forms. A date plus a
/// number moves the date by that many days. Otherwise numeric addition.
///
/// # Errors
/// `TypeMismatch` for two dates or non-numeric operands; `OutOfRange` on
/// integer overflow.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::binary::arithmetic::add, value::core::Value};
///
/// assert_eq!(add(Value::Int(2), Value::Int(3)).unwrap(), Value::Int(5));
/// assert_eq!(add(Value::from("a"), Value::Int(1)).unwrap(), Value::from("a1"));
/// assert_eq!(add(Value::Int(1), Value::Double(0.5)).unwrap(), Value::Double(1.5));
/// ```
pub fn add(left: Value, right: Value) -> EvalResult<Value> {
    match (&left, &right) {
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::Str(format!("{left}{right}"))),
        (Value::Date(date), other) | (other, Value::Date(date)) => {
            Ok(Value::Date(shift_days(date, other.to_double()?)?))
        },
        _ => numeric(&left, &right, i64::checked_add, |a, b| a + b),
    }
}

/// `left - right`
///
/// Subtracting two dates yields the difference in days as a double;
/// subtracting a number from a date moves it back.
///
/// # Errors
/// `TypeMismatch` for a date on the right of a number or non-numeric
/// operands; `OutOfRange` on integer overflow.
pub fn subtract(left: Value, right: Value) -> EvalResult<Value> {
    match (&left, &right) {
        (Value::Date(a), Value::Date(b)) => Ok(Value::Double(days_between(a, b))),
        (Value::Date(date), other) => Ok(Value::Date(shift_days(date, -other.to_double()?)?)),
        (_, Value::Date(_)) => Err(ErrorKind::TypeMismatch),
        _ => numeric(&left, &right, i64::checked_sub, |a, b| a - b),
    }
}

/// `left * right`
///
/// # Errors
/// `TypeMismatch` for non-numeric operands; `OutOfRange` on integer overflow.
pub fn multiply(left: Value, right: Value) -> EvalResult<Value> {
    numeric(&left, &right, i64::checked_mul, |a, b| a * b)
}

/// Fails with `DivisionByZero` if `divisor` is zero.
fn check_divisor(divisor: &Value) -> EvalResult<()> {
    match divisor.to_number()? {
        Number::Int(0) => Err(ErrorKind::DivisionByZero),
        Number::Double(d) if d == 0.0 => Err(ErrorKind::DivisionByZero),
        _ => Ok(()),
    }
}

/// `left / right`. Two integers divide as integers, truncating.
///
/// # Errors
/// `DivisionByZero` for a zero divisor; `TypeMismatch` for non-numeric
/// operands.
///
/// # Example
/// ```
/// use cinder::{
///     error::ErrorKind,
///     interpreter::{evaluator::binary::arithmetic::divide, value::core::Value},
/// };
///
/// assert_eq!(divide(Value::Int(7), Value::Int(2)).unwrap(), Value::Int(3));
/// assert_eq!(divide(Value::Int(7), Value::Double(2.0)).unwrap(), Value::Double(3.5));
/// assert_eq!(divide(Value::Int(1), Value::Int(0)), Err(ErrorKind::DivisionByZero));
/// ```
pub fn divide(left: Value, right: Value) -> EvalResult<Value> {
    check_divisor(&right)?;
    numeric(&left, &right, i64::checked_div, |a, b| a / b)
}

/// `left % right`
///
/// # Errors
/// `DivisionByZero` for a zero divisor; `TypeMismatch` for non-numeric
/// operands.
pub fn remainder(left: Value, right: Value) -> EvalResult<Value> {
    check_divisor(&right)?;
    numeric(&left, &right, i64::checked_rem, |a, b| a % b)
}

/// `left ^ right`
///
/// An integer raised to a non-negative integer power stays an integer;
/// everything else is computed in doubles.
///
/// # Errors
/// `OutOfRange` when an integer power overflows; `TypeMismatch` for
/// non-numeric operands.
pub fn power(left: Value, right: Value) -> EvalResult<Value> {
    match (left.to_number()?, right.to_number()?) {
        (Number::Int(base), Number::Int(exp)) if exp >= 0 => {
            let exp = u32::try_from(exp).map_err(|_| ErrorKind::OutOfRange)?;
            base.checked_pow(exp)
                .map(Value::Int)
                .ok_or(ErrorKind::OutOfRange)
        },
        (base, exp) => Ok(Value::Double(base.as_f64().powf(exp.as_f64()))),
    }
}
