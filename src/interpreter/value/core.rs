use std::{borrow::Cow, cmp::Ordering, fmt};

use chrono::NaiveDateTime;
use ordered_float::OrderedFloat;

use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::core::EvalResult,
        object::{array::Array, core::Object, variable::Variable},
        value::date::{epoch_day, format_date, parse_date},
    },
    util::num::{format_double, i64_to_f64, round_to_i64},
};

/// Integer produced by comparisons and logical operators for "true".
pub const TRUE: i64 = -1;
/// Integer produced by comparisons and logical operators for "false".
pub const FALSE: i64 = 0;

/// Upper bound on `get` hops while dereferencing chained references.
const MAX_DEREF_HOPS: usize = 64;

/// Represents a runtime value in the interpreter.
///
/// Scalars are stored inline. Anything with identity or behaviour (variables,
/// arrays, functions, classes, instances, host objects) is an [`Object`]
/// handle shared by reference counting.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value. Converts to `0`, `0.0` or `""`.
    #[default]
    Empty,
    /// A 64-bit signed integer.
    Int(i64),
    /// A double precision floating-point number.
    Double(f64),
    /// A text string.
    Str(String),
    /// A calendar date with an optional time of day.
    Date(NaiveDateTime),
    /// A reference to a runtime object.
    Object(Object),
}

/// A value reduced to a number for arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Double(f64),
}

impl Number {
    /// The number as a double.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => i64_to_f64(n),
            Self::Double(d) => d,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Int(if v { TRUE } else { FALSE })
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::Date(v)
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        match v {
            Number::Int(n) => Self::Int(n),
            Number::Double(d) => Self::Double(d),
        }
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Object(Object::Array(v))
    }
}

impl From<Variable> for Value {
    fn from(v: Variable) -> Self {
        Self::Object(Object::Variable(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Array::new(v).into()
    }
}

impl Value {
    /// Returns `true` for [`Value::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Resolves references until a plain value or a self-describing object is
    /// reached.
    ///
    /// Variables and array elements yield what they hold; arrays of length 0
    /// and 1 collapse to `empty` and their single element. Objects whose
    /// `get` returns themselves (functions, classes, longer arrays) stop the
    /// chain.
    ///
    /// # Errors
    /// Propagates errors raised by an object's `get`, and reports
    /// `TypeMismatch` when references chain without end.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::{object::variable::Variable, value::core::Value};
    ///
    /// let cell = Value::from(Variable::new(Value::Int(7)));
    /// assert_eq!(cell.deref().unwrap(), Value::Int(7));
    /// ```
    pub fn deref(self) -> EvalResult<Self> {
        let mut value = self;
        for _ in 0..MAX_DEREF_HOPS {
            let Self::Object(object) = &value else {
                return Ok(value);
            };
            let inner = object.get()?;
            let stops = matches!(&inner, Self::Object(next) if next.ptr_eq(object));
            if stops {
                return Ok(value);
            }
            value = inner;
        }
        Err(ErrorKind::TypeMismatch)
    }

    /// Borrows scalars as they are and dereferences objects.
    fn resolved(&self) -> EvalResult<Cow<'_, Self>> {
        match self {
            Self::Object(_) => Ok(Cow::Owned(self.clone().deref()?)),
            _ => Ok(Cow::Borrowed(self)),
        }
    }

    /// Reduces the value to a number.
    ///
    /// `empty` is `0`; strings are parsed as an integer first, then as a
    /// double.
    ///
    /// # Errors
    /// `TypeMismatch` for dates, objects and strings that are not numbers.
    pub fn to_number(&self) -> EvalResult<Number> {
        match self.resolved()?.as_ref() {
            Self::Empty => Ok(Number::Int(0)),
            Self::Int(n) => Ok(Number::Int(*n)),
            Self::Double(d) => Ok(Number::Double(*d)),
            Self::Str(s) => parse_number(s),
            Self::Date(_) | Self::Object(_) => Err(ErrorKind::TypeMismatch),
        }
    }

    /// Converts the value to an integer. Doubles round half up.
    ///
    /// # Errors
    /// `TypeMismatch` if the value is not numeric; `OutOfRange` if a double
    /// does not fit.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Double(2.5).to_int().unwrap(), 3);
    /// assert_eq!(Value::from("42").to_int().unwrap(), 42);
    /// assert_eq!(Value::Empty.to_int().unwrap(), 0);
    /// ```
    pub fn to_int(&self) -> EvalResult<i64> {
        match self.to_number()? {
            Number::Int(n) => Ok(n),
            Number::Double(d) => round_to_i64(d),
        }
    }

    /// Converts the value to a double.
    ///
    /// # Errors
    /// `TypeMismatch` if the value is not numeric.
    pub fn to_double(&self) -> EvalResult<f64> {
        Ok(self.to_number()?.as_f64())
    }

    /// Converts the value to a date. Strings are parsed with the date literal
    /// grammar; `empty` is the epoch.
    ///
    /// # Errors
    /// `TypeMismatch` for numbers and objects, or the parse error of a
    /// malformed string.
    pub fn to_date(&self) -> EvalResult<NaiveDateTime> {
        match self.resolved()?.as_ref() {
            Self::Date(d) => Ok(*d),
            Self::Str(s) => parse_date(s),
            Self::Empty => Ok(epoch_day().and_hms_opt(0, 0, 0).unwrap_or_default()),
            _ => Err(ErrorKind::TypeMismatch),
        }
    }

    /// Truthiness: non-zero after integer conversion.
    ///
    /// # Errors
    /// Same as [`Value::to_int`].
    pub fn truthy(&self) -> EvalResult<bool> {
        Ok(self.to_int()? != 0)
    }

    /// Orders two values.
    ///
    /// Strings compare lexically; a string against another kind compares the
    /// textual forms. Dates only compare with dates. Numbers compare as
    /// integers when both are integers, otherwise as doubles with a total
    /// order.
    ///
    /// # Errors
    /// `TypeMismatch` when the kinds cannot be ordered.
    pub fn compare(&self, other: &Self) -> EvalResult<Ordering> {
        let left = self.resolved()?;
        let right = other.resolved()?;
        match (left.as_ref(), right.as_ref()) {
            (Self::Str(a), Self::Str(b)) => Ok(a.cmp(b)),
            (Self::Str(_), _) | (_, Self::Str(_)) => Ok(left.to_string().cmp(&right.to_string())),
            (Self::Date(a), Self::Date(b)) => Ok(a.cmp(b)),
            (Self::Date(_) | Self::Object(_), _) | (_, Self::Date(_) | Self::Object(_)) => {
                Err(ErrorKind::TypeMismatch)
            },
            (a, b) => match (a.to_number()?, b.to_number()?) {
                (Number::Int(x), Number::Int(y)) => Ok(x.cmp(&y)),
                (x, y) => Ok(OrderedFloat(x.as_f64()).cmp(&OrderedFloat(y.as_f64()))),
            },
        }
    }

    /// Equality as seen by `==`. Objects are equal only to themselves; kinds
    /// that cannot be ordered against each other are unequal.
    ///
    /// # Errors
    /// Propagates dereference errors.
    pub fn equals(&self, other: &Self) -> EvalResult<bool> {
        let left = self.resolved()?;
        let right = other.resolved()?;
        match (left.as_ref(), right.as_ref()) {
            (Self::Object(a), Self::Object(b)) => Ok(a.ptr_eq(b)),
            (a, b) => match a.compare(b) {
                Ok(ordering) => Ok(ordering == Ordering::Equal),
                Err(ErrorKind::TypeMismatch) => Ok(false),
                Err(e) => Err(e),
            },
        }
    }
}

/// Parses numeric text: an integer if possible, otherwise a double.
fn parse_number(text: &str) -> EvalResult<Number> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Number::Int(0));
    }
    text.parse::<i64>()
        .map(Number::Int)
        .or_else(|_| text.parse::<f64>().map(Number::Double))
        .map_err(|_| ErrorKind::TypeMismatch)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Int(n) => write!(f, "{n}"),
            Self::Double(d) => write!(f, "{}", format_double(*d)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{}", format_date(d)),
            Self::Object(object) => write!(f, "{object}"),
        }
    }
}
