use crate::{
    error::ErrorKind,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{i64_to_usize_checked, usize_to_i64_checked},
};

/// Reads a character count argument.
fn count(value: &Value) -> EvalResult<usize> {
    i64_to_usize_checked(value.to_int()?)
}

/// The character with the given code point.
///
/// # Errors
/// `InvalidArgument` if the number is not a valid code point.
pub fn chr(args: &[Value]) -> EvalResult<Value> {
    let code = u32::try_from(args[0].to_int()?).map_err(|_| ErrorKind::InvalidArgument)?;
    let c = char::from_u32(code).ok_or(ErrorKind::InvalidArgument)?;
    Ok(Value::Str(c.to_string()))
}

/// Code point of the first character, or `0` for an empty string.
#[allow(clippy::unnecessary_wraps)]
pub fn asc(args: &[Value]) -> EvalResult<Value> {
    let code = args[0].to_string().chars().next().map_or(0, u32::from);
    Ok(Value::Int(i64::from(code)))
}

/// Length in characters.
///
/// # Errors
/// `OutOfRange` for lengths that do not fit an integer.
pub fn len(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Int(usize_to_i64_checked(args[0].to_string().chars().count())?))
}

/// The first `n` characters.
///
/// # Errors
/// `InvalidArgument` for a negative count.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::function::string::left, value::core::Value};
///
/// let r = left(&[Value::from("hello"), Value::Int(2)]).unwrap();
/// assert_eq!(r, Value::from("he"));
/// ```
pub fn left(args: &[Value]) -> EvalResult<Value> {
    let n = count(&args[1])?;
    Ok(Value::Str(args[0].to_string().chars().take(n).collect()))
}

/// The last `n` characters.
///
/// # Errors
/// `InvalidArgument` for a negative count.
pub fn right(args: &[Value]) -> EvalResult<Value> {
    let text = args[0].to_string();
    let n = count(&args[1])?;
    let skip = text.chars().count().saturating_sub(n);
    Ok(Value::Str(text.chars().skip(skip).collect()))
}

/// `len` characters starting at the zero-based position `start`.
///
/// # Errors
/// `InvalidArgument` for a negative position or length.
pub fn mid(args: &[Value]) -> EvalResult<Value> {
    let start = count(&args[1])?;
    let n = count(&args[2])?;
    Ok(Value::Str(args[0].to_string().chars().skip(start).take(n).collect()))
}

/// Upper case.
#[allow(clippy::unnecessary_wraps)]
pub fn upper(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string().to_uppercase()))
}

/// Lower case.
#[allow(clippy::unnecessary_wraps)]
pub fn lower(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string().to_lowercase()))
}

/// `string(n, s)`: the first character of `s` repeated `n` times.
///
/// # Errors
/// `InvalidArgument` for a negative count.
pub fn repeat(args: &[Value]) -> EvalResult<Value> {
    let n = count(&args[0])?;
    let text = args[1].to_string();
    Ok(Value::Str(text.chars().next().map_or_else(String::new, |c| c.to_string().repeat(n))))
}

/// `replace(s, from, to)`: every occurrence of `from` replaced by `to`.
#[allow(clippy::unnecessary_wraps)]
pub fn replace(args: &[Value]) -> EvalResult<Value> {
    let text = args[0].to_string();
    let from = args[1].to_string();
    if from.is_empty() {
        return Ok(Value::Str(text));
    }
    Ok(Value::Str(text.replace(&from, &args[2].to_string())))
}

/// `instr(s, sub)`: zero-based character position of `sub`, or `-1`.
///
/// # Errors
/// `OutOfRange` for positions that do not fit an integer.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::function::string::instr, value::core::Value};
///
/// assert_eq!(instr(&[Value::from("hello"), Value::from("ll")]).unwrap(), Value::Int(2));
/// assert_eq!(instr(&[Value::from("hello"), Value::from("x")]).unwrap(), Value::Int(-1));
/// ```
pub fn instr(args: &[Value]) -> EvalResult<Value> {
    let text = args[0].to_string();
    match text.find(&args[1].to_string()) {
        Some(byte) => Ok(Value::Int(usize_to_i64_checked(text[..byte].chars().count())?)),
        None => Ok(Value::Int(-1)),
    }
}

/// Lower-case hexadecimal digits of an integer.
///
/// # Errors
/// `TypeMismatch` if the argument is not numeric.
pub fn hex(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Str(format!("{:x}", args[0].to_int()?)))
}

/// `rgb(r, g, b)`: a colour packed as `r + 256*g + 65536*b`.
///
/// # Errors
/// `InvalidArgument` if a component is outside 0-255.
pub fn rgb(args: &[Value]) -> EvalResult<Value> {
    let mut packed = 0;
    for (shift, component) in args.iter().enumerate() {
        let c = component.to_int()?;
        if !(0..=255).contains(&c) {
            return Err(ErrorKind::InvalidArgument);
        }
        packed |= c << (8 * shift);
    }
    Ok(Value::Int(packed))
}
