use crate::{error::ErrorKind, interpreter::evaluator::core::EvalResult};

/// Significant digits shown when a double is printed.
pub const DISPLAY_PRECISION: i32 = 6;

/// Lower bound of the `i64` range as an `f64` (`-2^63`, exact).
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
/// First `f64` above the `i64` range (`2^63`, exact).
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `f64` to `i64` by truncating toward zero.
///
/// ## Errors
/// Returns `OutOfRange` for non-finite values and values outside the `i64`
/// range.
///
/// ## Example
/// ```
/// use cinder::{error::ErrorKind, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(-2.9), Ok(-2));
/// assert_eq!(f64_to_i64_checked(1e20), Err(ErrorKind::OutOfRange));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_checked(value: f64) -> EvalResult<i64> {
    if !value.is_finite() || !(I64_MIN_F64..I64_END_F64).contains(&value) {
        return Err(ErrorKind::OutOfRange);
    }
    Ok(value.trunc() as i64)
}

/// Rounds a double to an integer the way scripts coerce doubles: half a unit
/// is added and the result truncated toward zero.
///
/// ## Example
/// ```
/// use cinder::util::num::round_to_i64;
///
/// assert_eq!(round_to_i64(2.5), Ok(3));
/// assert_eq!(round_to_i64(0.3), Ok(0));
/// assert_eq!(round_to_i64(-2.6), Ok(-2));
/// ```
pub fn round_to_i64(value: f64) -> EvalResult<i64> {
    f64_to_i64_checked(value + 0.5)
}

/// Widens an integer for mixed arithmetic. Magnitudes above `2^53` lose
/// precision, as in any double promotion.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a collection length or character count to a script integer.
pub fn usize_to_i64_checked(value: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| ErrorKind::OutOfRange)
}

/// Converts a script integer used as a position or count to `usize`.
///
/// ## Errors
/// Returns `InvalidArgument` for negative values.
///
/// ## Example
/// ```
/// use cinder::{error::ErrorKind, util::num::i64_to_usize_checked};
///
/// assert_eq!(i64_to_usize_checked(42), Ok(42));
/// assert_eq!(i64_to_usize_checked(-1), Err(ErrorKind::InvalidArgument));
/// ```
pub fn i64_to_usize_checked(value: i64) -> EvalResult<usize> {
    usize::try_from(value).map_err(|_| ErrorKind::InvalidArgument)
}

/// Formats a double with six significant digits, dropping trailing zeros and
/// switching to scientific notation for very large or very small magnitudes.
///
/// ## Example
/// ```
/// use cinder::util::num::format_double;
///
/// assert_eq!(format_double(21.599999999999998), "21.6");
/// assert_eq!(format_double(2.0), "2");
/// assert_eq!(format_double(1234567.0), "1.23457e+06");
/// assert_eq!(format_double(0.0001), "0.0001");
/// assert_eq!(format_double(0.00001), "1e-05");
/// ```
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:.*e}", (DISPLAY_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= DISPLAY_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (DISPLAY_PRECISION - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Strips trailing zeros after the decimal point, and the point itself when
/// nothing remains behind it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
