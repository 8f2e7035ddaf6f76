use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::{
    error::ErrorKind,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_checked, i64_to_f64},
};

const SECONDS_PER_DAY: i64 = 86_400;

/// Accumulation stages of the date grammar, in input order.
const DAY: usize = 0;
const MONTH: usize = 1;
const YEAR: usize = 2;
const HOUR: usize = 3;
const MINUTE: usize = 4;
const SECOND: usize = 5;

/// The day that time-only literals are anchored to.
#[must_use]
pub fn epoch_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Parses `day.month.year[ hour:minute[:second]]` or `hour:minute[:second]`.
///
/// Fields are accumulated digit by digit. A `:` before any date separator
/// makes the text a time of day on 01.01.1970. Two-digit years below 50 land
/// in the 2000s, the others in the 1900s. Parsing stops quietly at the first
/// character outside the grammar.
///
/// # Errors
/// `SyntaxError` when a separator appears out of order or a field is out of
/// range (day 1-31, month 1-12, year 1900-9999, hour 0-23, minute and second
/// 0-59), or when the day does not exist in that month.
///
/// # Example
/// ```
/// use cinder::interpreter::value::date::{format_date, parse_date};
///
/// let date = parse_date("16.10.74").unwrap();
/// assert_eq!(format_date(&date), "16.10.1974");
///
/// let time = parse_date("10:30").unwrap();
/// assert_eq!(format_date(&time), "10:30");
///
/// assert!(parse_date("32.01.2000").is_err());
/// ```
pub fn parse_date(text: &str) -> EvalResult<NaiveDateTime> {
    let mut fields = [0_i64; 6];
    let mut stage = DAY;

    for c in text.trim().chars() {
        match c {
            '0'..='9' => {
                let digit = i64::from(c as u8 - b'0');
                fields[stage] = (fields[stage] * 10 + digit).min(1_000_000);
            },
            '.' => {
                if stage > YEAR {
                    return Err(ErrorKind::SyntaxError);
                }
                stage += 1;
            },
            ':' => {
                if stage == DAY {
                    fields[HOUR] = fields[DAY];
                    fields[DAY] = 1;
                    fields[MONTH] = 1;
                    fields[YEAR] = 1970;
                    stage = HOUR;
                }
                if stage < HOUR || stage == SECOND {
                    return Err(ErrorKind::SyntaxError);
                }
                stage += 1;
            },
            ' ' => {
                if stage != YEAR && stage != HOUR {
                    return Err(ErrorKind::SyntaxError);
                }
                stage = HOUR;
            },
            _ => break,
        }
    }

    if fields[YEAR] < 100 {
        fields[YEAR] += if fields[YEAR] < 50 { 2000 } else { 1900 };
    }

    let in_range = (1..=31).contains(&fields[DAY])
                   && (1..=12).contains(&fields[MONTH])
                   && (1900..=9999).contains(&fields[YEAR])
                   && (0..=23).contains(&fields[HOUR])
                   && (0..=59).contains(&fields[MINUTE])
                   && (0..=59).contains(&fields[SECOND]);
    if !in_range {
        return Err(ErrorKind::SyntaxError);
    }

    let [day, month, year, hour, minute, second] = fields.map(|f| u32::try_from(f).unwrap_or(0));
    let year = i32::try_from(year).map_err(|_| ErrorKind::SyntaxError)?;

    NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(hour, minute, second))
                                             .ok_or(ErrorKind::SyntaxError)
}

/// Formats a timestamp, omitting whichever half carries no information.
///
/// The time of day is left out when it is midnight, the date when it is the
/// epoch day, and seconds when they are zero. Midnight of the epoch day
/// prints as a date.
#[must_use]
pub fn format_date(date: &NaiveDateTime) -> String {
    let has_date = date.date() != epoch_day();
    let has_time = date.num_seconds_from_midnight() != 0;

    let mut text = String::new();
    if has_date || !has_time {
        text.push_str(&date.format("%d.%m.%Y").to_string());
    }
    if has_time {
        if !text.is_empty() {
            text.push(' ');
        }
        let pattern = if date.second() == 0 { "%H:%M" } else { "%H:%M:%S" };
        text.push_str(&date.format(pattern).to_string());
    }
    text
}

/// Moves a timestamp by a (possibly fractional) number of days, rounded to
/// whole seconds.
pub fn shift_days(date: &NaiveDateTime, days: f64) -> EvalResult<NaiveDateTime> {
    let seconds = f64_to_i64_checked((days * i64_to_f64(SECONDS_PER_DAY)).round())?;
    TimeDelta::try_seconds(seconds).and_then(|delta| date.checked_add_signed(delta))
                                   .ok_or(ErrorKind::OutOfRange)
}

/// Returns `later - earlier` in days.
#[must_use]
pub fn days_between(later: &NaiveDateTime, earlier: &NaiveDateTime) -> f64 {
    i64_to_f64((*later - *earlier).num_seconds()) / i64_to_f64(SECONDS_PER_DAY)
}
