//! Form date normalization.
//!
//! Forms collect dates as month/day/year text (`3/04/1990`). The backend only accepts ISO
//! calendar dates (`1990-03-04`), so every date field passes through [`normalize_date`] right
//! before it is put on the wire. Dates coming back from the backend are already ISO and are
//! displayed untouched.

use crate::constants::{FORM_DATE_HINT, ISO_DATE_FORMAT};
use crate::{VaccineError, VaccineResult};
use chrono::NaiveDate;

/// Parses month/day/year text into a calendar date.
///
/// Month and day take one or two digits, the year exactly four. Surrounding whitespace is
/// ignored. Out-of-range values such as `2/30/2000` are rejected rather than rolled over.
///
/// # Errors
///
/// Returns `VaccineError::Validation` when the text does not describe a real date in that layout.
pub fn parse_form_date(text: &str) -> VaccineResult<NaiveDate> {
    let invalid = || {
        VaccineError::Validation(format!(
            "date must be {}, got: '{}'",
            FORM_DATE_HINT, text
        ))
    };

    let mut parts = text.trim().split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let month = parse_digits(month, 1..=2).ok_or_else(invalid)?;
    let day = parse_digits(day, 1..=2).ok_or_else(invalid)?;
    let year = parse_digits(year, 4..=4).ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)
}

/// Reformats month/day/year text as a zero-padded `YYYY-MM-DD` string.
///
/// ```
/// assert_eq!(vaccine_core::dates::normalize_date("3/4/1990").unwrap(), "1990-03-04");
/// ```
pub fn normalize_date(text: &str) -> VaccineResult<String> {
    let date = parse_form_date(text)?;
    Ok(date.format(ISO_DATE_FORMAT).to_string())
}

fn parse_digits(field: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
