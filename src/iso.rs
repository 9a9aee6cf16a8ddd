//! Canonical `YYYY-MM-DD` text codec.
//!
//! The grammar is exactly ten ASCII bytes: four year digits, `-`, two month
//! digits, `-`, two day digits. Nothing is trimmed and no other shape is
//! accepted.

use crate::consts::{DATE_SEPARATOR, ISO_LEN, TYPE_NAME};
use crate::{Date, ParseError};
use tracing::debug;

const SEPARATOR_AT: [usize; 2] = [4, 7];

/// Parses canonical text.
///
/// With `strict` set, malformed text or a date that does not exist fails
/// with a [`ParseError`]; otherwise it yields `Ok(None)`.
///
/// # Errors
/// Returns `ParseError` only when `strict` is true.
pub fn parse(text: &str, strict: bool) -> Result<Option<Date>, ParseError> {
    match decode(text) {
        Some(date) => Ok(Some(date)),
        None if strict => Err(ParseError {
            type_name: TYPE_NAME,
            text:      text.to_owned(),
        }),
        None => {
            debug!(text, "rejected date text");
            Ok(None)
        },
    }
}

/// Formats `date` in its canonical ten-character form.
pub fn format(date: &Date) -> String {
    date.to_string()
}

fn decode(text: &str) -> Option<Date> {
    let bytes: &[u8; ISO_LEN] = text.as_bytes().try_into().ok()?;
    if SEPARATOR_AT.iter().any(|&i| bytes[i] != DATE_SEPARATOR as u8) {
        return None;
    }

    let year = digits(&bytes[0..4])?;
    let month = digits(&bytes[5..7])?;
    let day = digits(&bytes[8..10])?;

    // Months are written 1-based and stored 0-based
    let month = u8::try_from(month).ok()?.checked_sub(1)?;
    Date::make(
        i32::try_from(year).ok()?,
        month,
        u8::try_from(day).ok()?,
    )
    .ok()
}

fn digits(field: &[u8]) -> Option<u32> {
    field.iter().try_fold(0_u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
