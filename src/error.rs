//! Error types for date construction, parsing, formatting and arithmetic.

use crate::consts::{MAX_YEAR, MIN_YEAR};

/// A date component, or the result of date arithmetic, falls outside the calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    #[error("Invalid month ordinal: {0} (must be 0-11)")]
    InvalidMonth(u8),

    #[error("Invalid weekday ordinal: {0} (must be 0-6)")]
    InvalidWeekday(u8),

    /// `month` is the zero-based ordinal.
    #[error("Invalid day {day} for month ordinal {month} of {year}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// A day offset too large to land on any supported date.
    #[error("Adding {days} days leaves the supported year range")]
    Overflow { days: i64 },
}

/// Text does not match the canonical `YYYY-MM-DD` form, or names no real date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {type_name}: {text:?}")]
pub struct ParseError {
    pub type_name: &'static str,
    pub text:      String,
}

/// A format pattern contains something the formatter cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid pattern: unterminated literal")]
    UnterminatedLiteral,

    #[error("Invalid pattern: unsupported char '{0}'")]
    UnsupportedChar(char),

    #[error("Invalid pattern: unsupported num '{letter}' (x{count})")]
    UnsupportedCount { letter: char, count: usize },
}

/// An argument to date arithmetic is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Duration must be even num of days: {ticks} ticks")]
    NotWholeDays { ticks: i64 },
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}
