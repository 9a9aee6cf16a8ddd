//! An immutable calendar date in the proleptic Gregorian calendar.
//!
//! [`Date`] names a day independent of time of day and timezone. It is
//! created through a validating constructor or the strict ISO parser, and is
//! never observable in a partially valid state.
//!
//! ```
//! use civil_date::{Date, Duration, Locale, Month};
//!
//! let date: Date = "2009-01-10".parse()?;
//! assert_eq!(date.month(), Month::January);
//! assert_eq!(date.to_locale(Some("WWWW D MMMM YYYY"), &Locale::en())?, "Saturday 10 January 2009");
//! assert_eq!(date.plus(Duration::from_days(22)?)?.to_string(), "2009-02-01");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod arith;
mod calendar;
mod consts;
mod duration;
mod error;
pub mod iso;
mod locale;
mod param;
pub mod pattern;
mod prelude;
mod types;

pub use calendar::{
    day_of_year, days_before_year, days_in_month, days_in_year, first_weekday, is_leap_year,
    weekday_of,
};
pub use consts::*;
pub use duration::Duration;
pub use error::{ArgumentError, DateError, ParseError, PatternError, RangeError};
pub use locale::{Locale, LocaleResolver};
pub use param::{Param, TypeRef};
pub use types::{Month, Weekday};

use crate::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A day in the proleptic Gregorian calendar.
///
/// Always holds a year in `MIN_YEAR..=MAX_YEAR` and a day that exists in its
/// month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.number()", day)]
pub struct Date {
    year:  i32,
    month: Month,
    day:   u8,
}

impl Date {
    /// 2000-01-01, the value produced by [`Default`]
    pub const DEFAULT: Self = Self {
        year:  2000,
        month: Month::January,
        day:   1,
    };

    /// Creates a date from a year, a month, and a one-based day.
    ///
    /// # Errors
    /// Returns `RangeError` if the year is outside `MIN_YEAR..=MAX_YEAR` or the
    /// day does not exist in that month.
    pub const fn new(year: i32, month: Month, day: u8) -> Result<Self, RangeError> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(RangeError::InvalidYear(year));
        }
        if day < MIN_DAY || day > days_in_month(year, month.ordinal()) {
            return Err(RangeError::InvalidDay {
                year,
                month: month.ordinal(),
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from a year, a zero-based month ordinal, and a
    /// one-based day.
    ///
    /// # Errors
    /// Returns `RangeError` if the month ordinal is not in `0..=11` or
    /// [`Date::new`] rejects the components.
    pub const fn make(year: i32, month: u8, day: u8) -> Result<Self, RangeError> {
        match Month::from_ordinal(month) {
            Some(month) => Self::new(year, month, day),
            None => Err(RangeError::InvalidMonth(month)),
        }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Day of the month (1..=31)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::ALL[weekday_of(self.year, self.month.ordinal(), self.day) as usize]
    }

    /// One-based day of the year (1..=366)
    pub const fn day_of_year(&self) -> u16 {
        day_of_year(self.year, self.month.ordinal(), self.day) + 1
    }

    /// Packs the components as `(year << 16) ^ (month << 8) ^ day`.
    ///
    /// The year is shifted unmasked. Years are bounded by `MAX_YEAR`, so every
    /// date gets a distinct code.
    pub const fn hash_code(&self) -> i64 {
        ((self.year as i64) << 16) ^ ((self.month.ordinal() as i64) << 8) ^ self.day as i64
    }

    /// Parses strict `YYYY-MM-DD` text.
    ///
    /// # Errors
    /// Returns `ParseError` if the text is malformed or names no real date.
    pub fn from_iso(text: &str) -> Result<Self, ParseError> {
        match iso::parse(text, true)? {
            Some(date) => Ok(date),
            None => Err(ParseError {
                type_name: TYPE_NAME,
                text:      text.to_owned(),
            }),
        }
    }

    /// Like [`Date::from_iso`], returning `None` instead of an error.
    pub fn try_from_iso(text: &str) -> Option<Self> {
        iso::parse(text, false).ok().flatten()
    }

    /// Canonical `YYYY-MM-DD` text
    pub fn to_iso(&self) -> String {
        iso::format(self)
    }

    /// Formats with `pattern`, or with the locale's default date pattern when
    /// `pattern` is `None`. See [`pattern`] for the grammar.
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern is malformed.
    pub fn to_locale<R>(&self, pattern: Option<&str>, resolver: &R) -> Result<String, PatternError>
    where
        R: LocaleResolver + ?Sized,
    {
        pattern::format(self, pattern, resolver)
    }

    /// Formats with `pattern` using English names.
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern is malformed.
    pub fn format_pattern(&self, pattern: &str) -> Result<String, PatternError> {
        pattern::format(self, Some(pattern), &Locale::en())
    }

    /// Source literal for this date: `Date.defVal` for [`Date::DEFAULT`],
    /// `Date("YYYY-MM-DD")` otherwise.
    pub fn to_code(&self) -> String {
        if *self == Self::DEFAULT {
            DEFAULT_CODE.to_owned()
        } else {
            format!("{TYPE_NAME}(\"{self}\")")
        }
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then(self.month.cmp(&other.month))
            .then(self.day.cmp(&other.day))
    }
}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash_code());
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso(s)
    }
}

impl TryFrom<(i32, u8, u8)> for Date {
    type Error = RangeError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::make(value.0, value.1, value.2)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::{Date, Duration};

    /// Builds a date from a zero-based month ordinal, panicking if invalid.
    pub fn date(year: i32, month: u8, day: u8) -> Date {
        Date::make(year, month, day).unwrap_or_else(|e| panic!("invalid test date: {e}"))
    }

    /// Builds a whole-day duration, panicking if it overflows the tick range.
    pub fn days(n: i64) -> Duration {
        Duration::from_days(n).unwrap_or_else(|e| panic!("invalid test duration: {e}"))
    }
}
