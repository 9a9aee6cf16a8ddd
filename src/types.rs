use crate::consts::{DAYS_PER_WEEK, LOCALE_DOMAIN, MONTHS_PER_YEAR};
use crate::{Locale, RangeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A month of the year, identified by its zero-based ordinal (`January` = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Month {
    January = 0,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTH_KEYS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const MONTH_FULL_KEYS: [&str; 12] = [
    "janFull", "febFull", "marFull", "aprFull", "mayFull", "junFull", "julFull", "augFull",
    "sepFull", "octFull", "novFull", "decFull",
];

const MONTH_ABBRS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    /// Every month in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Looks up a month by zero-based ordinal
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal < MONTHS_PER_YEAR {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }

    /// Zero-based ordinal (0..=11)
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// One-based month number as written in dates (1..=12)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Locale key of the abbreviated name, also used as the display form
    pub const fn key(self) -> &'static str {
        MONTH_KEYS[self as usize]
    }

    /// Abbreviated month name for `locale` ("Jan" when the locale has none)
    pub fn abbr_name(self, locale: &Locale) -> &str {
        let i = self as usize;
        locale.get(LOCALE_DOMAIN, MONTH_KEYS[i], MONTH_ABBRS[i])
    }

    /// Full month name for `locale` ("January" when the locale has none)
    pub fn full_name(self, locale: &Locale) -> &str {
        let i = self as usize;
        locale.get(LOCALE_DOMAIN, MONTH_FULL_KEYS[i], MONTH_NAMES[i])
    }
}

impl TryFrom<u8> for Month {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or(RangeError::InvalidMonth(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.ordinal()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A day of the week, identified by its ordinal (`Sunday` = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const WEEKDAY_KEYS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

const WEEKDAY_FULL_KEYS: [&str; 7] = [
    "sunFull", "monFull", "tueFull", "wedFull", "thuFull", "friFull", "satFull",
];

const WEEKDAY_ABBRS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Weekday {
    /// Every weekday, Sunday first
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Looks up a weekday by ordinal
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal < DAYS_PER_WEEK {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn key(self) -> &'static str {
        WEEKDAY_KEYS[self as usize]
    }

    /// Abbreviated weekday name for `locale` ("Sun" when the locale has none)
    pub fn abbr_name(self, locale: &Locale) -> &str {
        let i = self as usize;
        locale.get(LOCALE_DOMAIN, WEEKDAY_KEYS[i], WEEKDAY_ABBRS[i])
    }

    /// Full weekday name for `locale` ("Sunday" when the locale has none)
    pub fn full_name(self, locale: &Locale) -> &str {
        let i = self as usize;
        locale.get(LOCALE_DOMAIN, WEEKDAY_FULL_KEYS[i], WEEKDAY_NAMES[i])
    }
}

impl TryFrom<u8> for Weekday {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or(RangeError::InvalidWeekday(value))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.ordinal()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
