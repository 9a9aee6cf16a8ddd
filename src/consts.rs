/// Minimum valid year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Number of days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month ordinal for January
pub const JANUARY: u8 = 0;
/// Month ordinal for February
pub const FEBRUARY: u8 = 1;
/// Month ordinal for December
pub const DECEMBER: u8 = 11;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a common year, indexed by zero-based month ordinal
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Weekday ordinal of 0001-01-01 (a Monday, with Sunday as ordinal 0)
pub(crate) const EPOCH_WEEKDAY: i64 = 1;

/// Number of days from 0001-01-01 through 9999-12-31.
/// No whole-day offset larger than this can stay inside the supported years.
pub const MAX_DAY_SPAN: i64 = 3_652_058;

/// Duration ticks are 100 nanoseconds long
pub const TICKS_PER_SECOND: i64 = 10_000_000;
/// Ticks in one calendar day
pub const TICKS_PER_DAY: i64 = TICKS_PER_SECOND * 86_400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Length of the canonical `YYYY-MM-DD` text
pub const ISO_LEN: usize = 10;

/// Opens and closes a literal run inside a format pattern
pub const PATTERN_QUOTE: char = '\'';

/// Locale domain holding the date pattern and month/weekday names
pub const LOCALE_DOMAIN: &str = "sys";
/// Locale key of the default date pattern
pub const LOCALE_DATE_KEY: &str = "date";
/// Pattern used when the locale defines none
pub const DEFAULT_PATTERN: &str = "D-MMM-YYYY";

/// Type tag carried by parse errors
pub const TYPE_NAME: &str = "Date";
/// Code literal of the default instance
pub const DEFAULT_CODE: &str = "Date.defVal";
