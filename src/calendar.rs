//! Proleptic Gregorian calendar arithmetic.
//!
//! Months are zero-based ordinals (`0` = January) and days are one-based.
//! Weekdays are ordinals with Sunday as `0`.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, EPOCH_WEEKDAY, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MIN_DAY, MONTHS_PER_YEAR,
};

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of the month with zero-based ordinal `month`.
///
/// # Panics
/// Panics if `month` is not in `0..=11`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    assert!(month < MONTHS_PER_YEAR, "month ordinal must be 0-11");

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Zero-based ordinal of `day` within its year: the lengths of all prior
/// months plus `day - 1`.
///
/// # Panics
/// Panics if `month` is not in `0..=11` or `day` does not exist in that month.
pub const fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    assert_day(year, month, day);
    let mut total = (day - MIN_DAY) as u16;
    let mut m = 0;
    while m < month {
        total += days_in_month(year, m) as u16;
        m += 1;
    }
    total
}

/// Days elapsed from 0001-01-01 to January 1st of `year`.
pub const fn days_before_year(year: i32) -> i64 {
    let y = year as i64 - 1;
    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Weekday ordinal (Sunday = 0) of the first day of `month`.
///
/// # Panics
/// Panics if `month` is not in `0..=11`.
pub const fn first_weekday(year: i32, month: u8) -> u8 {
    let days = days_before_year(year) + day_of_year(year, month, MIN_DAY) as i64;
    (EPOCH_WEEKDAY + days).rem_euclid(DAYS_PER_WEEK as i64) as u8
}

/// Weekday ordinal (Sunday = 0) of a date.
///
/// # Panics
/// Panics if `month` is not in `0..=11` or `day` does not exist in that month.
pub const fn weekday_of(year: i32, month: u8, day: u8) -> u8 {
    assert_day(year, month, day);
    (first_weekday(year, month) + day - MIN_DAY) % DAYS_PER_WEEK
}

const fn assert_day(year: i32, month: u8, day: u8) {
    assert!(
        day >= MIN_DAY && day <= days_in_month(year, month),
        "day does not exist in month"
    );
}
