//! Whole-day date arithmetic.

use crate::calendar::{days_in_month, days_in_year};
use crate::consts::{
    DECEMBER, JANUARY, MAX_DAY_SPAN, MAX_YEAR, MIN_DAY, MIN_YEAR, TICKS_PER_DAY,
};
use crate::{ArgumentError, Date, DateError, Duration, RangeError};
use std::ops::Sub;
use tracing::trace;

impl Date {
    /// Adds a duration that is a whole number of days.
    ///
    /// # Errors
    /// Returns `DateError::Argument` if `duration` is not a multiple of one
    /// day, or `DateError::Range` if the result leaves the supported years.
    pub fn plus(self, duration: Duration) -> Result<Self, DateError> {
        let days = duration
            .whole_days()
            .ok_or(ArgumentError::NotWholeDays {
                ticks: duration.ticks(),
            })?;
        Ok(self.plus_days(days)?)
    }

    /// Moves `days` days forward, or backward when negative, one day at a
    /// time so every month and leap-year boundary is carried exactly.
    ///
    /// # Errors
    /// Returns `RangeError::Overflow` if the result leaves the supported years.
    pub fn plus_days(self, days: i64) -> Result<Self, RangeError> {
        if days.unsigned_abs() > MAX_DAY_SPAN.unsigned_abs() {
            return Err(RangeError::Overflow { days });
        }
        trace!(from = %self, days, "walking calendar");

        let mut year = self.year();
        let mut month = self.month().ordinal();
        let mut day = self.day();
        let mut remaining = days;

        while remaining > 0 {
            day += 1;
            if day > days_in_month(year, month) {
                day = MIN_DAY;
                if month == DECEMBER {
                    month = JANUARY;
                    year += 1;
                } else {
                    month += 1;
                }
            }
            remaining -= 1;
        }

        while remaining < 0 {
            if day == MIN_DAY {
                if month == JANUARY {
                    month = DECEMBER;
                    year -= 1;
                } else {
                    month -= 1;
                }
                day = days_in_month(year, month);
            } else {
                day -= 1;
            }
            remaining += 1;
        }

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(RangeError::Overflow { days });
        }
        Self::make(year, month, day)
    }

    /// Signed number of days from `other` to `self`; negative when `self` is
    /// the earlier date.
    pub fn days_since(self, other: Self) -> i64 {
        if self == other {
            return 0;
        }

        let (earlier, later) = if self < other { (self, other) } else { (other, self) };
        let days = if earlier.year() == later.year() {
            i64::from(later.day_of_year()) - i64::from(earlier.day_of_year())
        } else {
            let rest_of_first =
                i64::from(days_in_year(earlier.year())) - i64::from(earlier.day_of_year());
            let whole_years: i64 = (earlier.year() + 1..later.year())
                .map(|year| i64::from(days_in_year(year)))
                .sum();
            rest_of_first + whole_years + i64::from(later.day_of_year())
        };

        if earlier == self { -days } else { days }
    }

    /// Signed duration from `other` to `self`, always a whole number of days.
    pub fn minus(self, other: Self) -> Duration {
        // at most MAX_DAY_SPAN days, well inside the tick range
        Duration::from_ticks(self.days_since(other) * TICKS_PER_DAY)
    }
}

impl Sub for Date {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.minus(rhs)
    }
}
