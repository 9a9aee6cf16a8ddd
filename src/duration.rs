use crate::RangeError;
use crate::consts::TICKS_PER_DAY;
use crate::prelude::*;
use std::fmt;
use std::ops::Neg;

/// A signed span of time counted in 100 ns ticks.
///
/// Date arithmetic only accepts durations that are a whole number of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, From, Into)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Self(0);

    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// A duration of exactly `days` days.
    ///
    /// # Errors
    /// Returns `RangeError::Overflow` if the tick count does not fit in an `i64`.
    pub const fn from_days(days: i64) -> Result<Self, RangeError> {
        match days.checked_mul(TICKS_PER_DAY) {
            Some(ticks) => Ok(Self(ticks)),
            None => Err(RangeError::Overflow { days }),
        }
    }

    #[inline]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Number of days when this is an exact multiple of one day
    pub const fn whole_days(self) -> Option<i64> {
        if self.0 % TICKS_PER_DAY == 0 {
            Some(self.0 / TICKS_PER_DAY)
        } else {
            None
        }
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.whole_days() {
            Some(days) => write!(f, "{days}day"),
            None => write!(f, "{}ticks", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::days;

    #[test]
    fn test_from_days() {
        assert_eq!(days(1).ticks(), TICKS_PER_DAY);
        assert_eq!(days(-2).ticks(), -2 * TICKS_PER_DAY);
        assert_eq!(days(0), Duration::ZERO);
    }

    #[test]
    fn test_whole_days() {
        assert_eq!(days(366).whole_days(), Some(366));
        assert_eq!(days(-3).whole_days(), Some(-3));
        assert_eq!(Duration::from_ticks(TICKS_PER_DAY + 1).whole_days(), None);
        assert_eq!(Duration::from_ticks(-1).whole_days(), None);
    }

    #[test]
    fn test_from_days_out_of_tick_range() {
        let max_days = i64::MAX / TICKS_PER_DAY;
        assert_eq!(days(max_days).whole_days(), Some(max_days));
        assert_eq!(
            Duration::from_days(max_days + 1),
            Err(RangeError::Overflow { days: max_days + 1 })
        );
        assert_eq!(
            Duration::from_days(20_000_000),
            Err(RangeError::Overflow { days: 20_000_000 })
        );
        assert_eq!(
            Duration::from_days(i64::MIN),
            Err(RangeError::Overflow { days: i64::MIN })
        );
    }

    #[test]
    fn test_neg_and_conversions() {
        let d: Duration = 42_i64.into();
        assert_eq!(-d, Duration::from_ticks(-42));
        let raw: i64 = d.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_display() {
        assert_eq!(days(366).to_string(), "366day");
        assert_eq!(Duration::from_ticks(5).to_string(), "5ticks");
    }
}
