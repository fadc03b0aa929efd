//! This module implements `TimeSpan`, the signed duration value.

use crate::{
    CalendarError, CalendarResult, Sign, MICROS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};

/// A signed duration of whole seconds plus microseconds.
///
/// The two components always agree in sign and the microsecond component
/// stays within `±999_999`; constructors normalize their inputs. Produced
/// by [`Calendar::diff`](crate::Calendar::diff) or built directly.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeSpan {
    seconds: i64,
    microseconds: i32,
}

impl TimeSpan {
    /// The empty span.
    pub const ZERO: Self = Self {
        seconds: 0,
        microseconds: 0,
    };

    /// Creates a span from seconds and microseconds, folding microsecond
    /// overflow into whole seconds so both components share a sign.
    #[must_use]
    pub fn new(seconds: i64, microseconds: i64) -> Self {
        let total = i128::from(seconds) * i128::from(MICROS_PER_SECOND) + i128::from(microseconds);
        Self {
            seconds: (total / i128::from(MICROS_PER_SECOND)) as i64,
            microseconds: (total % i128::from(MICROS_PER_SECOND)) as i32,
        }
    }

    /// Creates a span from whole seconds.
    #[inline]
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            microseconds: 0,
        }
    }

    /// Returns the whole-second component.
    #[inline]
    #[must_use]
    pub const fn total_seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the microsecond component.
    #[inline]
    #[must_use]
    pub const fn microseconds(&self) -> i32 {
        self.microseconds
    }

    /// Returns the span in whole days, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn total_days(&self) -> i64 {
        self.seconds / SECONDS_PER_DAY
    }

    /// Returns the span in whole hours, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn total_hours(&self) -> i64 {
        self.seconds / SECONDS_PER_HOUR
    }

    /// Returns the span in whole minutes, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn total_minutes(&self) -> i64 {
        self.seconds / SECONDS_PER_MINUTE
    }

    /// Returns whether the span points into the past.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.seconds < 0 || self.microseconds < 0
    }

    /// Returns whether the span is empty.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0 && self.microseconds == 0
    }

    /// Returns the sign of the span.
    #[must_use]
    pub fn sign(&self) -> Sign {
        if self.seconds != 0 {
            Sign::from(self.seconds)
        } else {
            Sign::from(i64::from(self.microseconds))
        }
    }

    /// Returns the span with both components made non-negative.
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self {
            seconds: self.seconds.abs(),
            microseconds: self.microseconds.abs(),
        }
    }

    /// Returns the span with its direction reversed.
    #[must_use]
    pub const fn negate(&self) -> Self {
        Self {
            seconds: -self.seconds,
            microseconds: -self.microseconds,
        }
    }

    /// Adds two spans, failing on overflow of the second count.
    pub fn checked_add(&self, other: &Self) -> CalendarResult<Self> {
        let total = i128::from(self.seconds) * i128::from(MICROS_PER_SECOND)
            + i128::from(self.microseconds)
            + i128::from(other.seconds) * i128::from(MICROS_PER_SECOND)
            + i128::from(other.microseconds);
        let seconds = total / i128::from(MICROS_PER_SECOND);
        if i64::try_from(seconds).is_err() {
            return Err(CalendarError::invalid_date()
                .with_message("time span addition exceeded the representable range."));
        }
        Ok(Self {
            seconds: seconds as i64,
            microseconds: (total % i128::from(MICROS_PER_SECOND)) as i32,
        })
    }
}
