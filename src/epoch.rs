//! This module implements the linear-time conversion core.
//!
//! Every calendar's dates collapse into a single coordinate: seconds since
//! that calendar's epoch (year 1, month 1, day 1, 00:00:00), carried as a
//! float with microseconds in the fractional part. [`TimeConverter`] maps
//! date components onto that coordinate and back, driven entirely by a
//! [`CalendarRules`] value.

#[allow(unused_imports)]
use core_maths::*;
use num_traits::ToPrimitive;

use crate::rules::CalendarRules;
use crate::{MICROS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// The record of decomposed date-time components.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
}

impl DateFields {
    /// Creates a record from all seven components.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Creates a record for midnight on a date.
    #[must_use]
    pub const fn from_ymd(year: i32, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0, 0)
    }
}

/// The conversion core, parameterized by one calendar's rules.
#[derive(Debug, Clone, Copy)]
pub struct TimeConverter<'r> {
    rules: &'r CalendarRules,
}

// ==== Date to linear time ====

impl<'r> TimeConverter<'r> {
    /// Creates a converter over a rule set.
    #[inline]
    #[must_use]
    pub const fn new(rules: &'r CalendarRules) -> Self {
        Self { rules }
    }

    /// Whole days from the epoch to the first day of `year`.
    fn days_before_year(&self, year: i32) -> i64 {
        let mut days = 0;
        let mut y = 1;
        while y < year {
            days += self.rules.days_in_year(y);
            y += 1;
        }
        days
    }

    /// Whole days from the first day of `year` to the first day of its
    /// `month`, counting every nameless-day group anchored before `month`.
    fn days_before_month(&self, year: i32, month: u8) -> i64 {
        let mut days = 0;
        for m in 1..month {
            days += i64::from(self.rules.days_in_month(m, year));
        }
        let leap = self.rules.is_leap_year(year);
        for group in self.rules.nameless_day_groups() {
            if group.after_month() < month {
                days += group.size(leap);
            }
        }
        days
    }

    /// Whole days from the epoch to a date.
    #[must_use]
    pub fn date_to_epoch_days(&self, fields: &DateFields) -> i64 {
        self.days_before_year(fields.year)
            + self.days_before_month(fields.year, fields.month)
            + i64::from(fields.day)
            - 1
    }

    /// Whole seconds from the epoch to a date-time, ignoring microseconds.
    pub(crate) fn date_to_epoch_seconds(&self, fields: &DateFields) -> i64 {
        self.date_to_epoch_days(fields) * SECONDS_PER_DAY
            + i64::from(fields.hour) * SECONDS_PER_HOUR
            + i64::from(fields.minute) * SECONDS_PER_MINUTE
            + i64::from(fields.second)
    }

    /// Converts date components to fractional seconds since the epoch.
    ///
    /// Monotonic in (year, month, day, time) for a fixed calendar: a later
    /// valid date always maps to a strictly greater coordinate.
    #[must_use]
    pub fn date_to_seconds(&self, fields: &DateFields) -> f64 {
        self.date_to_epoch_seconds(fields) as f64
            + f64::from(fields.microsecond) / MICROS_PER_SECOND as f64
    }
}

// ==== Linear time to date ====

impl TimeConverter<'_> {
    /// Converts fractional seconds since the epoch to date components.
    ///
    /// Total over all finite inputs: the fractional part rounds to the
    /// nearest microsecond (carrying a full-second overflow), and negative
    /// coordinates clamp to the epoch, since years before year 1 have no
    /// defined representation in this crate.
    #[must_use]
    pub fn seconds_to_date(&self, seconds: f64) -> DateFields {
        let floor = seconds.floor();
        let mut total = match floor.to_i64() {
            Some(value) => value,
            None if floor > 0.0 => i64::MAX,
            None => 0,
        };
        let mut microsecond = ((seconds - floor) * MICROS_PER_SECOND as f64).round() as i64;
        if microsecond >= MICROS_PER_SECOND {
            total += 1;
            microsecond -= MICROS_PER_SECOND;
        }
        if total < 0 {
            total = 0;
            microsecond = 0;
        }
        self.from_epoch(total, microsecond as u32)
    }

    /// Decomposes non-negative whole seconds plus a microsecond component.
    pub(crate) fn from_epoch(&self, total_seconds: i64, microsecond: u32) -> DateFields {
        let mut days = total_seconds.div_euclid(SECONDS_PER_DAY);
        let day_seconds = total_seconds.rem_euclid(SECONDS_PER_DAY);

        let hour = (day_seconds / SECONDS_PER_HOUR) as u8;
        let minute = (day_seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8;
        let second = (day_seconds % SECONDS_PER_MINUTE) as u8;

        let mut year = 1;
        loop {
            let days_in_year = self.rules.days_in_year(year);
            if days_in_year <= 0 || days < days_in_year {
                break;
            }
            days -= days_in_year;
            year += 1;
        }

        let (month, day) = self.month_day_from_year_days(year, days);
        DateFields::new(year, month, day, hour, minute, second, microsecond)
    }

    /// Locates the 0-based day index `days` within `year`.
    ///
    /// Nameless days have no month of their own; an index landing inside a
    /// group is attributed to the last day of the preceding month (the
    /// final month for a group trailing the year, day 1 of month 1 for a
    /// group preceding it).
    fn month_day_from_year_days(&self, year: i32, mut days: i64) -> (u8, u8) {
        let leap = self.rules.is_leap_year(year);
        let month_count = self.rules.month_count();
        for month in 1..=month_count {
            for group in self.rules.nameless_day_groups() {
                if group.after_month() != month - 1 {
                    continue;
                }
                let size = group.size(leap);
                if days >= size {
                    days -= size;
                } else if month == 1 {
                    return (1, 1);
                } else {
                    return (month - 1, self.rules.days_in_month(month - 1, year));
                }
            }
            let days_in_month = i64::from(self.rules.days_in_month(month, year));
            if days < days_in_month {
                return (month, days as u8 + 1);
            }
            days -= days_in_month;
        }
        // Any remainder sits in a group trailing the final month.
        (month_count, self.rules.days_in_month(month_count, year))
    }
}
