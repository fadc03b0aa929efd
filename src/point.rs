//! This module implements `TimePoint`, the validated moment-in-calendar
//! value.

use core::cmp::Ordering;

use alloc::format;

use crate::calendar::Calendar;
use crate::epoch::{DateFields, TimeConverter};
use crate::span::TimeSpan;
use crate::{CalendarError, CalendarResult, MICROS_PER_SECOND};

/// An immutable moment in time within one calendar.
///
/// Every component is validated against the owning calendar's rules at
/// construction. Arithmetic returns new values; a `TimePoint` is never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePoint {
    calendar: Calendar,
    fields: DateFields,
}

// ==== Construction ====

impl TimePoint {
    #[inline]
    fn new_unchecked(calendar: Calendar, fields: DateFields) -> Self {
        Self { calendar, fields }
    }

    /// Creates a new validated `TimePoint`.
    pub fn try_new(calendar: &Calendar, fields: DateFields) -> CalendarResult<Self> {
        validate(calendar, &fields)?;
        Ok(Self::new_unchecked(calendar.clone(), fields))
    }

    /// Creates a new validated `TimePoint` at midnight on a date.
    pub fn try_ymd(calendar: &Calendar, year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        Self::try_new(calendar, DateFields::from_ymd(year, month, day))
    }
}

// ==== Accessors ====

impl TimePoint {
    /// Returns the owning calendar.
    #[inline]
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns the component record.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> DateFields {
        self.fields
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.fields.year
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.fields.month
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.fields.day
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.fields.hour
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.fields.minute
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.fields.second
    }

    #[inline]
    #[must_use]
    pub fn microsecond(&self) -> u32 {
        self.fields.microsecond
    }
}

// ==== Arithmetic ====

impl TimePoint {
    /// Returns a new `TimePoint` moved forward by a span.
    ///
    /// The point converts to its linear coordinate, the span applies there
    /// (with microsecond overflow carried into whole seconds), and the
    /// result converts back and re-validates.
    pub fn add(&self, span: &TimeSpan) -> CalendarResult<Self> {
        let converter = TimeConverter::new(self.calendar.rules());
        let seconds = converter.date_to_epoch_seconds(&self.fields) + span.total_seconds();
        let microseconds = i64::from(self.fields.microsecond) + i64::from(span.microseconds());

        let carry = microseconds.div_euclid(MICROS_PER_SECOND);
        let microseconds = microseconds.rem_euclid(MICROS_PER_SECOND) as u32;
        let seconds = seconds + carry;
        if seconds < 0 {
            return Err(CalendarError::invalid_date()
                .with_message("arithmetic result precedes the calendar epoch (year 1)."));
        }

        let fields = converter.from_epoch(seconds, microseconds);
        // Conversion output should already be valid; re-validating guards
        // against an inconsistent rule set.
        Self::try_new(&self.calendar, fields)
    }

    /// Returns a new `TimePoint` moved backward by a span.
    pub fn subtract(&self, span: &TimeSpan) -> CalendarResult<Self> {
        self.add(&span.negate())
    }
}

impl PartialOrd for TimePoint {
    /// Points order by their components when they share a calendar and
    /// are unordered otherwise.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.calendar == other.calendar {
            Some(self.fields.cmp(&other.fields))
        } else {
            None
        }
    }
}

fn validate(calendar: &Calendar, fields: &DateFields) -> CalendarResult<()> {
    let rules = calendar.rules();

    if fields.year < 1 {
        return Err(CalendarError::invalid_date().with_message(format!(
            "Invalid year: {}. Years before the calendar epoch (year 1) are not supported",
            fields.year
        )));
    }

    let month_count = rules.month_count();
    if fields.month < 1 || fields.month > month_count {
        return Err(CalendarError::invalid_date().with_message(format!(
            "Invalid month: {}. Must be between 1 and {month_count}",
            fields.month
        )));
    }

    let days_in_month = rules.days_in_month(fields.month, fields.year);
    if fields.day < 1 || fields.day > days_in_month {
        return Err(CalendarError::invalid_date().with_message(format!(
            "Invalid day: {}. Must be between 1 and {days_in_month} for month {}",
            fields.day, fields.month
        )));
    }

    if fields.hour > 23 {
        return Err(CalendarError::invalid_date().with_message(format!(
            "Invalid hour: {}. Must be between 0 and 23",
            fields.hour
        )));
    }

    if fields.minute > 59 {
        return Err(CalendarError::invalid_date().with_message(format!(
            "Invalid minute: {}. Must be between 0 and 59",
            fields.minute
        )));
    }

    if fields.second > 59 {
        return Err(CalendarError::invalid_date().with_message(format!(
            "Invalid second: {}. Must be between 0 and 59",
            fields.second
        )));
    }

    if fields.microsecond > 999_999 {
        return Err(CalendarError::invalid_date().with_message(format!(
            "Invalid microsecond: {}. Must be between 0 and 999999",
            fields.microsecond
        )));
    }

    Ok(())
}
