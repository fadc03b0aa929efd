//! This module implements cross-calendar correlation mappings.
//!
//! A mapping ties two calendars together through a single anchor pair: one
//! date in each calendar declared to represent the same instant. A date
//! converts by measuring its linear-time distance from the source anchor
//! and reapplying that exact (seconds, microseconds) delta to the target
//! anchor. Because the delta is linear time, a bidirectional round trip
//! always restores the original value, even when the target calendar's
//! month structure makes the projected date look structurally odd.

use alloc::format;
use alloc::string::String;

use crate::calendar::Calendar;
use crate::point::TimePoint;
use crate::{CalendarError, CalendarResult};

/// A plain year/month/day record used in mapping configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRecord {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl DateRecord {
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// The anchor pair of a mapping: two dates declared to represent the same
/// instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationPair {
    pub source: DateRecord,
    pub target: DateRecord,
}

/// An optional date window, expressed in the source calendar, outside of
/// which a mapping refuses to convert.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValidRange {
    pub min: Option<DateRecord>,
    pub max: Option<DateRecord>,
}

/// Configuration record for a [`CalendarMapping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMappingConfiguration {
    source_calendar: String,
    target_calendar: String,
    correlation: CorrelationPair,
    valid_range: ValidRange,
    bidirectional: bool,
}

impl CalendarMappingConfiguration {
    /// Creates a bidirectional configuration with no valid-range limits.
    #[must_use]
    pub fn new(
        source_calendar: impl Into<String>,
        target_calendar: impl Into<String>,
        correlation: CorrelationPair,
    ) -> Self {
        Self {
            source_calendar: source_calendar.into(),
            target_calendar: target_calendar.into(),
            correlation,
            valid_range: ValidRange::default(),
            bidirectional: true,
        }
    }

    /// Restricts the mapping to a date window in the source calendar.
    #[must_use]
    pub fn with_valid_range(mut self, range: ValidRange) -> Self {
        self.valid_range = range;
        self
    }

    /// Makes the mapping source-to-target only.
    #[must_use]
    pub fn one_way(mut self) -> Self {
        self.bidirectional = false;
        self
    }

    #[inline]
    #[must_use]
    pub fn source_calendar_name(&self) -> &str {
        &self.source_calendar
    }

    #[inline]
    #[must_use]
    pub fn target_calendar_name(&self) -> &str {
        &self.target_calendar
    }

    #[inline]
    #[must_use]
    pub fn correlation(&self) -> &CorrelationPair {
        &self.correlation
    }

    #[inline]
    #[must_use]
    pub fn valid_range(&self) -> &ValidRange {
        &self.valid_range
    }

    #[inline]
    #[must_use]
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }
}

/// A correlation between two calendars, ready to convert dates.
#[derive(Debug, Clone)]
pub struct CalendarMapping {
    config: CalendarMappingConfiguration,
    source: Calendar,
    target: Calendar,
    source_correlation: TimePoint,
    target_correlation: TimePoint,
    source_min: Option<TimePoint>,
    source_max: Option<TimePoint>,
}

impl CalendarMapping {
    /// Creates a mapping, validating that the supplied calendars match
    /// the configuration and that every configured date exists in its
    /// calendar.
    pub fn try_new(
        config: CalendarMappingConfiguration,
        source: Calendar,
        target: Calendar,
    ) -> CalendarResult<Self> {
        if source.name() != config.source_calendar_name() {
            return Err(CalendarError::incompatible().with_message(format!(
                "Source calendar '{}' does not match configuration '{}'",
                source.name(),
                config.source_calendar_name()
            )));
        }
        if target.name() != config.target_calendar_name() {
            return Err(CalendarError::incompatible().with_message(format!(
                "Target calendar '{}' does not match configuration '{}'",
                target.name(),
                config.target_calendar_name()
            )));
        }

        let correlation = config.correlation();
        let source_correlation = try_point(&source, &correlation.source)?;
        let target_correlation = try_point(&target, &correlation.target)?;

        let range = config.valid_range();
        let source_min = range
            .min
            .as_ref()
            .map(|record| try_point(&source, record))
            .transpose()?;
        let source_max = range
            .max
            .as_ref()
            .map(|record| try_point(&source, record))
            .transpose()?;

        Ok(Self {
            config,
            source,
            target,
            source_correlation,
            target_correlation,
            source_min,
            source_max,
        })
    }

    /// Converts a date from the source to the target calendar.
    pub fn convert(&self, date: &TimePoint) -> CalendarResult<TimePoint> {
        if date.calendar() != &self.source {
            return Err(CalendarError::incompatible()
                .with_message("TimePoint must be from the source calendar"));
        }
        self.check_range(date)?;

        let delta = self.source.diff(&self.source_correlation, date)?;
        #[cfg(feature = "log")]
        log::debug!(
            "converting {}-{}-{} from '{}' to '{}' (delta {}s)",
            date.year(),
            date.month(),
            date.day(),
            self.source.name(),
            self.target.name(),
            delta.total_seconds(),
        );
        self.target_correlation.add(&delta)
    }

    /// Converts a date from the target back to the source calendar.
    pub fn reverse_convert(&self, date: &TimePoint) -> CalendarResult<TimePoint> {
        if !self.config.is_bidirectional() {
            return Err(CalendarError::incompatible()
                .with_message("This mapping does not support reverse conversion"));
        }
        if date.calendar() != &self.target {
            return Err(CalendarError::incompatible()
                .with_message("TimePoint must be from the target calendar"));
        }

        let delta = self.target.diff(&self.target_correlation, date)?;
        self.source_correlation.add(&delta)
    }

    #[inline]
    #[must_use]
    pub fn source_calendar(&self) -> &Calendar {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn target_calendar(&self) -> &Calendar {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn configuration(&self) -> &CalendarMappingConfiguration {
        &self.config
    }

    fn check_range(&self, date: &TimePoint) -> CalendarResult<()> {
        if let Some(min) = &self.source_min {
            if self.source.diff(min, date)?.is_negative() {
                return Err(CalendarError::invalid_date()
                    .with_message("Date is before minimum valid date for conversion"));
            }
        }
        if let Some(max) = &self.source_max {
            if self.source.diff(date, max)?.is_negative() {
                return Err(CalendarError::invalid_date()
                    .with_message("Date is after maximum valid date for conversion"));
            }
        }
        Ok(())
    }
}

fn try_point(calendar: &Calendar, record: &DateRecord) -> CalendarResult<TimePoint> {
    TimePoint::try_ymd(calendar, record.year, record.month, record.day)
}
