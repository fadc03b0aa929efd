//! This module implements the `Calendar` handle.
//!
//! A `Calendar` is a cheap-to-clone handle over one immutable
//! [`CalendarRules`] value plus the locale used for human-readable output.
//! All `TimePoint`s of a calendar share the same rule set by reference.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::config::CalendarConfiguration;
use crate::epoch::{DateFields, TimeConverter};
use crate::formatter;
use crate::locale::{tables, Locale};
use crate::parsers;
use crate::point::TimePoint;
use crate::registry::ProfileRegistry;
use crate::rules::{CalendarRules, EpochNotation, NamelessDayGroup};
use crate::span::TimeSpan;
use crate::validator;
use crate::{CalendarError, CalendarResult};

/// A handle to one calendar system.
#[derive(Debug, Clone)]
pub struct Calendar {
    rules: Arc<CalendarRules>,
    locale: Locale,
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Calendar {}

// ==== Construction ====

impl Calendar {
    /// Creates a calendar directly from a rule set.
    #[must_use]
    pub fn new(rules: CalendarRules) -> Self {
        Self {
            rules: Arc::new(rules),
            locale: Locale::default(),
        }
    }

    pub(crate) fn from_shared(rules: Arc<CalendarRules>) -> Self {
        Self {
            rules,
            locale: Locale::default(),
        }
    }

    /// Creates a calendar from a registered profile.
    pub fn from_profile(registry: &ProfileRegistry, name: &str) -> CalendarResult<Self> {
        registry.get(name).map(Self::from_shared)
    }

    /// Creates a calendar from a custom configuration, validating it
    /// first.
    pub fn from_configuration(config: CalendarConfiguration) -> CalendarResult<Self> {
        validator::validate_configuration(&config)?;
        Ok(Self::new(config.into_rules()))
    }

    /// Returns this calendar with another output locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

// ==== Rule access ====

impl Calendar {
    /// Returns the calendar identifier.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        self.rules.name()
    }

    /// Returns the output locale.
    #[inline]
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the underlying rule set.
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &CalendarRules {
        &self.rules
    }

    /// Returns the human-readable name, localized when a translation
    /// exists.
    #[must_use]
    pub fn display_name(&self) -> &str {
        tables::display_name(self.name(), self.locale).unwrap_or_else(|| self.rules.display_name())
    }

    /// Returns the number of months in a year.
    #[inline]
    #[must_use]
    pub fn month_count(&self) -> u8 {
        self.rules.month_count()
    }

    /// Returns the name of a month (1-based), localized when a
    /// translation exists.
    #[must_use]
    pub fn month_name(&self, month: u8) -> Option<&str> {
        if month == 0 {
            return None;
        }
        if let Some(names) = tables::month_names(self.name(), self.locale) {
            return names.get(month as usize - 1).copied();
        }
        self.rules
            .month_names()
            .get(month as usize - 1)
            .map(String::as_str)
    }

    /// Returns all month names in order, localized when translations
    /// exist.
    #[must_use]
    pub fn month_names(&self) -> Vec<&str> {
        (1..=self.month_count())
            .filter_map(|month| self.month_name(month))
            .collect()
    }

    /// Returns the number of days in a month of a year.
    #[inline]
    #[must_use]
    pub fn days_in_month(&self, month: u8, year: i32) -> u8 {
        self.rules.days_in_month(month, year)
    }

    /// Returns whether the year is a leap year.
    #[inline]
    #[must_use]
    pub fn is_leap_year(&self, year: i32) -> bool {
        self.rules.is_leap_year(year)
    }

    /// Returns the epoch notation, localized when a translation exists.
    #[must_use]
    pub fn epoch_notation(&self) -> EpochNotation {
        match tables::epoch_notation(self.name(), self.locale) {
            Some((before, after)) => EpochNotation::new(before, after),
            None => self.rules.epoch_notation().clone(),
        }
    }

    /// Returns the canonical nameless-day groups.
    #[inline]
    #[must_use]
    pub fn nameless_day_groups(&self) -> &[NamelessDayGroup] {
        self.rules.nameless_day_groups()
    }

    /// Returns the label of one nameless day (0-based group and day
    /// indices), localized when a translation exists.
    #[must_use]
    pub fn nameless_day_label(&self, group: usize, day: usize) -> Option<&str> {
        if let Some(groups) = tables::nameless_day_labels(self.name(), self.locale) {
            if let Some(label) = groups.get(group).and_then(|labels| labels.get(day)).copied() {
                return Some(label);
            }
        }
        self.rules
            .nameless_day_groups()
            .get(group)
            .and_then(|g| g.labels().get(day))
            .map(String::as_str)
    }
}

// ==== Operations ====

impl Calendar {
    /// Calculates the signed difference from `start` to `end`.
    pub fn diff(&self, start: &TimePoint, end: &TimePoint) -> CalendarResult<TimeSpan> {
        if start.calendar() != self || end.calendar() != self {
            return Err(CalendarError::incompatible().with_message(
                "Cannot calculate difference between TimePoints from different calendars",
            ));
        }
        let converter = TimeConverter::new(self.rules());
        let start_fields = start.fields();
        let end_fields = end.fields();
        let seconds = converter.date_to_epoch_seconds(&end_fields)
            - converter.date_to_epoch_seconds(&start_fields);
        let microseconds =
            i64::from(end_fields.microsecond) - i64::from(start_fields.microsecond);
        Ok(TimeSpan::new(seconds, microseconds))
    }

    /// Parses a date string into a validated `TimePoint`.
    pub fn parse(&self, input: &str) -> CalendarResult<TimePoint> {
        parsers::parse_date(self, input)
    }

    /// Formats a `TimePoint`, using the calendar's first format pattern
    /// when no pattern is given.
    pub fn format(&self, point: &TimePoint, pattern: Option<&str>) -> CalendarResult<String> {
        if point.calendar() != self {
            return Err(CalendarError::incompatible()
                .with_message("Cannot format TimePoint from different calendar"));
        }
        Ok(formatter::format(self, point, pattern))
    }

    /// Converts date components to fractional seconds since this
    /// calendar's epoch.
    #[must_use]
    pub fn date_to_seconds(&self, fields: &DateFields) -> f64 {
        self.rules.date_to_seconds(fields)
    }

    /// Converts fractional seconds since this calendar's epoch to date
    /// components.
    #[must_use]
    pub fn seconds_to_date(&self, seconds: f64) -> DateFields {
        self.rules.seconds_to_date(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::TimeSpan;
    use crate::SECONDS_PER_DAY;

    fn calendar(name: &str) -> Calendar {
        let registry = ProfileRegistry::with_builtins();
        Calendar::from_profile(&registry, name).unwrap()
    }

    #[test]
    fn dsa_year_has_365_days() {
        let dsa = calendar("dsa");
        let start = TimePoint::try_ymd(&dsa, 1000, 1, 1).unwrap();
        let end = TimePoint::try_ymd(&dsa, 1001, 1, 1).unwrap();
        let span = dsa.diff(&start, &end).unwrap();
        // 360 month days plus 5 nameless days.
        assert_eq!(span.total_days(), 365);
    }

    #[test]
    fn faerun_leap_year_has_366_days() {
        let faerun = calendar("faerun");
        let leap = faerun
            .diff(
                &TimePoint::try_ymd(&faerun, 1492, 1, 1).unwrap(),
                &TimePoint::try_ymd(&faerun, 1493, 1, 1).unwrap(),
            )
            .unwrap();
        assert_eq!(leap.total_days(), 366);
        let plain = faerun
            .diff(
                &TimePoint::try_ymd(&faerun, 1493, 1, 1).unwrap(),
                &TimePoint::try_ymd(&faerun, 1494, 1, 1).unwrap(),
            )
            .unwrap();
        assert_eq!(plain.total_days(), 365);
    }

    #[test]
    fn year_length_identity_with_nameless_days() {
        let faerun = calendar("faerun");
        let year = 1492;
        let months: i64 = (1..=faerun.month_count())
            .map(|m| i64::from(faerun.days_in_month(m, year)))
            .sum();
        let nameless: i64 = faerun
            .nameless_day_groups()
            .iter()
            .map(|g| g.size(faerun.is_leap_year(year)))
            .sum();
        let span = faerun
            .diff(
                &TimePoint::try_ymd(&faerun, year, 1, 1).unwrap(),
                &TimePoint::try_ymd(&faerun, year + 1, 1, 1).unwrap(),
            )
            .unwrap();
        assert_eq!(span.total_days(), months + nameless);
    }

    #[test]
    fn adding_across_dsa_nameless_days() {
        let dsa = calendar("dsa");
        let start = TimePoint::try_ymd(&dsa, 1000, 12, 25).unwrap();
        let end = start
            .add(&TimeSpan::from_seconds(11 * SECONDS_PER_DAY))
            .unwrap();
        assert_eq!((end.year(), end.month(), end.day()), (1001, 1, 1));
        assert_eq!(dsa.diff(&start, &end).unwrap().total_days(), 11);
    }

    #[test]
    fn date_arithmetic_across_multiple_years_with_nameless_days() {
        let dsa = calendar("dsa");
        let span = dsa
            .diff(
                &TimePoint::try_ymd(&dsa, 1000, 1, 1).unwrap(),
                &TimePoint::try_ymd(&dsa, 1005, 1, 1).unwrap(),
            )
            .unwrap();
        assert_eq!(span.total_days(), 5 * 365);
    }

    #[test]
    fn diff_rejects_foreign_points() {
        let dsa = calendar("dsa");
        let faerun = calendar("faerun");
        let a = TimePoint::try_ymd(&dsa, 1000, 1, 1).unwrap();
        let b = TimePoint::try_ymd(&faerun, 1492, 1, 1).unwrap();
        let err = dsa.diff(&a, &b).unwrap_err();
        assert_eq!(
            err.kind(),
            crate::error::ErrorKind::IncompatibleCalendar
        );
    }

    #[test]
    fn diff_carries_microseconds() {
        let gregorian = calendar("gregorian");
        let a = TimePoint::try_new(&gregorian, DateFields::new(2024, 6, 1, 0, 0, 1, 750_000))
            .unwrap();
        let b = TimePoint::try_new(&gregorian, DateFields::new(2024, 6, 1, 0, 0, 3, 250_000))
            .unwrap();
        let span = gregorian.diff(&a, &b).unwrap();
        assert_eq!(span.total_seconds(), 1);
        assert_eq!(span.microseconds(), 500_000);
        assert_eq!(a.add(&span).unwrap(), b);
    }

    #[test]
    fn localized_accessors_fall_back_to_rules() {
        let faerun = calendar("faerun").with_locale(Locale::De);
        // Month names are proper nouns in every locale.
        assert_eq!(faerun.month_name(1), Some("Hammer"));
        assert_eq!(faerun.display_name(), "Faerûn (Harptos-Kalender)");
        assert_eq!(faerun.nameless_day_label(0, 0), Some("Mittwinter"));
        assert_eq!(faerun.epoch_notation().before, "Vor DR");
    }
}
