//! This module implements `CalendarRules` and its component rule values.
//!
//! A `CalendarRules` is a pure, immutable description of one calendar's
//! shape. All calendar-specific behavior in this crate is data held here;
//! the conversion algorithms never special-case a concrete calendar.

use alloc::string::String;
use alloc::vec::Vec;

use crate::epoch::{DateFields, TimeConverter};

/// Leap-year cadence of a calendar.
///
/// Rules are tagged variants rather than opaque closures so that two rule
/// sets can be compared and no hidden state rides along. `Custom` carries a
/// plain function pointer and compares by identity.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LeapYearRule {
    /// The calendar has no leap years.
    #[default]
    Never,
    /// Every `n`-th year is a leap year (`year % n == 0`).
    EveryN(u32),
    /// The Gregorian 4/100/400 rule.
    Gregorian,
    /// A custom pure predicate.
    Custom(fn(i32) -> bool),
}

impl LeapYearRule {
    /// Evaluates the rule for a year.
    #[must_use]
    pub fn is_leap_year(&self, year: i32) -> bool {
        match self {
            Self::Never => false,
            Self::EveryN(n) => *n != 0 && year.rem_euclid(*n as i32) == 0,
            Self::Gregorian => year % 400 == 0 || (year % 4 == 0 && year % 100 != 0),
            Self::Custom(predicate) => predicate(year),
        }
    }
}

/// Month length table of a calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthLengths {
    /// Every month has the same number of days.
    Uniform(u8),
    /// Per-month day counts, with an optional month (1-based) that gains
    /// one day in leap years.
    PerMonth {
        days: Vec<u8>,
        leap_month: Option<u8>,
    },
}

impl MonthLengths {
    fn days_in_month(&self, month: u8, leap: bool) -> u8 {
        match self {
            Self::Uniform(days) => *days,
            Self::PerMonth { days, leap_month } => {
                let base = days.get(month as usize - 1).copied().unwrap_or(0);
                if leap && *leap_month == Some(month) {
                    base + 1
                } else {
                    base
                }
            }
        }
    }
}

/// A group of nameless (intercalary) days anchored after a month.
///
/// The days belong to no month but consume day-count in the year. A group
/// with `after_month == 0` precedes the first month; a group with
/// `after_month == month_count` trails the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamelessDayGroup {
    after_month: u8,
    labels: Vec<String>,
    grows_in_leap_year: bool,
}

impl NamelessDayGroup {
    /// Creates a new group. The group's day count is the label count, plus
    /// one in leap years when `grows_in_leap_year` is set.
    #[must_use]
    pub fn new(after_month: u8, labels: Vec<String>, grows_in_leap_year: bool) -> Self {
        Self {
            after_month,
            labels,
            grows_in_leap_year,
        }
    }

    /// Returns the month index (1-based) this group follows; 0 if the
    /// group precedes the first month.
    #[inline]
    #[must_use]
    pub fn after_month(&self) -> u8 {
        self.after_month
    }

    /// Returns the ordered day labels.
    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the group's base day count.
    #[inline]
    #[must_use]
    pub fn day_count(&self) -> u8 {
        self.labels.len() as u8
    }

    /// Returns whether the group gains a day in leap years.
    #[inline]
    #[must_use]
    pub fn grows_in_leap_year(&self) -> bool {
        self.grows_in_leap_year
    }

    /// Returns the group's day count in a year with the given leapness.
    #[inline]
    #[must_use]
    pub fn size(&self, leap: bool) -> i64 {
        i64::from(self.day_count()) + i64::from(leap && self.grows_in_leap_year)
    }
}

/// Era labels placed around year numbers (e.g. BCE/CE, "Before DR"/DR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpochNotation {
    pub before: String,
    pub after: String,
}

impl EpochNotation {
    #[must_use]
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Provenance metadata of a calendar rule set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProfileMetadata {
    pub source: String,
    pub setting: String,
    pub description: String,
}

/// The full rule set of one calendar.
///
/// Constructed once and shared by reference (`Calendar` holds it behind an
/// `Arc`); never mutated afterwards. Two rule sets with identical outputs
/// are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRules {
    name: String,
    display_name: String,
    month_names: Vec<String>,
    month_lengths: MonthLengths,
    leap_year_rule: LeapYearRule,
    epoch_notation: EpochNotation,
    format_patterns: Vec<String>,
    nameless_day_groups: Vec<NamelessDayGroup>,
    metadata: ProfileMetadata,
}

// ==== Construction ====

impl CalendarRules {
    /// Creates a rule set with no leap years, no nameless days, `BE`/`AE`
    /// epoch notation and a single `F j, Y` format pattern.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        month_names: Vec<String>,
        month_lengths: MonthLengths,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            month_names,
            month_lengths,
            leap_year_rule: LeapYearRule::Never,
            epoch_notation: EpochNotation::new("BE", "AE"),
            format_patterns: alloc::vec![String::from("F j, Y")],
            nameless_day_groups: Vec::new(),
            metadata: ProfileMetadata::default(),
        }
    }

    #[must_use]
    pub fn with_leap_year_rule(mut self, rule: LeapYearRule) -> Self {
        self.leap_year_rule = rule;
        self
    }

    #[must_use]
    pub fn with_epoch_notation(mut self, notation: EpochNotation) -> Self {
        self.epoch_notation = notation;
        self
    }

    #[must_use]
    pub fn with_format_patterns(mut self, patterns: Vec<String>) -> Self {
        self.format_patterns = patterns;
        self
    }

    #[must_use]
    pub fn with_nameless_day_groups(mut self, groups: Vec<NamelessDayGroup>) -> Self {
        self.nameless_day_groups = groups;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: ProfileMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

// ==== Capability contract ====

impl CalendarRules {
    /// Returns the calendar identifier.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical human-readable name.
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the ordered canonical month names.
    #[inline]
    #[must_use]
    pub fn month_names(&self) -> &[String] {
        &self.month_names
    }

    /// Returns the number of months in a year.
    #[inline]
    #[must_use]
    pub fn month_count(&self) -> u8 {
        self.month_names.len() as u8
    }

    /// Returns the number of days in a month of a year. Months outside
    /// `1..=month_count` have zero days.
    #[must_use]
    pub fn days_in_month(&self, month: u8, year: i32) -> u8 {
        if month == 0 || month > self.month_count() {
            return 0;
        }
        self.month_lengths
            .days_in_month(month, self.is_leap_year(year))
    }

    /// Returns whether the year is a leap year.
    #[inline]
    #[must_use]
    pub fn is_leap_year(&self, year: i32) -> bool {
        self.leap_year_rule.is_leap_year(year)
    }

    /// Returns the leap-year rule.
    #[inline]
    #[must_use]
    pub fn leap_year_rule(&self) -> LeapYearRule {
        self.leap_year_rule
    }

    /// Returns the epoch notation.
    #[inline]
    #[must_use]
    pub fn epoch_notation(&self) -> &EpochNotation {
        &self.epoch_notation
    }

    /// Returns the accepted format patterns, most preferred first.
    #[inline]
    #[must_use]
    pub fn format_patterns(&self) -> &[String] {
        &self.format_patterns
    }

    /// Returns the ordered nameless-day groups.
    #[inline]
    #[must_use]
    pub fn nameless_day_groups(&self) -> &[NamelessDayGroup] {
        &self.nameless_day_groups
    }

    /// Returns the provenance metadata.
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &ProfileMetadata {
        &self.metadata
    }

    /// Returns the total day count of a year: every month plus every
    /// nameless-day group, including a group trailing the final month.
    #[must_use]
    pub fn days_in_year(&self, year: i32) -> i64 {
        let leap = self.is_leap_year(year);
        let months: i64 = (1..=self.month_count())
            .map(|m| i64::from(self.month_lengths.days_in_month(m, leap)))
            .sum();
        let nameless: i64 = self
            .nameless_day_groups
            .iter()
            .map(|group| group.size(leap))
            .sum();
        months + nameless
    }

    /// Converts date components to fractional seconds since this
    /// calendar's epoch. See [`TimeConverter::date_to_seconds`].
    #[must_use]
    pub fn date_to_seconds(&self, fields: &DateFields) -> f64 {
        TimeConverter::new(self).date_to_seconds(fields)
    }

    /// Converts fractional seconds since this calendar's epoch to date
    /// components. See [`TimeConverter::seconds_to_date`].
    #[must_use]
    pub fn seconds_to_date(&self, seconds: f64) -> DateFields {
        TimeConverter::new(self).seconds_to_date(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn leap_year_rules() {
        assert!(!LeapYearRule::Never.is_leap_year(4));
        assert!(LeapYearRule::EveryN(4).is_leap_year(1492));
        assert!(!LeapYearRule::EveryN(4).is_leap_year(1493));
        assert!(LeapYearRule::EveryN(8).is_leap_year(4712));
        assert!(LeapYearRule::Gregorian.is_leap_year(2000));
        assert!(!LeapYearRule::Gregorian.is_leap_year(1900));
        assert!(LeapYearRule::Gregorian.is_leap_year(2024));
        assert!(!LeapYearRule::Gregorian.is_leap_year(2023));
        assert!(LeapYearRule::Custom(|y| y == 7).is_leap_year(7));
    }

    #[test]
    fn uniform_month_lengths() {
        let rules = CalendarRules::new(
            "uniform",
            "Uniform",
            labels(&["One", "Two", "Three"]),
            MonthLengths::Uniform(30),
        );
        assert_eq!(rules.month_count(), 3);
        assert_eq!(rules.days_in_month(2, 1), 30);
        assert_eq!(rules.days_in_month(0, 1), 0);
        assert_eq!(rules.days_in_month(4, 1), 0);
        assert_eq!(rules.days_in_year(1), 90);
    }

    #[test]
    fn leap_month_gains_a_day() {
        let rules = CalendarRules::new(
            "two-month",
            "Two Month",
            labels(&["First", "Second"]),
            MonthLengths::PerMonth {
                days: vec![31, 28],
                leap_month: Some(2),
            },
        )
        .with_leap_year_rule(LeapYearRule::EveryN(4));
        assert_eq!(rules.days_in_month(2, 3), 28);
        assert_eq!(rules.days_in_month(2, 4), 29);
        assert_eq!(rules.days_in_year(3), 59);
        assert_eq!(rules.days_in_year(4), 60);
    }

    #[test]
    fn nameless_groups_count_toward_year_length() {
        let rules = CalendarRules::new(
            "festival",
            "Festival",
            labels(&["A", "B"]),
            MonthLengths::Uniform(30),
        )
        .with_leap_year_rule(LeapYearRule::EveryN(4))
        .with_nameless_day_groups(vec![
            NamelessDayGroup::new(1, labels(&["Midpoint"]), false),
            NamelessDayGroup::new(2, labels(&["End One", "End Two"]), true),
        ]);
        // 60 month days + 1 + 2, plus one more at year end in leap years.
        assert_eq!(rules.days_in_year(1), 63);
        assert_eq!(rules.days_in_year(4), 64);
        assert_eq!(rules.nameless_day_groups()[1].size(true), 3);
        assert_eq!(rules.nameless_day_groups()[1].day_count(), 2);
    }
}
