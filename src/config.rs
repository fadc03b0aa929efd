//! This module implements `CalendarConfiguration`, the record from which
//! custom calendars are built.

use alloc::string::String;
use alloc::vec::Vec;

use crate::rules::{
    CalendarRules, EpochNotation, LeapYearRule, MonthLengths, NamelessDayGroup, ProfileMetadata,
};

/// Parameters of a custom calendar.
///
/// The record is plain data; it becomes a [`CalendarRules`] only after
/// passing [`validate_configuration`](crate::validator::validate_configuration),
/// which [`Calendar::from_configuration`](crate::Calendar::from_configuration)
/// performs on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfiguration {
    name: String,
    display_name: String,
    month_names: Vec<String>,
    days_per_month: Vec<u8>,
    leap_year_rule: LeapYearRule,
    leap_month: Option<u8>,
    epoch_notation: EpochNotation,
    format_patterns: Vec<String>,
    nameless_day_groups: Vec<NamelessDayGroup>,
}

impl CalendarConfiguration {
    /// Creates a configuration with no leap years, no nameless days,
    /// `BE`/`AE` epoch notation and a single `F j, Y` format pattern.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        month_names: Vec<String>,
        days_per_month: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            month_names,
            days_per_month,
            leap_year_rule: LeapYearRule::Never,
            leap_month: None,
            epoch_notation: EpochNotation::new("BE", "AE"),
            format_patterns: alloc::vec![String::from("F j, Y")],
            nameless_day_groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_leap_year_rule(mut self, rule: LeapYearRule) -> Self {
        self.leap_year_rule = rule;
        self
    }

    /// Marks the month (1-based) that gains one day in leap years.
    #[must_use]
    pub fn with_leap_month(mut self, month: u8) -> Self {
        self.leap_month = Some(month);
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

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[inline]
    #[must_use]
    pub fn month_names(&self) -> &[String] {
        &self.month_names
    }

    #[inline]
    #[must_use]
    pub fn days_per_month(&self) -> &[u8] {
        &self.days_per_month
    }

    #[inline]
    #[must_use]
    pub fn leap_year_rule(&self) -> LeapYearRule {
        self.leap_year_rule
    }

    #[inline]
    #[must_use]
    pub fn leap_month(&self) -> Option<u8> {
        self.leap_month
    }

    #[inline]
    #[must_use]
    pub fn epoch_notation(&self) -> &EpochNotation {
        &self.epoch_notation
    }

    #[inline]
    #[must_use]
    pub fn format_patterns(&self) -> &[String] {
        &self.format_patterns
    }

    #[inline]
    #[must_use]
    pub fn nameless_day_groups(&self) -> &[NamelessDayGroup] {
        &self.nameless_day_groups
    }

    pub(crate) fn into_rules(self) -> CalendarRules {
        let metadata = ProfileMetadata {
            source: String::from("Custom"),
            setting: String::from("User-defined"),
            description: String::from("Custom calendar configuration"),
        };
        CalendarRules::new(
            self.name,
            self.display_name,
            self.month_names,
            MonthLengths::PerMonth {
                days: self.days_per_month,
                leap_month: self.leap_month,
            },
        )
        .with_leap_year_rule(self.leap_year_rule)
        .with_epoch_notation(self.epoch_notation)
        .with_format_patterns(self.format_patterns)
        .with_nameless_day_groups(self.nameless_day_groups)
        .with_metadata(metadata)
    }
}
