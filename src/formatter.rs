//! This module implements pattern-based date formatting.
//!
//! Patterns use PHP-`date()`-style tokens: `Y` full year, `y` two-digit
//! year, `F` month name, `m`/`n` padded/plain month, `d`/`j` padded/plain
//! day, `H`/`i`/`s` padded hour/minute/second. A backslash escapes the
//! next character. Substitution is simultaneous: substituted output is
//! never rescanned for further tokens.

use alloc::string::String;
use core::fmt;

use writeable::{impl_display_with_writeable, Writeable};

use crate::calendar::Calendar;
use crate::point::TimePoint;

/// A `TimePoint` paired with a pattern, writeable as formatted text.
#[derive(Debug)]
pub struct FormattedDate<'a> {
    calendar: &'a Calendar,
    point: &'a TimePoint,
    pattern: &'a str,
}

impl<'a> FormattedDate<'a> {
    /// Pairs a point with a pattern for writing.
    #[must_use]
    pub fn new(calendar: &'a Calendar, point: &'a TimePoint, pattern: &'a str) -> Self {
        Self {
            calendar,
            point,
            pattern,
        }
    }
}

impl Writeable for FormattedDate<'_> {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let mut chars = self.pattern.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        sink.write_char(escaped)?;
                    }
                }
                'Y' => write!(sink, "{}", self.point.year())?,
                'y' => {
                    let year = self.point.year();
                    if year >= 100 {
                        write!(sink, "{:02}", year % 100)?;
                    } else {
                        write!(sink, "{year}")?;
                    }
                }
                'F' => {
                    let name = self.calendar.month_name(self.point.month()).unwrap_or("");
                    sink.write_str(name)?;
                }
                'm' => write!(sink, "{:02}", self.point.month())?,
                'n' => write!(sink, "{}", self.point.month())?,
                'd' => write!(sink, "{:02}", self.point.day())?,
                'j' => write!(sink, "{}", self.point.day())?,
                'H' => write!(sink, "{:02}", self.point.hour())?,
                'i' => write!(sink, "{:02}", self.point.minute())?,
                's' => write!(sink, "{:02}", self.point.second())?,
                other => sink.write_char(other)?,
            }
        }
        Ok(())
    }
}

impl_display_with_writeable!(FormattedDate<'_>);

/// Formats a point with a pattern, defaulting to the calendar's first
/// format pattern.
pub(crate) fn format(calendar: &Calendar, point: &TimePoint, pattern: Option<&str>) -> String {
    let pattern = pattern
        .or_else(|| calendar.rules().format_patterns().first().map(String::as_str))
        .unwrap_or("F j, Y");
    FormattedDate::new(calendar, point, pattern)
        .write_to_string()
        .into_owned()
}
