//! This module implements calendar configuration validation.

use alloc::format;
use alloc::string::String;

use crate::config::CalendarConfiguration;
use crate::rules::{EpochNotation, NamelessDayGroup};
use crate::{CalendarError, CalendarResult};

/// Validates a configuration, returning the first violation found.
pub fn validate_configuration(config: &CalendarConfiguration) -> CalendarResult<()> {
    validate_name(config.name())?;
    validate_display_name(config.display_name())?;
    validate_month_names(config.month_names())?;
    validate_days_per_month(config.days_per_month(), config.month_names())?;
    validate_leap_month(config.leap_month(), config.month_names().len())?;
    validate_epoch_notation(config.epoch_notation())?;
    validate_format_patterns(config.format_patterns())?;
    validate_nameless_day_groups(config.nameless_day_groups(), config.month_names().len())?;
    Ok(())
}

fn validate_name(name: &str) -> CalendarResult<()> {
    if name.is_empty() {
        return Err(CalendarError::invalid_config().with_message("Calendar name cannot be empty"));
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(CalendarError::invalid_config().with_message(
            "Calendar name must contain only alphanumeric characters, hyphens, and underscores",
        ));
    }
    Ok(())
}

fn validate_display_name(display_name: &str) -> CalendarResult<()> {
    if display_name.is_empty() {
        return Err(CalendarError::invalid_config().with_message("Display name cannot be empty"));
    }
    Ok(())
}

fn validate_month_names(month_names: &[String]) -> CalendarResult<()> {
    if month_names.is_empty() {
        return Err(
            CalendarError::invalid_config().with_message("Calendar must have at least one month")
        );
    }
    for (index, name) in month_names.iter().enumerate() {
        if name.is_empty() {
            return Err(CalendarError::invalid_config().with_message(format!(
                "Month name at index {} cannot be empty",
                index + 1
            )));
        }
    }
    Ok(())
}

fn validate_days_per_month(days_per_month: &[u8], month_names: &[String]) -> CalendarResult<()> {
    if days_per_month.len() != month_names.len() {
        return Err(CalendarError::invalid_config()
            .with_message("Number of daysPerMonth entries must match number of months"));
    }
    for (index, days) in days_per_month.iter().enumerate() {
        if *days < 1 {
            return Err(CalendarError::invalid_config().with_message(format!(
                "Days in month {} must be at least 1",
                index + 1
            )));
        }
    }
    Ok(())
}

fn validate_leap_month(leap_month: Option<u8>, month_count: usize) -> CalendarResult<()> {
    if let Some(month) = leap_month {
        if month == 0 || usize::from(month) > month_count {
            return Err(CalendarError::invalid_config().with_message(format!(
                "Leap month {month} must name an existing month (1 to {month_count})"
            )));
        }
    }
    Ok(())
}

fn validate_epoch_notation(notation: &EpochNotation) -> CalendarResult<()> {
    if notation.before.is_empty() || notation.after.is_empty() {
        return Err(
            CalendarError::invalid_config().with_message("Epoch notation values cannot be empty")
        );
    }
    Ok(())
}

fn validate_format_patterns(patterns: &[String]) -> CalendarResult<()> {
    if patterns.is_empty() {
        return Err(CalendarError::invalid_config()
            .with_message("Calendar must have at least one format pattern"));
    }
    Ok(())
}

fn validate_nameless_day_groups(
    groups: &[NamelessDayGroup],
    month_count: usize,
) -> CalendarResult<()> {
    for group in groups {
        if usize::from(group.after_month()) > month_count {
            return Err(CalendarError::invalid_config().with_message(format!(
                "Nameless day group position {} must be between 0 and {month_count}",
                group.after_month()
            )));
        }
        if group.day_count() < 1 {
            return Err(CalendarError::invalid_config()
                .with_message("Nameless day group must have at least one day label"));
        }
        if group.labels().iter().any(String::is_empty) {
            return Err(CalendarError::invalid_config()
                .with_message("Nameless day labels cannot be empty"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    fn base_config() -> CalendarConfiguration {
        CalendarConfiguration::new(
            "custom",
            "Custom Calendar",
            vec!["One".to_string(), "Two".to_string()],
            vec![30, 31],
        )
    }

    #[test]
    fn accepts_a_well_formed_configuration() {
        assert!(validate_configuration(&base_config()).is_ok());
    }

    #[test]
    fn rejects_bad_names() {
        let config = CalendarConfiguration::new(
            "",
            "X",
            vec!["One".to_string()],
            vec![30],
        );
        assert!(validate_configuration(&config)
            .unwrap_err()
            .message()
            .contains("cannot be empty"));

        let config = CalendarConfiguration::new(
            "bad name!",
            "X",
            vec!["One".to_string()],
            vec![30],
        );
        assert!(validate_configuration(&config)
            .unwrap_err()
            .message()
            .contains("alphanumeric"));
    }

    #[test]
    fn rejects_month_table_mismatches() {
        let config = CalendarConfiguration::new(
            "custom",
            "Custom",
            vec!["One".to_string(), "Two".to_string()],
            vec![30],
        );
        assert!(validate_configuration(&config)
            .unwrap_err()
            .message()
            .contains("must match"));

        let config = CalendarConfiguration::new(
            "custom",
            "Custom",
            vec!["One".to_string()],
            vec![0],
        );
        assert!(validate_configuration(&config)
            .unwrap_err()
            .message()
            .contains("at least 1"));

        let config = CalendarConfiguration::new("custom", "Custom", Vec::new(), Vec::new());
        assert!(validate_configuration(&config)
            .unwrap_err()
            .message()
            .contains("at least one month"));
    }

    #[test]
    fn rejects_out_of_range_leap_month() {
        let config = base_config().with_leap_month(3);
        assert!(validate_configuration(&config)
            .unwrap_err()
            .message()
            .contains("Leap month"));
    }

    #[test]
    fn rejects_empty_epoch_notation_and_patterns() {
        use crate::rules::EpochNotation;
        let config = base_config().with_epoch_notation(EpochNotation::new("", "AE"));
        assert!(validate_configuration(&config)
            .unwrap_err()
            .message()
            .contains("Epoch notation"));

        let config = base_config().with_format_patterns(Vec::new());
        assert!(validate_configuration(&config)
            .unwrap_err()
            .message()
            .contains("format pattern"));
    }

    #[test]
    fn rejects_misplaced_nameless_day_groups() {
        let config = base_config().with_nameless_day_groups(vec![NamelessDayGroup::new(
            5,
            vec!["Feast".to_string()],
            false,
        )]);
        assert!(validate_configuration(&config)
            .unwrap_err()
            .message()
            .contains("between 0 and 2"));

        let config = base_config()
            .with_nameless_day_groups(vec![NamelessDayGroup::new(2, Vec::new(), false)]);
        assert!(validate_configuration(&config)
            .unwrap_err()
            .message()
            .contains("at least one day label"));
    }
}
