//! This module implements the built-in calendar profiles.
//!
//! Every profile is a function producing a fresh [`CalendarRules`] value;
//! [`ProfileRegistry::with_builtins`](crate::ProfileRegistry::with_builtins)
//! registers them all.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::rules::CalendarRules;

mod dragonlance;
mod dsa;
mod eberron;
mod faerun;
mod golarion;
mod gregorian;
mod greyhawk;

/// The standard Gregorian calendar with the 4/100/400 leap rule.
#[must_use]
pub fn gregorian() -> CalendarRules {
    gregorian::rules()
}

/// The Harptos calendar of the Forgotten Realms: 12 months of 30 days,
/// five annual festivals, and Shieldmeet every four years.
#[must_use]
pub fn faerun() -> CalendarRules {
    faerun::rules()
}

/// The Absalom Reckoning calendar of Golarion (Pathfinder), leap year
/// every eight years.
#[must_use]
pub fn golarion() -> CalendarRules {
    golarion::rules()
}

/// The Aventurian calendar of Das Schwarze Auge: 12 months of 30 days
/// plus five nameless days at year end.
#[must_use]
pub fn dsa() -> CalendarRules {
    dsa::rules()
}

/// The Galifar calendar of Eberron: 12 months of exactly 28 days.
#[must_use]
pub fn eberron() -> CalendarRules {
    eberron::rules()
}

/// The Krynn calendar of Dragonlance.
#[must_use]
pub fn dragonlance() -> CalendarRules {
    dragonlance::rules()
}

/// The Greyhawk Common Year calendar: twelve 28-day months interleaved
/// with four 7-day festival weeks.
#[must_use]
pub fn greyhawk() -> CalendarRules {
    greyhawk::rules()
}

pub(crate) fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_names_match_registry_keys() {
        for (rules, name) in [
            (gregorian(), "gregorian"),
            (faerun(), "faerun"),
            (golarion(), "golarion"),
            (dsa(), "dsa"),
            (eberron(), "eberron"),
            (dragonlance(), "dragonlance"),
            (greyhawk(), "greyhawk"),
        ] {
            assert_eq!(rules.name(), name);
        }
    }

    #[test]
    fn gregorian_shape() {
        let rules = gregorian();
        assert_eq!(rules.month_count(), 12);
        assert_eq!(rules.days_in_month(2, 2023), 28);
        assert_eq!(rules.days_in_month(2, 2024), 29);
        assert!(!rules.is_leap_year(1900));
        assert!(rules.is_leap_year(2000));
        assert_eq!(rules.days_in_year(2023), 365);
        assert_eq!(rules.days_in_year(2024), 366);
        assert!(rules.nameless_day_groups().is_empty());
    }

    #[test]
    fn faerun_shape() {
        let rules = faerun();
        assert_eq!(rules.month_count(), 12);
        assert_eq!(rules.days_in_month(6, 1492), 30);
        assert!(rules.is_leap_year(1492));
        assert!(!rules.is_leap_year(1493));
        let groups = rules.nameless_day_groups();
        assert_eq!(groups.len(), 5);
        let midsummer = groups.iter().find(|g| g.after_month() == 7).unwrap();
        assert!(midsummer.grows_in_leap_year());
        assert_eq!(midsummer.labels(), ["Midsummer"]);
        assert_eq!(rules.days_in_year(1492), 366);
        assert_eq!(rules.days_in_year(1493), 365);
    }

    #[test]
    fn golarion_shape() {
        let rules = golarion();
        assert_eq!(rules.month_count(), 12);
        assert!(rules.is_leap_year(4712));
        assert!(!rules.is_leap_year(4713));
        assert_eq!(rules.days_in_month(1, 4712), 31);
        assert_eq!(rules.days_in_month(2, 4712), 29);
        assert_eq!(rules.days_in_month(2, 4713), 28);
        assert_eq!(rules.epoch_notation().after, "AR");
    }

    #[test]
    fn dsa_shape() {
        let rules = dsa();
        assert_eq!(rules.month_count(), 12);
        assert_eq!(rules.days_in_month(7, 1000), 30);
        assert!(!rules.is_leap_year(1000));
        let groups = rules.nameless_day_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].after_month(), 12);
        assert_eq!(groups[0].day_count(), 5);
        assert!(!groups[0].grows_in_leap_year());
        assert_eq!(rules.days_in_year(1000), 365);
    }

    #[test]
    fn eberron_shape() {
        let rules = eberron();
        assert_eq!(rules.month_count(), 12);
        for month in 1..=12 {
            assert_eq!(rules.days_in_month(month, 998), 28);
        }
        assert!(!rules.is_leap_year(996));
        assert_eq!(rules.days_in_year(998), 336);
    }

    #[test]
    fn dragonlance_shape() {
        let rules = dragonlance();
        assert_eq!(rules.month_count(), 12);
        assert_eq!(rules.days_in_month(1, 351), 31);
        assert_eq!(rules.days_in_month(2, 352), 29);
        assert!(rules.is_leap_year(352));
        assert!(!rules.is_leap_year(300));
        assert_eq!(rules.epoch_notation().before, "PC");
    }

    #[test]
    fn greyhawk_shape() {
        let rules = greyhawk();
        assert_eq!(rules.month_count(), 16);
        for festival in [1, 5, 9, 13] {
            assert_eq!(rules.days_in_month(festival, 591), 7);
        }
        for month in [2, 3, 4, 6, 7, 8, 10, 11, 12, 14, 15, 16] {
            assert_eq!(rules.days_in_month(month, 591), 28);
        }
        assert!(!rules.is_leap_year(592));
        assert_eq!(rules.days_in_year(591), 4 * 7 + 12 * 28);
    }
}
