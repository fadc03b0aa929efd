//! The Krynn calendar of Dragonlance.

use alloc::string::String;
use alloc::vec;

use crate::profiles::labels;
use crate::rules::{
    CalendarRules, EpochNotation, LeapYearRule, MonthLengths, ProfileMetadata,
};

pub(crate) fn rules() -> CalendarRules {
    CalendarRules::new(
        "dragonlance",
        "Dragonlance (Krynn Calendar)",
        labels(&[
            "Winter Deep",
            "Winter Wane",
            "Spring Dawning",
            "Spring Rain",
            "Spring Bloom",
            "Summer Home",
            "Summer Run",
            "Summer End",
            "Autumn Harvest",
            "Autumn Twilight",
            "Autumn Dark",
            "Winter Come",
        ]),
        MonthLengths::PerMonth {
            days: vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
            leap_month: Some(2),
        },
    )
    .with_leap_year_rule(LeapYearRule::Gregorian)
    .with_epoch_notation(EpochNotation::new("PC", "AC"))
    .with_format_patterns(vec![
        String::from("d F Y \\A\\C"),
        String::from("F d, Y \\A\\C"),
        String::from("Y-m-d"),
    ])
    .with_metadata(ProfileMetadata {
        source: String::from("Dragonlance Campaign Setting"),
        setting: String::from("Krynn"),
        description: String::from(
            "Krynn calendar with varying month lengths, AC/PC reckoning from the Cataclysm",
        ),
    })
}
