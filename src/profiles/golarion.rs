//! The Absalom Reckoning calendar of Golarion (Pathfinder).

use alloc::string::String;
use alloc::vec;

use crate::profiles::labels;
use crate::rules::{
    CalendarRules, EpochNotation, LeapYearRule, MonthLengths, ProfileMetadata,
};

pub(crate) fn rules() -> CalendarRules {
    CalendarRules::new(
        "golarion",
        "Golarion (Absalom Reckoning)",
        labels(&[
            "Abadius",
            "Calistril",
            "Pharast",
            "Gozran",
            "Desnus",
            "Sarenith",
            "Erastus",
            "Arodus",
            "Rova",
            "Lamashan",
            "Neth",
            "Kuthona",
        ]),
        MonthLengths::PerMonth {
            days: vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
            // Calistril gains the leap day.
            leap_month: Some(2),
        },
    )
    .with_leap_year_rule(LeapYearRule::EveryN(8))
    .with_epoch_notation(EpochNotation::new("Before AR", "AR"))
    .with_format_patterns(vec![
        String::from("d F Y \\A\\R"),
        String::from("F d, Y \\A\\R"),
        String::from("Y-m-d"),
    ])
    .with_metadata(ProfileMetadata {
        source: String::from("Pathfinder Campaign Setting"),
        setting: String::from("Golarion"),
        description: String::from(
            "Absalom Reckoning calendar, dating from the founding of Absalom in 1 AR",
        ),
    })
}
