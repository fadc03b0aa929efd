//! The Aventurian calendar of Das Schwarze Auge (The Dark Eye).
//!
//! Bosparans Fall reckoning: 12 months of 30 days plus five nameless days
//! at year end, no leap years.

use alloc::string::String;
use alloc::vec;

use crate::profiles::labels;
use crate::rules::{
    CalendarRules, EpochNotation, MonthLengths, NamelessDayGroup, ProfileMetadata,
};

pub(crate) fn rules() -> CalendarRules {
    CalendarRules::new(
        "dsa",
        "Das Schwarze Auge (Aventurian Calendar)",
        labels(&[
            "Praios",
            "Rondra",
            "Efferd",
            "Travia",
            "Boron",
            "Hesinde",
            "Firun",
            "Tsa",
            "Phex",
            "Peraine",
            "Ingerimm",
            "Rahja",
        ]),
        MonthLengths::Uniform(30),
    )
    .with_epoch_notation(EpochNotation::new("Before BF", "BF"))
    .with_format_patterns(vec![
        String::from("d. F Y \\B\\F"),
        String::from("F d, Y \\B\\F"),
        String::from("Y-m-d"),
    ])
    .with_nameless_day_groups(vec![NamelessDayGroup::new(
        12,
        labels(&[
            "First Nameless Day",
            "Second Nameless Day",
            "Third Nameless Day",
            "Fourth Nameless Day",
            "Fifth Nameless Day",
        ]),
        false,
    )])
    .with_metadata(ProfileMetadata {
        source: String::from("Das Schwarze Auge (The Dark Eye) RPG"),
        setting: String::from("Aventuria"),
        description: String::from(
            "Bosparans Fall calendar with 12 months of 30 days plus 5 nameless days",
        ),
    })
}
