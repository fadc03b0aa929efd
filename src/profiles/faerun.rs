//! The Harptos calendar of the Forgotten Realms.
//!
//! 12 months of 30 days each, plus five annual festivals between months.
//! Shieldmeet follows Midsummer every four years.

use alloc::string::String;
use alloc::vec;

use crate::profiles::labels;
use crate::rules::{
    CalendarRules, EpochNotation, LeapYearRule, MonthLengths, NamelessDayGroup, ProfileMetadata,
};

pub(crate) fn rules() -> CalendarRules {
    CalendarRules::new(
        "faerun",
        "Faerûn (Harptos Calendar)",
        labels(&[
            "Hammer",
            "Alturiak",
            "Ches",
            "Tarsakh",
            "Mirtul",
            "Kythorn",
            "Flamerule",
            "Eleasis",
            "Eleint",
            "Marpenoth",
            "Uktar",
            "Nightal",
        ]),
        MonthLengths::Uniform(30),
    )
    .with_leap_year_rule(LeapYearRule::EveryN(4))
    .with_epoch_notation(EpochNotation::new("Before DR", "DR"))
    .with_format_patterns(vec![String::from("j F Y \\D\\R")])
    .with_nameless_day_groups(vec![
        NamelessDayGroup::new(1, labels(&["Midwinter"]), false),
        NamelessDayGroup::new(4, labels(&["Greengrass"]), false),
        // Shieldmeet follows Midsummer in leap years.
        NamelessDayGroup::new(7, labels(&["Midsummer"]), true),
        NamelessDayGroup::new(9, labels(&["Highharvestide"]), false),
        NamelessDayGroup::new(11, labels(&["Feast of the Moon"]), false),
    ])
    .with_metadata(ProfileMetadata {
        source: String::from("Forgotten Realms Campaign Setting"),
        setting: String::from("Forgotten Realms (Dungeons & Dragons)"),
        description: String::from(
            "Harptos Calendar with 12 months of 30 days plus annual festivals",
        ),
    })
}
