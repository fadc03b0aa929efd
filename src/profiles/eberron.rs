//! The Galifar calendar of Eberron.

use alloc::string::String;
use alloc::vec;

use crate::profiles::labels;
use crate::rules::{CalendarRules, EpochNotation, MonthLengths, ProfileMetadata};

pub(crate) fn rules() -> CalendarRules {
    CalendarRules::new(
        "eberron",
        "Eberron (Galifar Calendar)",
        labels(&[
            "Zarantyr",
            "Olarune",
            "Therendor",
            "Eyre",
            "Dravago",
            "Nymm",
            "Lharvion",
            "Barrakas",
            "Rhaan",
            "Sypheros",
            "Aryth",
            "Vult",
        ]),
        MonthLengths::Uniform(28),
    )
    .with_epoch_notation(EpochNotation::new("Before YK", "YK"))
    .with_format_patterns(vec![
        String::from("d F Y \\Y\\K"),
        String::from("F d, Y \\Y\\K"),
        String::from("Y-m-d"),
    ])
    .with_metadata(ProfileMetadata {
        source: String::from("Eberron Campaign Setting (D&D)"),
        setting: String::from("Eberron"),
        description: String::from(
            "Galifar Calendar with 12 months of 28 days each (336 days per year)",
        ),
    })
}
