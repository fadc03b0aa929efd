//! The Common Year calendar of Greyhawk.
//!
//! Twelve 28-day months interleaved with four 7-day festival weeks; the
//! festival weeks are full months of their own (364 days per year).

use alloc::string::String;
use alloc::vec;

use crate::profiles::labels;
use crate::rules::{CalendarRules, EpochNotation, MonthLengths, ProfileMetadata};

pub(crate) fn rules() -> CalendarRules {
    CalendarRules::new(
        "greyhawk",
        "Greyhawk (Common Year)",
        labels(&[
            "Needfest",
            "Fireseek",
            "Readying",
            "Coldeven",
            "Growfest",
            "Planting",
            "Flocktime",
            "Wealsun",
            "Richfest",
            "Reaping",
            "Goodmonth",
            "Harvester",
            "Brewfest",
            "Patchwall",
            "Ready'reat",
            "Sunsebb",
        ]),
        MonthLengths::PerMonth {
            days: vec![7, 28, 28, 28, 7, 28, 28, 28, 7, 28, 28, 28, 7, 28, 28, 28],
            leap_month: None,
        },
    )
    .with_epoch_notation(EpochNotation::new("Before CY", "CY"))
    .with_format_patterns(vec![
        String::from("d F Y \\C\\Y"),
        String::from("F d, Y \\C\\Y"),
        String::from("Y-m-d"),
    ])
    .with_metadata(ProfileMetadata {
        source: String::from("World of Greyhawk Campaign Setting"),
        setting: String::from("Oerth (Greyhawk)"),
        description: String::from(
            "Common Year calendar with 12 months of 28 days plus 4 festival weeks (364 days total)",
        ),
    })
}
