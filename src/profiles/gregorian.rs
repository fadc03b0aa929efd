//! The standard Gregorian calendar.

use alloc::string::String;
use alloc::vec;

use crate::profiles::labels;
use crate::rules::{
    CalendarRules, EpochNotation, LeapYearRule, MonthLengths, ProfileMetadata,
};

pub(crate) fn rules() -> CalendarRules {
    CalendarRules::new(
        "gregorian",
        "Gregorian Calendar",
        labels(&[
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ]),
        MonthLengths::PerMonth {
            days: vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
            leap_month: Some(2),
        },
    )
    .with_leap_year_rule(LeapYearRule::Gregorian)
    .with_epoch_notation(EpochNotation::new("BCE", "CE"))
    .with_format_patterns(vec![
        String::from("F j, Y"),
        String::from("Y-m-d"),
        String::from("d/m/Y"),
        String::from("m/d/Y"),
    ])
    .with_metadata(ProfileMetadata {
        source: String::from("International standard"),
        setting: String::from("Real world"),
        description: String::from("Standard Gregorian calendar used internationally"),
    })
}
