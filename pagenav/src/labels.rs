//! Display labels for table values.

use chrono::Weekday;

/// Abbreviated weekday label as shown in the day tables.
pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon.",
        Weekday::Tue => "Tues.",
        Weekday::Wed => "Wed.",
        Weekday::Thu => "Thurs.",
        Weekday::Fri => "Fri.",
        Weekday::Sat => "Sat.",
        Weekday::Sun => "Sun.",
    }
}

/// Label for an ISO weekday number (1 = Monday .. 7 = Sunday).
pub fn weekday_abbrev_from_index(day: u8) -> Option<&'static str> {
    if !(1..=7).contains(&day) {
        return None;
    }
    Weekday::try_from(day - 1).ok().map(weekday_abbrev)
}
