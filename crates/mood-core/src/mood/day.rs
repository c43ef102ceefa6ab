//! Day labels attached to mood records.

use chrono::{Datelike, Weekday};

/// Returns the full English name of `weekday` (`"Monday"` … `"Sunday"`).
///
/// `chrono::Weekday` only displays the three-letter abbreviation, while stored
/// histories use full names.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Returns the day label for any date-like value.
pub fn day_label<D: Datelike>(date: &D) -> String {
    weekday_name(date.weekday()).to_string()
}
