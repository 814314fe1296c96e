//! Human-readable rendering of slots for display ("Monday, 2:30 PM").

use crate::error::Result;
use crate::model::{ClockTime, DayOfWeek, TimeSlot};

/// Render a 24-hour `H:MM` string as a 12-hour clock string, e.g. `"2:30 PM"`.
///
/// Midnight renders as `12:00 AM` and noon as `12:00 PM`.
pub fn format_time(time: &str) -> Result<String> {
    let time: ClockTime = time.parse()?;
    Ok(format_clock_time(time))
}

fn format_clock_time(time: ClockTime) -> String {
    let period = if time.hour() >= 12 { "PM" } else { "AM" };
    let display_hour = match time.hour() % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, time.minute(), period)
}

/// Capitalized day name, e.g. `"Monday"`.
pub fn day_name(day: DayOfWeek) -> &'static str {
    match day {
        DayOfWeek::Monday => "Monday",
        DayOfWeek::Tuesday => "Tuesday",
        DayOfWeek::Wednesday => "Wednesday",
        DayOfWeek::Thursday => "Thursday",
        DayOfWeek::Friday => "Friday",
    }
}

/// `"<Day>, <12-hour time>"`, e.g. `"Tuesday, 10:30 AM"`.
pub fn format_time_slot(slot: &TimeSlot) -> Result<String> {
    Ok(format!("{}, {}", day_name(slot.day), format_time(&slot.time)?))
}
