//! Half-open time range containment on raw clock strings.
//!
//! A time `t` is inside `[start, end)` iff `start <= t < end`, compared as
//! minutes since midnight. The end boundary is never part of the range.

use tracing::warn;

use crate::error::Result;
use crate::model::ClockTime;

/// Convert an `H:MM` or `HH:MM` string to minutes since midnight.
///
/// # Errors
/// Returns `MatchError::InvalidTime` if the string is not a valid 24-hour time.
pub fn convert_time_to_minutes(time: &str) -> Result<u16> {
    time.parse::<ClockTime>().map(ClockTime::minutes)
}

/// Whether `time` lies in the half-open range `[start_time, end_time)`.
///
/// Callers are expected to pass well-formed times. If any operand fails to
/// parse, the comparison cannot hold and the result is `false`.
pub fn is_time_in_range(time: &str, start_time: &str, end_time: &str) -> bool {
    match (
        convert_time_to_minutes(time),
        convert_time_to_minutes(start_time),
        convert_time_to_minutes(end_time),
    ) {
        (Ok(t), Ok(start), Ok(end)) => start <= t && t < end,
        _ => {
            warn!(time, start_time, end_time, "unparseable time in range check");
            false
        }
    }
}
