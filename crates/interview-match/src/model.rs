//! Data model shared by every matching component.
//!
//! All types serialize with camelCase field names and lowercase day names, so a
//! roster file reads like `{"day":"monday","startTime":"9:00","endTime":"12:00"}`.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// A working day. Weekends are not part of the scheduling week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayOfWeek {
    /// Monday through Friday, in calendar order.
    pub const ALL: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// Lowercase identifier used on the wire (`"monday"`).
    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MatchError::InvalidDay(s.to_string()))
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
        }
    }
}

impl TryFrom<Weekday> for DayOfWeek {
    type Error = MatchError;

    fn try_from(weekday: Weekday) -> Result<Self> {
        match weekday {
            Weekday::Mon => Ok(DayOfWeek::Monday),
            Weekday::Tue => Ok(DayOfWeek::Tuesday),
            Weekday::Wed => Ok(DayOfWeek::Wednesday),
            Weekday::Thu => Ok(DayOfWeek::Thursday),
            Weekday::Fri => Ok(DayOfWeek::Friday),
            other => Err(MatchError::InvalidDay(format!("{other:?}"))),
        }
    }
}

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Parses `H:MM` and `HH:MM` (24-hour). Formats back as `H:MM` without a
/// leading zero on the hour, the same shape the slot generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from hour and minute. Returns `None` outside 00:00..=23:59.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then(|| ClockTime(hour * 60 + minute))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for ClockTime {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MatchError::InvalidTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;

        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(hour) || !digits(minute) || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }

        let hour: u16 = hour.parse().map_err(|_| invalid())?;
        let minute: u16 = minute.parse().map_err(|_| invalid())?;
        ClockTime::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}

/// The start of a discrete scheduling interval.
///
/// Equality is structural on the raw time string: `"9:00"` and `"09:00"` are
/// different slots unless the caller normalizes first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: DayOfWeek,
    pub time: String,
}

impl TimeSlot {
    pub fn new(day: DayOfWeek, time: impl Into<String>) -> Self {
        Self {
            day,
            time: time.into(),
        }
    }

    /// The same slot with its time rewritten in generator form (`"09:00"` →
    /// `"9:00"`).
    ///
    /// # Errors
    /// Returns `MatchError::InvalidTime` if the time does not parse.
    pub fn normalized(&self) -> Result<TimeSlot> {
        let time: ClockTime = self.time.parse()?;
        Ok(TimeSlot::new(self.day, time.to_string()))
    }

    /// Check that the time parses and is already in generator form.
    ///
    /// A zero-padded time such as `"09:00"` never equals a generated slot, so a
    /// booking recorded that way would exclude nothing.
    pub fn validate(&self) -> Result<()> {
        let canonical = self.normalized()?.time;
        if canonical != self.time {
            return Err(MatchError::NonCanonicalTime {
                time: self.time.clone(),
                canonical,
            });
        }
        Ok(())
    }

    /// `true` when `other` names the same day and the identical time string.
    pub fn same_slot(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.time == other.time
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// Availability on one day from `start_time` (inclusive) to `end_time` (exclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRange {
    pub day: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
}

impl AvailabilityRange {
    /// Build a range, rejecting malformed times and empty or inverted ranges.
    pub fn new(
        day: DayOfWeek,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Result<Self> {
        let range = Self {
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
        };
        range.validate()?;
        Ok(range)
    }

    /// Check that both ends parse and that start is strictly before end.
    ///
    /// Deserialized ranges bypass [`AvailabilityRange::new`]; loaders call this.
    pub fn validate(&self) -> Result<()> {
        let start: ClockTime = self.start_time.parse()?;
        let end: ClockTime = self.end_time.parse()?;
        if start >= end {
            return Err(MatchError::InvalidRange {
                day: self.day.to_string(),
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }
        Ok(())
    }
}

/// A confirmed booking. The matcher only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledInterview {
    pub candidate_id: String,
    pub engineer_id: String,
    pub time_slot: TimeSlot,
}

/// A candidate or an engineer. Matching only looks at `id` and `availability`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    /// Free-text summary shown next to candidates, e.g. "Tuesday 2-5 PM".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time_description: Option<String>,
    pub availability: Vec<AvailabilityRange>,
}

impl Person {
    pub fn validate(&self) -> Result<()> {
        self.availability.iter().try_for_each(AvailabilityRange::validate)
    }

    /// The `{id, availability}` view the overlap finder consumes.
    pub fn as_engineer(&self) -> EngineerAvailability {
        EngineerAvailability {
            id: self.id.clone(),
            availability: self.availability.clone(),
        }
    }
}

/// An engineer identified explicitly rather than by list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineerAvailability {
    pub id: String,
    pub availability: Vec<AvailabilityRange>,
}

impl EngineerAvailability {
    pub fn new(id: impl Into<String>, availability: Vec<AvailabilityRange>) -> Self {
        Self {
            id: id.into(),
            availability,
        }
    }
}

/// One entry of the overlap finder's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapSlot {
    pub time_slot: TimeSlot,
    /// Engineer ids free at this slot, in the order the engineers were supplied.
    pub available_engineers: Vec<String>,
}

/// Interview lengths offered to the scheduler.
///
/// Accepted by the overlap finder but does not change the slot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterviewDuration {
    #[serde(rename = "15")]
    Fifteen,
    #[default]
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "60")]
    Sixty,
}

impl InterviewDuration {
    pub fn minutes(self) -> u32 {
        match self {
            InterviewDuration::Fifteen => 15,
            InterviewDuration::Thirty => 30,
            InterviewDuration::Sixty => 60,
        }
    }
}
