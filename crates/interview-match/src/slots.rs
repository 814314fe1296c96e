//! Generate the universe of discrete interview slots for a work week.
//!
//! Slots are ordered day-major (Monday first), then by time ascending. The
//! sequence is recomputed on every call; nothing is cached.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::model::{ClockTime, DayOfWeek, TimeSlot};

/// Bounds and step of the scheduling grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConfig {
    /// Days to generate slots for, in output order.
    pub days: Vec<DayOfWeek>,
    /// First hour of the window (inclusive).
    pub start_hour: u16,
    /// Last hour of the window (exclusive).
    pub end_hour: u16,
    /// Step between consecutive slots, in minutes.
    pub granularity_minutes: u16,
}

impl Default for SlotConfig {
    /// Monday–Friday, 09:00–18:00, every 30 minutes.
    fn default() -> Self {
        Self {
            days: DayOfWeek::ALL.to_vec(),
            start_hour: 9,
            end_hour: 18,
            granularity_minutes: 30,
        }
    }
}

impl SlotConfig {
    pub fn with_days(mut self, days: impl IntoIterator<Item = DayOfWeek>) -> Self {
        self.days = days.into_iter().collect();
        self
    }

    pub fn with_hours(mut self, start_hour: u16, end_hour: u16) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    pub fn with_granularity(mut self, minutes: u16) -> Self {
        self.granularity_minutes = minutes;
        self
    }

    /// Reject windows that are empty or run past midnight, and steps that do
    /// not tile an hour evenly.
    pub fn validate(&self) -> Result<()> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(MatchError::InvalidConfig(format!(
                "hour window {}..{} must satisfy start < end <= 24",
                self.start_hour, self.end_hour
            )));
        }
        let step = self.granularity_minutes;
        if step == 0 || (60 % step != 0 && step % 60 != 0) {
            return Err(MatchError::InvalidConfig(format!(
                "granularity of {step} minutes must divide an hour or be a whole number of hours"
            )));
        }
        Ok(())
    }

    /// Start and end of the daily window in minutes, both clamped to midnight.
    fn window_minutes(&self) -> (u32, u32) {
        let clamp = |hour: u16| u32::from(hour.min(24)) * 60;
        (clamp(self.start_hour), clamp(self.end_hour))
    }

    /// Number of slots per day under this configuration.
    pub fn slots_per_day(&self) -> usize {
        let (start, end) = self.window_minutes();
        match self.granularity_minutes {
            0 => 0,
            step => end.saturating_sub(start).div_ceil(u32::from(step)) as usize,
        }
    }
}

/// Produce every slot of the configured week, ordered by day then time.
///
/// Times are written `H:MM` with no leading zero on the hour ("9:00",
/// "13:30"). Hours past 24 are treated as midnight, so an unvalidated config
/// yields a shorter (possibly empty) week rather than failing. A zero
/// granularity yields no slots.
pub fn generate_slot_universe(config: &SlotConfig) -> Vec<TimeSlot> {
    let step = u32::from(config.granularity_minutes);
    if step == 0 {
        return Vec::new();
    }

    let (start, end) = config.window_minutes();

    let mut slots = Vec::with_capacity(config.days.len() * config.slots_per_day());
    for &day in &config.days {
        let mut minute = start;
        while minute < end {
            if let Some(time) = ClockTime::from_hm((minute / 60) as u16, (minute % 60) as u16) {
                slots.push(TimeSlot::new(day, time.to_string()));
            }
            minute += step;
        }
    }
    slots
}
