//! Find interview slots shared by a candidate and at least one engineer.
//!
//! The finder walks the slot universe once, keeps the slots inside the
//! candidate's availability, and for each of those collects the engineers who
//! are free there and not already booked. Slots with no engineer are dropped.
//!
//! Output is ordered day-major then by time, exactly as the slot generator
//! produces it, and is never re-sorted. Within a slot, engineer ids follow the
//! order in which engineers were supplied and appear at most once.

use std::collections::HashSet;

use tracing::debug;

use crate::matcher::{is_slot_in_availability_ranges, is_slot_scheduled};
use crate::model::{
    AvailabilityRange, EngineerAvailability, InterviewDuration, OverlapSlot, ScheduledInterview,
};
use crate::slots::{generate_slot_universe, SlotConfig};

/// Find overlapping slots on the default grid (Mon–Fri, 09:00–18:00, 30 min).
///
/// `duration` is accepted for callers that track interview length, but the
/// grid step stays fixed regardless of its value.
pub fn find_overlapping_slots(
    candidate: &[AvailabilityRange],
    engineers: &[EngineerAvailability],
    scheduled: &[ScheduledInterview],
    duration: InterviewDuration,
) -> Vec<OverlapSlot> {
    find_overlapping_slots_with(&SlotConfig::default(), candidate, engineers, scheduled, duration)
}

/// Same as [`find_overlapping_slots`] on an explicit slot grid.
pub fn find_overlapping_slots_with(
    config: &SlotConfig,
    candidate: &[AvailabilityRange],
    engineers: &[EngineerAvailability],
    scheduled: &[ScheduledInterview],
    duration: InterviewDuration,
) -> Vec<OverlapSlot> {
    if candidate.is_empty() || engineers.is_empty() {
        return Vec::new();
    }

    // First occurrence of an id wins; later duplicates are ignored.
    let mut seen = HashSet::new();
    let engineers: Vec<&EngineerAvailability> = engineers
        .iter()
        .filter(|engineer| seen.insert(engineer.id.as_str()))
        .collect();

    let candidate_slots: Vec<_> = generate_slot_universe(config)
        .into_iter()
        .filter(|slot| is_slot_in_availability_ranges(slot, candidate))
        .collect();

    let overlaps: Vec<OverlapSlot> = candidate_slots
        .into_iter()
        .filter_map(|time_slot| {
            let available_engineers: Vec<String> = engineers
                .iter()
                .filter(|engineer| {
                    is_slot_in_availability_ranges(&time_slot, &engineer.availability)
                        && !is_slot_scheduled(&time_slot, &engineer.id, scheduled)
                })
                .map(|engineer| engineer.id.clone())
                .collect();

            (!available_engineers.is_empty()).then_some(OverlapSlot {
                time_slot,
                available_engineers,
            })
        })
        .collect();

    debug!(
        engineers = engineers.len(),
        bookings = scheduled.len(),
        duration_minutes = duration.minutes(),
        overlaps = overlaps.len(),
        "computed overlapping slots"
    );

    overlaps
}

/// Positional form: the Nth availability list belongs to engineer `eng{N}`
/// (1-indexed).
///
/// Identity here depends on list position, so filtering or reordering the
/// list upstream silently changes which engineer a booking applies to.
/// Prefer [`find_overlapping_slots`] with explicit ids.
pub fn find_overlapping_slots_positional(
    candidate: &[AvailabilityRange],
    engineers: &[Vec<AvailabilityRange>],
    scheduled: &[ScheduledInterview],
    duration: InterviewDuration,
) -> Vec<OverlapSlot> {
    let engineers: Vec<EngineerAvailability> = engineers
        .iter()
        .enumerate()
        .map(|(index, availability)| {
            EngineerAvailability::new(positional_engineer_id(index), availability.clone())
        })
        .collect();

    find_overlapping_slots(candidate, &engineers, scheduled, duration)
}

/// The id the positional form assigns to the engineer at `index` (0-based).
fn positional_engineer_id(index: usize) -> String {
    format!("eng{}", index + 1)
}
