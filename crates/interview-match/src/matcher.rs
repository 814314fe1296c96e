//! Slot-level predicates: availability lookup and booking exclusion.

use crate::model::{AvailabilityRange, EngineerAvailability, ScheduledInterview, TimeSlot};
use crate::range::is_time_in_range;

/// Whether any range in `ranges` is on the slot's day and contains its time.
///
/// Ranges may overlap or come in any order; the first match short-circuits.
/// An empty list never matches.
pub fn is_slot_in_availability_ranges(slot: &TimeSlot, ranges: &[AvailabilityRange]) -> bool {
    ranges.iter().any(|range| {
        range.day == slot.day && is_time_in_range(&slot.time, &range.start_time, &range.end_time)
    })
}

/// Whether `engineer_id` already has an interview at exactly this slot.
///
/// The candidate on the existing booking does not matter: an engineer is never
/// double-booked. Slot times are compared as strings, not as clock values.
pub fn is_slot_scheduled(
    slot: &TimeSlot,
    engineer_id: &str,
    scheduled: &[ScheduledInterview],
) -> bool {
    scheduled
        .iter()
        .any(|interview| interview.engineer_id == engineer_id && interview.time_slot.same_slot(slot))
}

/// Whether both the candidate and the engineer are free at `slot`.
///
/// Bookings are not consulted; see [`is_slot_scheduled`].
pub fn is_slot_available(
    slot: &TimeSlot,
    candidate: &[AvailabilityRange],
    engineer: &[AvailabilityRange],
) -> bool {
    is_slot_in_availability_ranges(slot, candidate) && is_slot_in_availability_ranges(slot, engineer)
}

/// Ids of the engineers whose availability covers `slot`, in input order.
pub fn engineers_for_slot(slot: &TimeSlot, engineers: &[EngineerAvailability]) -> Vec<String> {
    engineers
        .iter()
        .filter(|engineer| is_slot_in_availability_ranges(slot, &engineer.availability))
        .map(|engineer| engineer.id.clone())
        .collect()
}
