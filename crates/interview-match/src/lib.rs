//! # interview-match
//!
//! Deterministic matching of a candidate's weekly availability against
//! several engineers' availability to find bookable interview slots.
//!
//! The matcher is a set of pure functions: it discretizes the work week into
//! fixed slots, keeps the slots inside the candidate's availability, and lists
//! for each one the engineers who are free there and not already booked.
//! Inputs are borrowed and never mutated; nothing is cached between calls.
//!
//! ## Quick start
//!
//! ```rust
//! use interview_match::{
//!     find_overlapping_slots, AvailabilityRange, DayOfWeek, EngineerAvailability,
//!     InterviewDuration,
//! };
//!
//! let candidate = vec![AvailabilityRange::new(DayOfWeek::Monday, "10:00", "11:00").unwrap()];
//! let engineers = vec![EngineerAvailability::new(
//!     "eng1",
//!     vec![AvailabilityRange::new(DayOfWeek::Monday, "9:00", "12:00").unwrap()],
//! )];
//!
//! let slots = find_overlapping_slots(&candidate, &engineers, &[], InterviewDuration::default());
//! assert_eq!(slots.len(), 2);
//! assert_eq!(slots[0].time_slot.time, "10:00");
//! assert_eq!(slots[1].available_engineers, ["eng1"]);
//! ```
//!
//! ## Modules
//!
//! - [`slots`] — Slot universe generation and grid configuration
//! - [`range`] — Half-open time range containment on clock strings
//! - [`matcher`] — Availability and booking predicates for a single slot
//! - [`overlap`] — The overlap finder
//! - [`roster`] — Candidate/engineer data source
//! - [`booking`] — Append-only ledger of confirmed interviews
//! - [`format`] — 12-hour display formatting
//! - [`model`] — Shared data types
//! - [`error`] — Error types

pub mod booking;
pub mod error;
pub mod format;
pub mod matcher;
pub mod model;
pub mod overlap;
pub mod range;
pub mod roster;
pub mod slots;

pub use booking::BookingLedger;
pub use error::MatchError;
pub use format::{day_name, format_time, format_time_slot};
pub use matcher::{
    engineers_for_slot, is_slot_available, is_slot_in_availability_ranges, is_slot_scheduled,
};
pub use model::{
    AvailabilityRange, ClockTime, DayOfWeek, EngineerAvailability, InterviewDuration,
    OverlapSlot, Person, ScheduledInterview, TimeSlot,
};
pub use overlap::{
    find_overlapping_slots, find_overlapping_slots_positional, find_overlapping_slots_with,
};
pub use range::{convert_time_to_minutes, is_time_in_range};
pub use roster::{Roster, RosterSource};
pub use slots::{generate_slot_universe, SlotConfig};
