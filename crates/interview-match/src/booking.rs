//! Append-only ledger of confirmed interviews.
//!
//! The matcher holds no state; the ledger is owned by the caller and its
//! snapshot is passed back into [`find_overlapping_slots`] on every query.
//! Confirming a booking re-runs the finder so a slot can only be taken while
//! it is still offered to that engineer.
//!
//! [`find_overlapping_slots`]: crate::overlap::find_overlapping_slots

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{MatchError, Result};
use crate::model::{InterviewDuration, ScheduledInterview, TimeSlot};
use crate::overlap::find_overlapping_slots;
use crate::roster::RosterSource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingLedger {
    interviews: Vec<ScheduledInterview>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ledger from a JSON array of scheduled interviews.
    ///
    /// # Errors
    /// Returns `MatchError::Json` on malformed JSON, `InvalidTime` if a slot
    /// time does not parse, and `NonCanonicalTime` if it is not written the
    /// way generated slots are (`"9:00"`, not `"09:00"`).
    pub fn from_json(json: &str) -> Result<Self> {
        let ledger: BookingLedger = serde_json::from_str(json)?;
        ledger
            .interviews
            .iter()
            .try_for_each(|interview| interview.time_slot.validate())?;
        Ok(ledger)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The current snapshot, in booking order.
    pub fn interviews(&self) -> &[ScheduledInterview] {
        &self.interviews
    }

    pub fn len(&self) -> usize {
        self.interviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interviews.is_empty()
    }

    /// Confirm an interview between `candidate_id` and `engineer_id` at `slot`.
    ///
    /// The slot time is normalized first, so `"09:00"` books the `"9:00"` slot.
    ///
    /// # Errors
    /// Returns `MatchError::InvalidTime` if the slot time does not parse,
    /// `MatchError::UnknownPerson` if either id is not in the roster,
    /// and `MatchError::SlotUnavailable` if the slot is not currently offered
    /// to that engineer for that candidate (outside either availability, or
    /// the engineer is already booked there).
    pub fn book(
        &mut self,
        roster: &impl RosterSource,
        candidate_id: &str,
        engineer_id: &str,
        slot: TimeSlot,
        duration: InterviewDuration,
    ) -> Result<&ScheduledInterview> {
        let slot = slot.normalized()?;
        let candidate = roster.candidate(candidate_id)?;
        let engineer = roster.engineer(engineer_id)?.as_engineer();

        let offered = find_overlapping_slots(
            &candidate.availability,
            std::slice::from_ref(&engineer),
            &self.interviews,
            duration,
        )
        .into_iter()
        .any(|overlap| overlap.time_slot.same_slot(&slot));

        if !offered {
            return Err(MatchError::SlotUnavailable(format!(
                "{engineer_id} is not available for {candidate_id} at {slot}"
            )));
        }

        info!(candidate_id, engineer_id, %slot, "interview booked");
        self.interviews.push(ScheduledInterview {
            candidate_id: candidate_id.to_string(),
            engineer_id: engineer_id.to_string(),
            time_slot: slot,
        });
        let booked = self.interviews.len() - 1;
        Ok(&self.interviews[booked])
    }
}
