//! Candidate and engineer roster: the data source the matcher reads from.
//!
//! [`RosterSource`] is the seam for wherever people records come from. The
//! in-memory [`Roster`] implements it and can be loaded from JSON or built
//! from the bundled sample data.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::model::{AvailabilityRange, DayOfWeek, EngineerAvailability, Person};

/// Anything that can list candidates and engineers.
pub trait RosterSource {
    fn candidates(&self) -> &[Person];
    fn engineers(&self) -> &[Person];

    fn candidate(&self, id: &str) -> Result<&Person> {
        self.candidates()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| MatchError::UnknownPerson {
                kind: "candidate",
                id: id.to_string(),
            })
    }

    fn engineer(&self, id: &str) -> Result<&Person> {
        self.engineers()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| MatchError::UnknownPerson {
                kind: "engineer",
                id: id.to_string(),
            })
    }

    /// Engineers in roster order, optionally restricted to `ids`.
    ///
    /// An empty `ids` selects every engineer. Unknown ids are an error so a
    /// typo in a filter never widens or empties the result silently.
    fn engineer_filter(&self, ids: &[String]) -> Result<Vec<EngineerAvailability>> {
        for id in ids {
            self.engineer(id)?;
        }
        Ok(self
            .engineers()
            .iter()
            .filter(|e| ids.is_empty() || ids.contains(&e.id))
            .map(Person::as_engineer)
            .collect())
    }
}

/// An in-memory roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub candidates: Vec<Person>,
    #[serde(default)]
    pub engineers: Vec<Person>,
}

impl RosterSource for Roster {
    fn candidates(&self) -> &[Person] {
        &self.candidates
    }

    fn engineers(&self) -> &[Person] {
        &self.engineers
    }
}

impl Roster {
    /// Parse and validate a roster from a JSON string.
    ///
    /// # Errors
    /// Returns `MatchError::Json` on malformed JSON, `DuplicateId` if two
    /// candidates or two engineers share an id, and `InvalidTime` /
    /// `InvalidRange` if any availability range is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every availability range, and that ids are unique within
    /// candidates and within engineers.
    pub fn validate(&self) -> Result<()> {
        unique_ids(&self.candidates, "candidate")?;
        unique_ids(&self.engineers, "engineer")?;
        self.candidates
            .iter()
            .chain(&self.engineers)
            .try_for_each(Person::validate)
    }

    /// Three engineers and four candidates with a spread of weekly availability.
    pub fn sample() -> Self {
        use DayOfWeek::*;

        Self {
            engineers: vec![
                person(
                    "eng1",
                    "Alex Johnson",
                    None,
                    &[
                        (Monday, "9:00", "12:00"),
                        (Monday, "14:00", "17:00"),
                        (Tuesday, "9:00", "15:00"),
                        (Wednesday, "13:00", "18:00"),
                        (Thursday, "9:00", "12:00"),
                        (Friday, "9:00", "18:00"),
                    ],
                ),
                person(
                    "eng2",
                    "Sarah Chen",
                    None,
                    &[
                        (Monday, "11:00", "18:00"),
                        (Tuesday, "14:00", "18:00"),
                        (Wednesday, "9:00", "12:00"),
                        (Thursday, "13:00", "18:00"),
                        (Friday, "9:00", "15:00"),
                    ],
                ),
                person(
                    "eng3",
                    "Michael Rodriguez",
                    None,
                    &[
                        (Monday, "9:00", "15:00"),
                        (Tuesday, "9:00", "12:00"),
                        (Tuesday, "14:00", "18:00"),
                        (Wednesday, "9:00", "18:00"),
                        (Thursday, "9:00", "15:00"),
                        (Friday, "13:00", "18:00"),
                    ],
                ),
            ],
            candidates: vec![
                person(
                    "cand1",
                    "Emma Wilson",
                    Some("Tuesday 2-5 PM"),
                    &[(Tuesday, "14:00", "17:00")],
                ),
                person(
                    "cand2",
                    "David Kim",
                    Some("Monday & Wednesday afternoons"),
                    &[(Monday, "13:00", "18:00"), (Wednesday, "13:00", "18:00")],
                ),
                person(
                    "cand3",
                    "Priya Patel",
                    Some("Thursday & Friday mornings"),
                    &[(Thursday, "9:00", "12:00"), (Friday, "9:00", "12:00")],
                ),
                person(
                    "cand4",
                    "James Thompson",
                    Some("Any day between 10 AM - 2 PM"),
                    &DayOfWeek::ALL.map(|day| (day, "10:00", "14:00")),
                ),
            ],
        }
    }
}

fn unique_ids(people: &[Person], kind: &'static str) -> Result<()> {
    let mut seen = HashSet::new();
    match people.iter().find(|p| !seen.insert(p.id.as_str())) {
        Some(dup) => Err(MatchError::DuplicateId {
            kind,
            id: dup.id.clone(),
        }),
        None => Ok(()),
    }
}

fn person(
    id: &str,
    name: &str,
    preferred: Option<&str>,
    ranges: &[(DayOfWeek, &str, &str)],
) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        preferred_time_description: preferred.map(str::to_string),
        availability: ranges
            .iter()
            .map(|&(day, start, end)| AvailabilityRange {
                day,
                start_time: start.to_string(),
                end_time: end.to_string(),
            })
            .collect(),
    }
}
