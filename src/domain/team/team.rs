use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::member::Member;

/// Errors raised while building or updating a team
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeamError {
    #[error("a team requires at least one member")]
    EmptyComposition,

    #[error("the team date cannot be before today")]
    DateInPast,

    #[error("one or more member ids do not resolve to a registered member")]
    UnknownMembers,
}

/// The join record linking one team to one member
///
/// Has no lifecycle of its own: entries are created when a team is built
/// from resolved members and replaced wholesale when the team is updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionEntry {
    member: Member,
}

impl CompositionEntry {
    pub fn new(member: Member) -> Self {
        Self { member }
    }

    pub fn member(&self) -> &Member {
        &self.member
    }
}

/// Team aggregate root
///
/// A date-associated grouping of members. The team exclusively owns its
/// composition entries; members are referenced by snapshot, resolved at
/// composition-building time.
///
/// # Invariants
/// - The composition is never empty
/// - Every entry references a member that existed when the composition
///   was built (unresolved ids fail the whole operation, no partial team)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    id: Uuid,
    date: NaiveDate,
    composition: Vec<CompositionEntry>,
}

impl Team {
    /// Creates a new team for `date` from already-resolved members
    ///
    /// # Business Rules Enforced
    /// - The member list must not be empty
    /// - The date must not be before today
    pub fn new(date: NaiveDate, members: Vec<Member>) -> Result<Self, TeamError> {
        if members.is_empty() {
            return Err(TeamError::EmptyComposition);
        }

        if date < Utc::now().date_naive() {
            return Err(TeamError::DateInPast);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            composition: members.into_iter().map(CompositionEntry::new).collect(),
        })
    }

    /// Replaces the team's date and entire composition
    ///
    /// Update does not re-check the past-date rule; only creation does.
    pub fn update(&mut self, date: NaiveDate, members: Vec<Member>) -> Result<(), TeamError> {
        if members.is_empty() {
            return Err(TeamError::EmptyComposition);
        }

        self.date = date;
        self.composition = members.into_iter().map(CompositionEntry::new).collect();

        Ok(())
    }

    /// Reconstructs a team from stored data, bypassing creation rules
    ///
    /// Only for repository implementations and test fixtures; the data is
    /// assumed to have been validated when first created.
    pub fn from_parts(id: Uuid, date: NaiveDate, members: Vec<Member>) -> Self {
        Self {
            id,
            date,
            composition: members.into_iter().map(CompositionEntry::new).collect(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn composition(&self) -> &[CompositionEntry] {
        &self.composition
    }

    /// Member names in composition order
    pub fn member_names(&self) -> Vec<String> {
        self.composition
            .iter()
            .map(|entry| entry.member().name.clone())
            .collect()
    }

    /// Sorted member ids, used to decide whether two teams field the same
    /// line-up regardless of entry order
    pub fn composition_signature(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self
            .composition
            .iter()
            .map(|entry| entry.member().id)
            .collect();
        ids.sort_unstable();
        ids
    }
}
