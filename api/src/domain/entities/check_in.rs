//! Check-in domain entity
//!
//! A weekly reflection posted by a member. Several check-ins in the same
//! week are allowed; scoring only cares whether a week has at least one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::member::MemberId;
use super::project::ProjectId;

/// Unique identifier for a check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckInId(pub Uuid);

impl CheckInId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CheckInId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CheckInId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CheckInId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weekly check-in
#[derive(Debug, Clone, Serialize)]
pub struct CheckIn {
    pub id: CheckInId,
    pub project_id: ProjectId,
    pub member_id: MemberId,
    /// ISO week label, e.g. "2026-W07"
    pub week_of: String,
    pub accomplishments: String,
    pub blockers: String,
    pub next_steps: String,
    pub created_at: DateTime<Utc>,
}
