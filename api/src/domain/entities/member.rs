//! Member domain entity
//!
//! A person participating in a group project. Manual hours and tasks are
//! self-reported credit on top of whatever the task board records.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::project::ProjectId;

/// Unique identifier for a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub Uuid);

impl MemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MemberId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role a member holds within the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Regular contributor who executes tasks
    Member,
    /// Coordinator; never receives auto-assigned execution work
    Sherpa,
}

impl MemberRole {
    /// Whether the workload balancer may hand this role unclaimed tasks.
    ///
    /// Exhaustive on purpose: a new role has to opt in here explicitly.
    pub fn is_assignable(&self) -> bool {
        match self {
            MemberRole::Member => true,
            MemberRole::Sherpa => false,
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Member => write!(f, "member"),
            MemberRole::Sherpa => write!(f, "sherpa"),
        }
    }
}

impl std::str::FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "member" => Ok(MemberRole::Member),
            "sherpa" => Ok(MemberRole::Sherpa),
            _ => Err(format!("Unknown member role: {}", s)),
        }
    }
}

/// A project member
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub project_id: ProjectId,
    pub name: String,
    /// Self-reported hours not tied to any task
    pub manual_hours: f64,
    /// Self-reported tasks completed outside the task board
    pub manual_tasks: u32,
    pub role: MemberRole,
    /// Functional tags such as "frontend" or "docs"; informational only
    pub assigned_roles: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Check if this member can receive auto-assigned tasks
    pub fn is_assignable(&self) -> bool {
        self.role.is_assignable()
    }
}
