//! Task domain entity
//!
//! A unit of project work with an hour estimate, an optional assignee and an
//! ordered log of work notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::member::MemberId;
use super::project::ProjectId;

/// Unique identifier for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TaskId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in-progress"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" | "in_progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            _ => Err(format!("Unknown task status: {}", s)),
        }
    }
}

/// A note left on a task by whoever worked on it
#[derive(Debug, Clone, Serialize)]
pub struct WorkLog {
    /// Display name of the member who wrote the entry
    pub author: String,
    pub text: String,
    pub hours_spent: Option<f64>,
}

impl WorkLog {
    /// Hours spent, with a missing value counted as zero
    pub fn hours(&self) -> f64 {
        self.hours_spent.unwrap_or(0.0)
    }
}

/// A project task
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub title: String,
    /// Member currently responsible for this task
    pub assigned_to: Option<MemberId>,
    /// Estimated hours
    pub hours: f64,
    pub status: TaskStatus,
    pub work_logs: Vec<WorkLog>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Check if the task has no assignee
    pub fn is_unassigned(&self) -> bool {
        self.assigned_to.is_none()
    }

    /// Check if the task is assigned to a specific member
    pub fn is_assigned_to(&self, member_id: &MemberId) -> bool {
        self.assigned_to.as_ref() == Some(member_id)
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Work logs written by the named author
    pub fn logs_by<'a>(&'a self, author: &'a str) -> impl Iterator<Item = &'a WorkLog> + 'a {
        self.work_logs.iter().filter(move |log| log.author == author)
    }
}
