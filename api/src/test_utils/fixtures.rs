//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use std::collections::BTreeSet;

use chrono::Utc;

use crate::domain::entities::{
    CheckIn, CheckInId, Member, MemberId, MemberRole, PeerReview, PeerReviewId, Project,
    ProjectId, Task, TaskId, TaskStatus, WorkLog,
};

/// Create a test project with default values
pub fn test_project() -> Project {
    Project {
        id: ProjectId::new(),
        name: "Capstone".to_string(),
        created_at: Utc::now(),
    }
}

/// Create a regular member of a project with no self-reported work
pub fn test_member_in(project_id: ProjectId, name: &str) -> Member {
    Member {
        id: MemberId::new(),
        project_id,
        name: name.to_string(),
        manual_hours: 0.0,
        manual_tasks: 0,
        role: MemberRole::Member,
        assigned_roles: BTreeSet::new(),
        created_at: Utc::now(),
    }
}

/// Create a member with self-reported hours and tasks
pub fn test_member_with_manual(name: &str, manual_hours: f64, manual_tasks: u32) -> Member {
    Member {
        manual_hours,
        manual_tasks,
        ..test_member_in(ProjectId::new(), name)
    }
}

/// Create a todo task with the given assignee and estimate
pub fn test_task(project_id: ProjectId, assigned_to: Option<MemberId>, hours: f64) -> Task {
    Task {
        id: TaskId::new(),
        project_id,
        title: format!("Task ({}h)", hours),
        assigned_to,
        hours,
        status: TaskStatus::Todo,
        work_logs: vec![],
        created_at: Utc::now(),
    }
}

/// Create a task that already has work logs
pub fn test_task_with_logs(
    project_id: ProjectId,
    assigned_to: Option<MemberId>,
    hours: f64,
    work_logs: Vec<WorkLog>,
) -> Task {
    Task {
        work_logs,
        ..test_task(project_id, assigned_to, hours)
    }
}

/// Create a work log entry with no hours recorded
pub fn test_work_log(author: &str) -> WorkLog {
    WorkLog {
        author: author.to_string(),
        text: "Worked on it".to_string(),
        hours_spent: None,
    }
}

/// Create a check-in for the given ISO week label
pub fn test_check_in(project_id: ProjectId, member_id: MemberId, week_of: &str) -> CheckIn {
    CheckIn {
        id: CheckInId::new(),
        project_id,
        member_id,
        week_of: week_of.to_string(),
        accomplishments: "Finished the survey".to_string(),
        blockers: String::new(),
        next_steps: "Start the analysis".to_string(),
        created_at: Utc::now(),
    }
}

/// Create a peer review
pub fn test_peer_review(
    project_id: ProjectId,
    reviewer_id: MemberId,
    reviewed_member_id: MemberId,
    score: u8,
) -> PeerReview {
    PeerReview {
        id: PeerReviewId::new(),
        project_id,
        reviewer_id,
        reviewed_member_id,
        score,
        week_of: "2026-W07".to_string(),
    }
}
