//! Effort model
//!
//! A member's effort is the estimated hours of their assigned tasks plus
//! whatever they self-reported: manual hours count one-for-one and each
//! manual task is worth half an hour.

use crate::domain::entities::{Member, MemberId, Task};
use crate::engine::weights::MANUAL_TASK_HOURS;

/// Effort split into its components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Effort {
    pub task_hours: f64,
    pub manual_hours: f64,
    pub manual_tasks: u32,
}

impl Effort {
    /// Self-reported credit in hour-equivalents
    pub fn manual_contribution(&self) -> f64 {
        self.manual_hours + f64::from(self.manual_tasks) * MANUAL_TASK_HOURS
    }

    pub fn total(&self) -> f64 {
        self.task_hours + self.manual_contribution()
    }
}

/// Sum of estimated hours over tasks assigned to a member
pub fn task_hours(member_id: &MemberId, tasks: &[Task]) -> f64 {
    tasks
        .iter()
        .filter(|t| t.is_assigned_to(member_id))
        .map(|t| or_zero(t.hours))
        .sum()
}

/// Effort breakdown for a single member
pub fn effort_of(member: &Member, tasks: &[Task]) -> Effort {
    Effort {
        task_hours: task_hours(&member.id, tasks),
        manual_hours: or_zero(member.manual_hours),
        manual_tasks: member.manual_tasks,
    }
}

/// Total effort for a single member
#[allow(dead_code)]
pub fn effort(member: &Member, tasks: &[Task]) -> f64 {
    effort_of(member, tasks).total()
}

/// NaN is read as a missing value.
pub(crate) fn or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}
