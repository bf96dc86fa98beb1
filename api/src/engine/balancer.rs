//! Workload balancer
//!
//! Greedy list scheduling: every unassigned task, in its existing order, goes
//! to the eligible member with the smallest running load, and that member's
//! load grows by the task's hours before the next task is placed. Ties go to
//! whoever comes first in the member list. Sherpas are never eligible.
//!
//! This is the only part of the engine with side effects. Writes are issued
//! one at a time through `TaskRepository::assign`, each awaited before the next
//! member is chosen. A failed write is not retried; the batch carries on and
//! the failure is reported alongside the number of tasks actually written.

use thiserror::Error;

use crate::domain::entities::{Member, MemberId, Task, TaskId};
use crate::domain::ports::TaskRepository;
use crate::engine::effort::{or_zero, task_hours};
use crate::error::DomainError;

/// Running hours per eligible member, in eligibility order
#[derive(Debug, Clone, PartialEq)]
pub struct LoadLedger {
    loads: Vec<(MemberId, f64)>,
}

impl LoadLedger {
    /// Start from the hours already assigned to each eligible member
    pub fn seed(members: &[Member], tasks: &[Task]) -> Self {
        let loads = members
            .iter()
            .filter(|m| m.is_assignable())
            .map(|m| (m.id, task_hours(&m.id, tasks)))
            .collect();
        Self { loads }
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Member with the smallest load; the earliest one wins a tie
    pub fn least_loaded(&self) -> Option<MemberId> {
        let mut best: Option<(MemberId, f64)> = None;
        for &(id, load) in &self.loads {
            match best {
                Some((_, best_load)) if load >= best_load => {}
                _ => best = Some((id, load)),
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn add(&mut self, member_id: &MemberId, hours: f64) {
        if let Some(entry) = self.loads.iter_mut().find(|(id, _)| id == member_id) {
            entry.1 += or_zero(hours);
        }
    }

    pub fn load_of(&self, member_id: &MemberId) -> Option<f64> {
        self.loads
            .iter()
            .find(|(id, _)| id == member_id)
            .map(|(_, load)| *load)
    }
}

/// One task-to-member placement chosen by the balancer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedAssignment {
    pub task_id: TaskId,
    pub member_id: MemberId,
    pub hours: f64,
}

/// A write that the persistence store rejected
#[derive(Debug)]
pub struct AssignmentFailure {
    pub task_id: TaskId,
    pub error: DomainError,
}

/// Some assignment writes failed; `assigned` counts only the ones that landed
#[derive(Debug, Error)]
#[error(
    "{} task assignment(s) failed, {} written",
    .failures.len(),
    .assigned
)]
pub struct AutoAssignError {
    pub assigned: usize,
    pub failures: Vec<AssignmentFailure>,
}

/// Placements the balancer would make if every write succeeded
pub fn plan(tasks: &[Task], members: &[Member]) -> Vec<PlannedAssignment> {
    let mut ledger = LoadLedger::seed(members, tasks);
    let mut planned = Vec::new();

    for task in tasks.iter().filter(|t| t.is_unassigned()) {
        let Some(member_id) = ledger.least_loaded() else {
            break;
        };
        ledger.add(&member_id, task.hours);
        planned.push(PlannedAssignment {
            task_id: task.id,
            member_id,
            hours: or_zero(task.hours),
        });
    }

    planned
}

/// Assign every unassigned task to the least-loaded eligible member.
///
/// Returns the number of tasks written. A rejected write leaves that
/// member's load unchanged, since the task did not land on them.
pub async fn auto_assign<TR>(
    writer: &TR,
    tasks: &[Task],
    members: &[Member],
) -> Result<usize, AutoAssignError>
where
    TR: TaskRepository + ?Sized,
{
    let mut ledger = LoadLedger::seed(members, tasks);
    if ledger.is_empty() {
        tracing::debug!("No eligible members for auto-assign");
        return Ok(0);
    }

    let mut assigned = 0;
    let mut failures = Vec::new();

    for task in tasks.iter().filter(|t| t.is_unassigned()) {
        let Some(member_id) = ledger.least_loaded() else {
            break;
        };

        match writer.assign(&task.id, Some(&member_id)).await {
            Ok(()) => {
                ledger.add(&member_id, task.hours);
                assigned += 1;
                tracing::debug!(
                    task_id = %task.id,
                    member_id = %member_id,
                    hours = task.hours,
                    load = ledger.load_of(&member_id).unwrap_or_default(),
                    "Task auto-assigned"
                );
            }
            Err(error) => {
                tracing::warn!(
                    task_id = %task.id,
                    member_id = %member_id,
                    error = %error,
                    "Auto-assign write failed"
                );
                failures.push(AssignmentFailure {
                    task_id: task.id,
                    error,
                });
            }
        }
    }

    if failures.is_empty() {
        Ok(assigned)
    } else {
        Err(AutoAssignError { assigned, failures })
    }
}

/// User-facing summary of an auto-assign run
pub fn summary_message(assigned: usize) -> String {
    match assigned {
        0 => "No unassigned tasks to distribute".to_string(),
        n => format!("Auto-assigned {} tasks", n),
    }
}
