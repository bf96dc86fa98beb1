//! Workload service
//!
//! Runs the greedy balancer against a project's unassigned tasks.

use std::sync::Arc;

use crate::domain::entities::ProjectId;
use crate::domain::ports::{MemberRepository, ProjectRepository, TaskRepository};
use crate::engine::{auto_assign, plan, summary_message, PlannedAssignment};
use crate::error::AppError;

/// Result of a successful auto-assign run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoAssignOutcome {
    pub assigned: usize,
    pub message: String,
}

/// Service for distributing unassigned tasks
pub struct WorkloadService<PR, MR, TR>
where
    PR: ProjectRepository,
    MR: MemberRepository,
    TR: TaskRepository,
{
    projects: Arc<PR>,
    members: Arc<MR>,
    tasks: Arc<TR>,
}

impl<PR, MR, TR> WorkloadService<PR, MR, TR>
where
    PR: ProjectRepository,
    MR: MemberRepository,
    TR: TaskRepository,
{
    pub fn new(projects: Arc<PR>, members: Arc<MR>, tasks: Arc<TR>) -> Self {
        Self {
            projects,
            members,
            tasks,
        }
    }

    /// Assign every unassigned task to the least-loaded eligible member
    ///
    /// A partially applied run surfaces as `AppError::Assignment`, which
    /// still carries the number of tasks that were written.
    pub async fn auto_assign(&self, project_id: &ProjectId) -> Result<AutoAssignOutcome, AppError> {
        self.ensure_project(project_id).await?;

        let (members, tasks) = tokio::try_join!(
            self.members.find_by_project(project_id),
            self.tasks.find_by_project(project_id),
        )?;

        let assigned = auto_assign(self.tasks.as_ref(), &tasks, &members).await?;

        tracing::info!(project_id = %project_id, assigned, "Auto-assign completed");

        Ok(AutoAssignOutcome {
            assigned,
            message: summary_message(assigned),
        })
    }

    /// The placements `auto_assign` would make, without writing anything
    pub async fn preview(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<PlannedAssignment>, AppError> {
        self.ensure_project(project_id).await?;

        let (members, tasks) = tokio::try_join!(
            self.members.find_by_project(project_id),
            self.tasks.find_by_project(project_id),
        )?;

        Ok(plan(&tasks, &members))
    }

    async fn ensure_project(&self, project_id: &ProjectId) -> Result<(), AppError> {
        match self.projects.find_by_id(project_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Project {} not found",
                project_id
            ))),
        }
    }
}
