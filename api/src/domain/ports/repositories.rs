//! Repository port traits
//!
//! These traits define the interface to the collaboration store.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//! The engine only reads snapshots; the single write it needs is
//! `TaskRepository::assign`.

use async_trait::async_trait;

use crate::domain::entities::{
    CheckIn, Member, MemberId, PeerReview, Project, ProjectId, Task, TaskId,
};
use crate::error::DomainError;

/// Repository for Project entities
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Find a project by ID
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;
}

/// Repository for Member entities
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find a member by ID
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError>;

    /// List members of a project, in join order
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Member>, DomainError>;
}

/// Repository for Task entities
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List tasks of a project (with their work logs), in creation order
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Task>, DomainError>;

    /// Set or clear the assignee of a single task
    async fn assign(&self, id: &TaskId, member_id: Option<&MemberId>) -> Result<(), DomainError>;
}

/// Repository for CheckIn entities
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// List every check-in posted in a project
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<CheckIn>, DomainError>;
}

/// Repository for PeerReview entities
#[async_trait]
pub trait PeerReviewRepository: Send + Sync {
    /// List every peer review recorded in a project
    async fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<PeerReview>, DomainError>;
}
