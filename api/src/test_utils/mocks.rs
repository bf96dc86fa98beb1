//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.
//! Lists are kept in insertion order, matching what the PostgreSQL adapters
//! return.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    CheckIn, Member, MemberId, PeerReview, Project, ProjectId, Task, TaskId,
};
use crate::domain::ports::{
    CheckInRepository, MemberRepository, PeerReviewRepository, ProjectRepository, TaskRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Project Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a project for testing
    pub fn with_project(self, project: Project) -> Self {
        self.projects.write().unwrap().push(project);
        self
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().unwrap();
        Ok(projects.iter().find(|p| p.id == *id).cloned())
    }
}

// ============================================================================
// In-Memory Member Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<Vec<Member>>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with members for testing
    pub fn with_members(self, members: Vec<Member>) -> Self {
        self.members.write().unwrap().extend(members);
        self
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().unwrap();
        Ok(members.iter().find(|m| m.id == *id).cloned())
    }

    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Member>, DomainError> {
        let members = self.members.read().unwrap();
        Ok(members
            .iter()
            .filter(|m| m.project_id == *project_id)
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Task Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
    /// Tasks whose assignment write should fail
    failing: Arc<RwLock<HashSet<TaskId>>>,
    /// Number of assignment writes attempted
    writes: Arc<AtomicUsize>,
    unavailable: bool,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails, as if the database were down
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Pre-populate with tasks for testing
    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        self.tasks.write().unwrap().extend(tasks);
        self
    }

    /// Make the assignment write for one task fail
    pub fn failing_on(self, task_id: TaskId) -> Self {
        self.failing.write().unwrap().insert(task_id);
        self
    }

    /// Current state of all stored tasks
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.read().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Task>, DomainError> {
        if self.unavailable {
            return Err(DomainError::Database("connection refused".to_string()));
        }
        let tasks = self.tasks.read().unwrap();
        Ok(tasks
            .iter()
            .filter(|t| t.project_id == *project_id)
            .cloned()
            .collect())
    }

    async fn assign(&self, id: &TaskId, member_id: Option<&MemberId>) -> Result<(), DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        if self.unavailable || self.failing.read().unwrap().contains(id) {
            return Err(DomainError::Database(format!(
                "Failed to assign task {}",
                id
            )));
        }

        let mut tasks = self.tasks.write().unwrap();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == *id) {
            task.assigned_to = member_id.copied();
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("Task {} not found", id)))
        }
    }
}

// ============================================================================
// In-Memory Check-In Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCheckInRepository {
    check_ins: Arc<RwLock<Vec<CheckIn>>>,
}

impl InMemoryCheckInRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with check-ins for testing
    pub fn with_check_ins(self, check_ins: Vec<CheckIn>) -> Self {
        self.check_ins.write().unwrap().extend(check_ins);
        self
    }
}

#[async_trait]
impl CheckInRepository for InMemoryCheckInRepository {
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<CheckIn>, DomainError> {
        let check_ins = self.check_ins.read().unwrap();
        Ok(check_ins
            .iter()
            .filter(|c| c.project_id == *project_id)
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Peer Review Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPeerReviewRepository {
    reviews: Arc<RwLock<Vec<PeerReview>>>,
}

impl InMemoryPeerReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with peer reviews for testing
    pub fn with_reviews(self, reviews: Vec<PeerReview>) -> Self {
        self.reviews.write().unwrap().extend(reviews);
        self
    }
}

#[async_trait]
impl PeerReviewRepository for InMemoryPeerReviewRepository {
    async fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<PeerReview>, DomainError> {
        let reviews = self.reviews.read().unwrap();
        Ok(reviews
            .iter()
            .filter(|r| r.project_id == *project_id)
            .cloned()
            .collect())
    }
}
