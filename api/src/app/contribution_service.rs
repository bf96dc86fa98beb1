//! Contribution service
//!
//! Loads a project's records through the repository ports and answers
//! fairness, scoring, streak and badge questions from the engine.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{Badge, Member, MemberId, ProjectId};
use crate::domain::ports::{
    CheckInRepository, MemberRepository, PeerReviewRepository, ProjectRepository, TaskRepository,
};
use crate::engine::{
    contribution_report, ContributionReport, FairnessReport, ProjectSnapshot, ScoreBreakdown,
};
use crate::error::AppError;

/// Service for read-only contribution analytics
pub struct ContributionService<PR, MR, TR, CR, RR>
where
    PR: ProjectRepository,
    MR: MemberRepository,
    TR: TaskRepository,
    CR: CheckInRepository,
    RR: PeerReviewRepository,
{
    projects: Arc<PR>,
    members: Arc<MR>,
    tasks: Arc<TR>,
    check_ins: Arc<CR>,
    peer_reviews: Arc<RR>,
}

impl<PR, MR, TR, CR, RR> ContributionService<PR, MR, TR, CR, RR>
where
    PR: ProjectRepository,
    MR: MemberRepository,
    TR: TaskRepository,
    CR: CheckInRepository,
    RR: PeerReviewRepository,
{
    pub fn new(
        projects: Arc<PR>,
        members: Arc<MR>,
        tasks: Arc<TR>,
        check_ins: Arc<CR>,
        peer_reviews: Arc<RR>,
    ) -> Self {
        Self {
            projects,
            members,
            tasks,
            check_ins,
            peer_reviews,
        }
    }

    /// Load everything the engine needs for one project
    pub async fn snapshot(&self, project_id: &ProjectId) -> Result<ProjectSnapshot, AppError> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))?;

        let (members, tasks, check_ins, peer_reviews) = tokio::try_join!(
            self.members.find_by_project(project_id),
            self.tasks.find_by_project(project_id),
            self.check_ins.find_by_project(project_id),
            self.peer_reviews.find_by_project(project_id),
        )?;

        tracing::debug!(
            project_id = %project_id,
            members = members.len(),
            tasks = tasks.len(),
            check_ins = check_ins.len(),
            peer_reviews = peer_reviews.len(),
            "Loaded project snapshot"
        );

        Ok(ProjectSnapshot {
            project,
            members,
            tasks,
            check_ins,
            peer_reviews,
        })
    }

    /// Effort shares and balance status for a project
    pub async fn fairness(&self, project_id: &ProjectId) -> Result<FairnessReport, AppError> {
        let snapshot = self.snapshot(project_id).await?;
        let report = snapshot.fairness();

        tracing::info!(
            project_id = %project_id,
            project = %snapshot.project.name,
            status = %report.status,
            total_effort = report.total_effort,
            "Fairness classified"
        );

        Ok(report)
    }

    /// Ranked contribution rows for every member
    pub async fn contributions(
        &self,
        project_id: &ProjectId,
        reference_date: NaiveDate,
    ) -> Result<ContributionReport, AppError> {
        let snapshot = self.snapshot(project_id).await?;
        Ok(contribution_report(&snapshot, reference_date))
    }

    /// Composite score with its per-channel breakdown
    pub async fn member_score(
        &self,
        project_id: &ProjectId,
        member_id: &MemberId,
    ) -> Result<(Member, ScoreBreakdown), AppError> {
        let (snapshot, member) = self.member_snapshot(project_id, member_id).await?;
        let breakdown = snapshot.score_breakdown(&member);
        Ok((member, breakdown))
    }

    /// Consecutive check-in weeks ending at the reference date's week
    pub async fn member_streak(
        &self,
        project_id: &ProjectId,
        member_id: &MemberId,
        reference_date: NaiveDate,
    ) -> Result<u32, AppError> {
        let (snapshot, member) = self.member_snapshot(project_id, member_id).await?;
        Ok(snapshot.streak(&member.id, reference_date))
    }

    pub async fn member_badges(
        &self,
        project_id: &ProjectId,
        member_id: &MemberId,
        reference_date: NaiveDate,
    ) -> Result<BTreeSet<Badge>, AppError> {
        let (snapshot, member) = self.member_snapshot(project_id, member_id).await?;
        Ok(snapshot.badges(&member, reference_date))
    }

    /// Resolve a member of the project, then load the project snapshot.
    ///
    /// A member of another project is reported as not found.
    async fn member_snapshot(
        &self,
        project_id: &ProjectId,
        member_id: &MemberId,
    ) -> Result<(ProjectSnapshot, Member), AppError> {
        let member = self
            .members
            .find_by_id(member_id)
            .await?
            .filter(|m| m.project_id == *project_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Member {} not found in project {}",
                    member_id, project_id
                ))
            })?;

        let snapshot = self.snapshot(project_id).await?;
        Ok((snapshot, member))
    }
}
