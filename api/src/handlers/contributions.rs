//! Contribution ranking handler

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Badge, MemberRole, ProjectId};
use crate::engine::weights::round1;
use crate::engine::{
    ContributionReport, ContributionRow, FairnessStatus, IsoWeekLabel, ScoreBreakdown,
};
use crate::error::AppError;
use crate::handlers::{reference_date, DateQuery};
use crate::AppState;

/// Score channels, each rounded to one decimal
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub task_hours: f64,
    pub task_count: f64,
    pub work_logs: f64,
    pub check_ins: f64,
    pub peer_reviews: f64,
}

impl From<&ScoreBreakdown> for BreakdownResponse {
    fn from(b: &ScoreBreakdown) -> Self {
        BreakdownResponse {
            task_hours: round1(b.task_hours),
            task_count: round1(b.task_count),
            work_logs: round1(b.work_logs),
            check_ins: round1(b.check_ins),
            peer_reviews: round1(b.peer_reviews),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContributionRowResponse {
    pub rank: usize,
    pub member_id: String,
    pub name: String,
    pub role: MemberRole,
    pub score: f64,
    pub breakdown: BreakdownResponse,
    pub percentage: f64,
    pub streak_weeks: u32,
    pub badges: Vec<Badge>,
    pub logged_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct ContributionsResponse {
    pub project_id: String,
    /// ISO week the streaks were measured at
    pub week: String,
    pub status: FairnessStatus,
    pub total_effort: f64,
    pub members: Vec<ContributionRowResponse>,
}

impl From<&ContributionRow> for ContributionRowResponse {
    fn from(row: &ContributionRow) -> Self {
        ContributionRowResponse {
            rank: row.rank,
            member_id: row.member_id.to_string(),
            name: row.name.clone(),
            role: row.role,
            score: row.score,
            breakdown: (&row.breakdown).into(),
            percentage: round1(row.percentage),
            streak_weeks: row.streak_weeks,
            badges: row.badges.iter().cloned().collect(),
            logged_hours: round1(row.logged_hours),
        }
    }
}

impl ContributionsResponse {
    fn new(project_id: &ProjectId, week: IsoWeekLabel, report: &ContributionReport) -> Self {
        ContributionsResponse {
            project_id: project_id.to_string(),
            week: week.to_string(),
            status: report.status,
            total_effort: round1(report.total_effort),
            members: report.rows.iter().map(Into::into).collect(),
        }
    }
}

/// GET /projects/:id/contributions
///
/// Members ranked by contribution score, highest first.
pub async fn get_contributions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<ContributionsResponse>, AppError> {
    let project_id = ProjectId(id);
    let date = reference_date(query)?;
    let report = state
        .contribution_service
        .contributions(&project_id, date)
        .await?;

    Ok(Json(ContributionsResponse::new(
        &project_id,
        IsoWeekLabel::from_date(date),
        &report,
    )))
}
