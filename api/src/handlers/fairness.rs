//! Fairness handlers
//!
//! Effort shares per member and the team balance verdict.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::ProjectId;
use crate::engine::weights::round1;
use crate::engine::{FairnessReport, FairnessStatus, MemberShare};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MemberShareResponse {
    pub member_id: String,
    pub name: String,
    pub task_hours: f64,
    pub manual_hours: f64,
    pub manual_tasks: u32,
    pub total_effort: f64,
    /// Rounded to one decimal
    pub percentage: f64,
    /// e.g. "65.8%"
    pub display_percentage: String,
}

#[derive(Debug, Serialize)]
pub struct FairnessResponse {
    pub project_id: String,
    pub status: FairnessStatus,
    pub total_effort: f64,
    pub members: Vec<MemberShareResponse>,
}

impl From<&MemberShare> for MemberShareResponse {
    fn from(share: &MemberShare) -> Self {
        MemberShareResponse {
            member_id: share.member_id.to_string(),
            name: share.name.clone(),
            task_hours: round1(share.task_hours),
            manual_hours: round1(share.manual_hours),
            manual_tasks: share.manual_tasks,
            total_effort: round1(share.total_effort),
            percentage: round1(share.percentage),
            display_percentage: share.display_percentage(),
        }
    }
}

impl FairnessResponse {
    fn new(project_id: &ProjectId, report: &FairnessReport) -> Self {
        FairnessResponse {
            project_id: project_id.to_string(),
            status: report.status,
            total_effort: round1(report.total_effort),
            members: report.per_member.iter().map(Into::into).collect(),
        }
    }
}

/// GET /projects/:id/fairness
pub async fn get_fairness(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FairnessResponse>, AppError> {
    let project_id = ProjectId(id);
    let report = state.contribution_service.fairness(&project_id).await?;

    Ok(Json(FairnessResponse::new(&project_id, &report)))
}
