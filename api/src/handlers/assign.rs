//! Auto-assign handlers
//!
//! Distributes a project's unassigned tasks across eligible members.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::app::AutoAssignOutcome;
use crate::domain::entities::ProjectId;
use crate::engine::PlannedAssignment;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AutoAssignResponse {
    pub assigned: usize,
    pub message: String,
}

impl From<AutoAssignOutcome> for AutoAssignResponse {
    fn from(outcome: AutoAssignOutcome) -> Self {
        AutoAssignResponse {
            assigned: outcome.assigned,
            message: outcome.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlannedAssignmentResponse {
    pub task_id: String,
    pub member_id: String,
    pub hours: f64,
}

impl From<&PlannedAssignment> for PlannedAssignmentResponse {
    fn from(p: &PlannedAssignment) -> Self {
        PlannedAssignmentResponse {
            task_id: p.task_id.to_string(),
            member_id: p.member_id.to_string(),
            hours: p.hours,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub assignments: Vec<PlannedAssignmentResponse>,
}

/// POST /projects/:id/auto-assign
///
/// A partially applied run returns 502 with the number of tasks written.
pub async fn auto_assign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AutoAssignResponse>, AppError> {
    let outcome = state.workload_service.auto_assign(&ProjectId(id)).await?;
    Ok(Json(outcome.into()))
}

/// GET /projects/:id/auto-assign/preview
pub async fn preview_auto_assign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewResponse>, AppError> {
    let planned = state.workload_service.preview(&ProjectId(id)).await?;

    Ok(Json(PreviewResponse {
        assignments: planned.iter().map(Into::into).collect(),
    }))
}
