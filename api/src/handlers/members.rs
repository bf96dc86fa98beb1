//! Per-member handlers: score, streak and badges

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Badge, MemberId, ProjectId};
use crate::engine::IsoWeekLabel;
use crate::error::AppError;
use crate::handlers::contributions::BreakdownResponse;
use crate::handlers::{reference_date, DateQuery};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MemberScoreResponse {
    pub member_id: String,
    pub name: String,
    pub score: f64,
    pub breakdown: BreakdownResponse,
}

#[derive(Debug, Serialize)]
pub struct StreakResponse {
    pub member_id: String,
    pub week: String,
    pub streak_weeks: u32,
}

#[derive(Debug, Serialize)]
pub struct BadgesResponse {
    pub member_id: String,
    pub badges: Vec<Badge>,
}

/// GET /projects/:id/members/:member_id/score
pub async fn get_member_score(
    State(state): State<AppState>,
    Path((project_id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MemberScoreResponse>, AppError> {
    let (member, breakdown) = state
        .contribution_service
        .member_score(&ProjectId(project_id), &MemberId(member_id))
        .await?;

    Ok(Json(MemberScoreResponse {
        member_id: member.id.to_string(),
        name: member.name,
        score: breakdown.total(),
        breakdown: (&breakdown).into(),
    }))
}

/// GET /projects/:id/members/:member_id/streak
pub async fn get_member_streak(
    State(state): State<AppState>,
    Path((project_id, member_id)): Path<(Uuid, Uuid)>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<StreakResponse>, AppError> {
    let date = reference_date(query)?;
    let streak_weeks = state
        .contribution_service
        .member_streak(&ProjectId(project_id), &MemberId(member_id), date)
        .await?;

    Ok(Json(StreakResponse {
        member_id: member_id.to_string(),
        week: IsoWeekLabel::from_date(date).to_string(),
        streak_weeks,
    }))
}

/// GET /projects/:id/members/:member_id/badges
pub async fn get_member_badges(
    State(state): State<AppState>,
    Path((project_id, member_id)): Path<(Uuid, Uuid)>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<BadgesResponse>, AppError> {
    let badges = state
        .contribution_service
        .member_badges(
            &ProjectId(project_id),
            &MemberId(member_id),
            reference_date(query)?,
        )
        .await?;

    Ok(Json(BadgesResponse {
        member_id: member_id.to_string(),
        badges: badges.into_iter().collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BadgeType;

    #[test]
    fn serialize_streak_response() {
        let response = StreakResponse {
            member_id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
            week: "2026-W07".to_string(),
            streak_weeks: 3,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""streak_weeks":3"#));
        assert!(json.contains("2026-W07"));
    }

    #[test]
    fn serialize_badges_response() {
        let response = BadgesResponse {
            member_id: "m1".to_string(),
            badges: vec![BadgeType::TeamPlayer.into()],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["badges"][0]["type"], "team-player");
        assert_eq!(json["badges"][0]["label"], "Team Player");
        assert!(json["badges"][0]["description"].is_string());
    }

    #[test]
    fn empty_badge_list_serializes_as_array() {
        let response = BadgesResponse {
            member_id: "m1".to_string(),
            badges: vec![],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""badges":[]"#));
    }
}
