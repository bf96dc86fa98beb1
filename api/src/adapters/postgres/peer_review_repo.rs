//! PostgreSQL adapter for PeerReviewRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{
    MemberId, PeerReview, PeerReviewId, ProjectId, MAX_PEER_SCORE, MIN_PEER_SCORE,
};
use crate::domain::ports::PeerReviewRepository;
use crate::entity::peer_reviews;
use crate::error::DomainError;

/// PostgreSQL implementation of PeerReviewRepository
pub struct PostgresPeerReviewRepository {
    db: DatabaseConnection,
}

impl PostgresPeerReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PeerReviewRepository for PostgresPeerReviewRepository {
    async fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<PeerReview>, DomainError> {
        let results = peer_reviews::Entity::find()
            .filter(peer_reviews::Column::ProjectId.eq(project_id.0))
            .order_by_asc(peer_reviews::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
///
/// Scores are clamped into the 1-5 rating scale.
impl From<peer_reviews::Model> for PeerReview {
    fn from(model: peer_reviews::Model) -> Self {
        let score = model
            .score
            .clamp(i16::from(MIN_PEER_SCORE), i16::from(MAX_PEER_SCORE)) as u8;

        PeerReview {
            id: PeerReviewId(model.id),
            project_id: ProjectId(model.project_id),
            reviewer_id: MemberId(model.reviewer_id),
            reviewed_member_id: MemberId(model.reviewed_member_id),
            score,
            week_of: model.week_of,
        }
    }
}
