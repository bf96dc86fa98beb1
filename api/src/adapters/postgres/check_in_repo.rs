//! PostgreSQL adapter for CheckInRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{CheckIn, CheckInId, MemberId, ProjectId};
use crate::domain::ports::CheckInRepository;
use crate::entity::check_ins;
use crate::error::DomainError;

/// PostgreSQL implementation of CheckInRepository
pub struct PostgresCheckInRepository {
    db: DatabaseConnection,
}

impl PostgresCheckInRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckInRepository for PostgresCheckInRepository {
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<CheckIn>, DomainError> {
        let results = check_ins::Entity::find()
            .filter(check_ins::Column::ProjectId.eq(project_id.0))
            .order_by_asc(check_ins::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<check_ins::Model> for CheckIn {
    fn from(model: check_ins::Model) -> Self {
        CheckIn {
            id: CheckInId(model.id),
            project_id: ProjectId(model.project_id),
            member_id: MemberId(model.member_id),
            week_of: model.week_of,
            accomplishments: model.accomplishments.unwrap_or_default(),
            blockers: model.blockers.unwrap_or_default(),
            next_steps: model.next_steps.unwrap_or_default(),
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
