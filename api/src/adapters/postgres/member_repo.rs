//! PostgreSQL adapter for MemberRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{Member, MemberId, MemberRole, ProjectId};
use crate::domain::ports::MemberRepository;
use crate::entity::members;
use crate::error::DomainError;

/// PostgreSQL implementation of MemberRepository
pub struct PostgresMemberRepository {
    db: DatabaseConnection,
}

impl PostgresMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let result = members::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Member::try_from).transpose()
    }

    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Member>, DomainError> {
        let results = members::Entity::find()
            .filter(members::Column::ProjectId.eq(project_id.0))
            .order_by_asc(members::Column::CreatedAt)
            .order_by_asc(members::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Member::try_from).collect()
    }
}

/// Convert SeaORM model to domain entity
///
/// A missing role reads as a regular member; a role that does not parse is
/// rejected so it can never become eligible for assignment.
impl TryFrom<members::Model> for Member {
    type Error = DomainError;

    fn try_from(model: members::Model) -> Result<Self, Self::Error> {
        let role = match model.role {
            Some(r) => r.parse().map_err(|e: String| {
                DomainError::Database(format!("Member {}: {}", model.id, e))
            })?,
            None => MemberRole::Member,
        };

        Ok(Member {
            id: MemberId(model.id),
            project_id: ProjectId(model.project_id),
            name: model.name,
            manual_hours: model.manual_hours.unwrap_or(0.0),
            manual_tasks: model
                .manual_tasks
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            role,
            assigned_roles: model
                .assigned_roles
                .and_then(|v| serde_json::from_value::<BTreeSet<String>>(v).ok())
                .unwrap_or_default(),
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        })
    }
}
