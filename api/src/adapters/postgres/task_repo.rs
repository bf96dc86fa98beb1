//! PostgreSQL adapter for TaskRepository
//!
//! Work logs live in their own table and are attached to their task after
//! loading, in `position` order.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{MemberId, ProjectId, Task, TaskId, TaskStatus, WorkLog};
use crate::domain::ports::TaskRepository;
use crate::entity::{tasks, work_logs};
use crate::error::DomainError;

/// PostgreSQL implementation of TaskRepository
pub struct PostgresTaskRepository {
    db: DatabaseConnection,
}

impl PostgresTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the work logs of the given tasks, grouped by task
    async fn work_logs_for(
        &self,
        task_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<WorkLog>>, DomainError> {
        if task_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = work_logs::Entity::find()
            .filter(work_logs::Column::TaskId.is_in(task_ids))
            .order_by_asc(work_logs::Column::TaskId)
            .order_by_asc(work_logs::Column::Position)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut grouped: HashMap<Uuid, Vec<WorkLog>> = HashMap::new();
        for row in rows {
            grouped.entry(row.task_id).or_default().push(row.into());
        }
        Ok(grouped)
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Task>, DomainError> {
        let models = tasks::Entity::find()
            .filter(tasks::Column::ProjectId.eq(project_id.0))
            .order_by_asc(tasks::Column::CreatedAt)
            .order_by_asc(tasks::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut logs = self
            .work_logs_for(models.iter().map(|m| m.id).collect())
            .await?;

        models
            .into_iter()
            .map(|model| {
                let work_logs = logs.remove(&model.id).unwrap_or_default();
                Ok::<_, DomainError>(Task {
                    work_logs,
                    ..Task::try_from(model)?
                })
            })
            .collect()
    }

    async fn assign(&self, id: &TaskId, member_id: Option<&MemberId>) -> Result<(), DomainError> {
        tasks::ActiveModel {
            id: Set(id.0),
            assigned_to: Set(member_id.map(|m| m.0)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(format!("Task {} not found", id)),
            e => DomainError::Database(e.to_string()),
        })?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity, without its work logs
impl TryFrom<tasks::Model> for Task {
    type Error = DomainError;

    fn try_from(model: tasks::Model) -> Result<Self, Self::Error> {
        let status = match model.status {
            Some(s) => s.parse().map_err(|e: String| {
                DomainError::Database(format!("Task {}: {}", model.id, e))
            })?,
            None => TaskStatus::Todo,
        };

        Ok(Task {
            id: TaskId(model.id),
            project_id: ProjectId(model.project_id),
            title: model.title,
            assigned_to: model.assigned_to.map(MemberId),
            hours: model.hours.unwrap_or(0.0),
            status,
            work_logs: vec![],
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        })
    }
}

/// Convert SeaORM model to domain value
impl From<work_logs::Model> for WorkLog {
    fn from(model: work_logs::Model) -> Self {
        WorkLog {
            author: model.author,
            text: model.text,
            hours_spent: model.hours_spent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> tasks::Model {
        tasks::Model {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            title: "Write report".to_string(),
            assigned_to: None,
            hours: None,
            status: None,
            created_at: None,
        }
    }

    #[test]
    fn missing_columns_fall_back_to_defaults() {
        let task = Task::try_from(model()).unwrap();

        assert!(task.is_unassigned());
        assert_eq!(task.hours, 0.0);
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.work_logs.is_empty());
    }

    #[test]
    fn status_and_assignee_are_read() {
        let member = Uuid::new_v4();
        let task = Task::try_from(tasks::Model {
            assigned_to: Some(member),
            hours: Some(3.5),
            status: Some("done".to_string()),
            ..model()
        })
        .unwrap();

        assert!(task.is_assigned_to(&MemberId(member)));
        assert_eq!(task.hours, 3.5);
        assert!(task.is_done());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = Task::try_from(tasks::Model {
            status: Some("archived".to_string()),
            ..model()
        });

        assert!(matches!(result, Err(DomainError::Database(_))));
    }
}
