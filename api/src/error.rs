//! Unified error types for the Fairshare API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Persistence and business rule errors raised behind the ports
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)
//!
//! The scoring engine itself is total and has no error type; only the
//! workload balancer can fail, see `engine::balancer::AutoAssignError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::engine::balancer::AutoAssignError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Assignment(#[from] AutoAssignError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    /// Tasks written before the failure, for partially applied batches
    #[serde(skip_serializing_if = "Option::is_none")]
    assigned: Option<usize>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut assigned = None;
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Assignment(e) => {
                tracing::error!("Auto-assign failed: {}", e);
                for failure in &e.failures {
                    tracing::warn!(
                        task_id = %failure.task_id,
                        error = %failure.error,
                        "Task left unassigned"
                    );
                }
                assigned = Some(e.assigned);
                (
                    StatusCode::BAD_GATEWAY,
                    "Assignment write failed",
                    Some(e.to_string()),
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            assigned,
        });

        (status, body).into_response()
    }
}
