//! Fairshare API Server
//!
//! Contribution fairness and workload balancing for student group projects.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod engine;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresCheckInRepository, PostgresMemberRepository, PostgresPeerReviewRepository,
    PostgresProjectRepository, PostgresTaskRepository,
};
use app::{ContributionService, WorkloadService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub contribution_service: Arc<
        ContributionService<
            PostgresProjectRepository,
            PostgresMemberRepository,
            PostgresTaskRepository,
            PostgresCheckInRepository,
            PostgresPeerReviewRepository,
        >,
    >,
    pub workload_service: Arc<
        WorkloadService<
            PostgresProjectRepository,
            PostgresMemberRepository,
            PostgresTaskRepository,
        >,
    >,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn router(state: AppState, cors_allow_any: bool) -> Router {
    let app = Router::new()
        .route("/health", get(health))
        .route("/projects/:id/fairness", get(handlers::get_fairness))
        .route("/projects/:id/contributions", get(handlers::get_contributions))
        .route(
            "/projects/:id/members/:member_id/score",
            get(handlers::get_member_score),
        )
        .route(
            "/projects/:id/members/:member_id/streak",
            get(handlers::get_member_streak),
        )
        .route(
            "/projects/:id/members/:member_id/badges",
            get(handlers::get_member_badges),
        )
        .route("/projects/:id/auto-assign", post(handlers::auto_assign))
        .route(
            "/projects/:id/auto-assign/preview",
            get(handlers::preview_auto_assign),
        );

    let app = if cors_allow_any {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fairshare_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Fairshare API...");

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let project_repo = Arc::new(PostgresProjectRepository::new(db.clone()));
    let member_repo = Arc::new(PostgresMemberRepository::new(db.clone()));
    let task_repo = Arc::new(PostgresTaskRepository::new(db.clone()));
    let check_in_repo = Arc::new(PostgresCheckInRepository::new(db.clone()));
    let peer_review_repo = Arc::new(PostgresPeerReviewRepository::new(db));

    // Create application services
    let contribution_service = Arc::new(ContributionService::new(
        project_repo.clone(),
        member_repo.clone(),
        task_repo.clone(),
        check_in_repo,
        peer_review_repo,
    ));

    let workload_service = Arc::new(WorkloadService::new(project_repo, member_repo, task_repo));

    let state = AppState {
        contribution_service,
        workload_service,
    };

    let app = router(state, config.cors_allow_any);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
