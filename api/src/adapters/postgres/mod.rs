//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod check_in_repo;
pub mod member_repo;
pub mod peer_review_repo;
pub mod project_repo;
pub mod task_repo;

#[cfg(test)]
mod integration_tests;

pub use check_in_repo::PostgresCheckInRepository;
pub use member_repo::PostgresMemberRepository;
pub use peer_review_repo::PostgresPeerReviewRepository;
pub use project_repo::PostgresProjectRepository;
pub use task_repo::PostgresTaskRepository;
