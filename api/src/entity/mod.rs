//! SeaORM entity models
//!
//! One module per table. Schema lives in `api/migrations`.

pub mod check_ins;
pub mod members;
pub mod peer_reviews;
pub mod projects;
pub mod tasks;
pub mod work_logs;
