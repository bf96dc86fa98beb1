//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services load project records through the ports and hand them to the engine.

pub mod contribution_service;
pub mod workload_service;

pub use contribution_service::ContributionService;
pub use workload_service::{AutoAssignOutcome, WorkloadService};
