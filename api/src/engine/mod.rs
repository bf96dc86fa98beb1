//! Contribution fairness & workload balancing engine
//!
//! Pure functions over an in-memory project snapshot, plus the greedy
//! balancer that writes task assignments back through `TaskRepository`.
//!
//! - `effort`: hours plus self-reported credit per member
//! - `fairness`: effort shares and the balanced / unbalanced verdict
//! - `score`: five-channel weighted contribution score
//! - `streak` / `week`: consecutive ISO-week check-ins
//! - `badges`: achievement badges
//! - `balancer`: auto-assignment of unclaimed tasks
//! - `report`: ranked per-member summary

pub mod badges;
pub mod balancer;
pub mod effort;
pub mod fairness;
pub mod report;
pub mod score;
pub mod snapshot;
pub mod streak;
pub mod week;
pub mod weights;

#[allow(unused_imports)]
pub use balancer::{
    auto_assign, plan, summary_message, AutoAssignError, LoadLedger, PlannedAssignment,
};
#[allow(unused_imports)]
pub use fairness::{classify, FairnessReport, FairnessStatus, MemberShare};
pub use report::{contribution_report, ContributionReport, ContributionRow};
pub use score::ScoreBreakdown;
pub use snapshot::ProjectSnapshot;
pub use week::IsoWeekLabel;
