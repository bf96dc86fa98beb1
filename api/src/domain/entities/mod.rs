//! Domain entities
//!
//! Plain domain models for group projects and their activity records.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod badge;
pub mod check_in;
pub mod member;
pub mod peer_review;
pub mod project;
pub mod task;

pub use badge::{Badge, BadgeType};
pub use check_in::{CheckIn, CheckInId};
pub use member::{Member, MemberId, MemberRole};
#[allow(unused_imports)]
pub use peer_review::{PeerReview, PeerReviewId, MAX_PEER_SCORE, MIN_PEER_SCORE};
pub use project::{Project, ProjectId};
pub use task::{Task, TaskId, TaskStatus, WorkLog};
