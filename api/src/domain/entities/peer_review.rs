//! Peer review domain entity
//!
//! A 1-5 rating one member gives another. Reviews are anonymous to the
//! reviewed member: the reviewer is kept for bookkeeping but never serialized.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::member::MemberId;
use super::project::ProjectId;

/// Lowest score a reviewer can give
pub const MIN_PEER_SCORE: u8 = 1;

/// Highest score a reviewer can give
pub const MAX_PEER_SCORE: u8 = 5;

/// Unique identifier for a peer review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerReviewId(pub Uuid);

impl PeerReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PeerReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PeerReviewId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PeerReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A peer rating of one member by another
#[derive(Debug, Clone, Serialize)]
pub struct PeerReview {
    pub id: PeerReviewId,
    pub project_id: ProjectId,
    #[serde(skip_serializing)]
    pub reviewer_id: MemberId,
    pub reviewed_member_id: MemberId,
    pub score: u8,
    pub week_of: String,
}

impl PeerReview {
    /// Check if the review is about the given member
    pub fn is_about(&self, member_id: &MemberId) -> bool {
        self.reviewed_member_id == *member_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_review() -> PeerReview {
        PeerReview {
            id: PeerReviewId::new(),
            project_id: ProjectId::new(),
            reviewer_id: MemberId::new(),
            reviewed_member_id: MemberId::new(),
            score: 4,
            week_of: "2026-W10".to_string(),
        }
    }

    #[test]
    fn reviewer_is_never_serialized() {
        let review = make_review();
        let json = serde_json::to_string(&review).unwrap();
        assert!(!json.contains("reviewer_id"));
        assert!(!json.contains(&review.reviewer_id.to_string()));
        assert!(json.contains("reviewed_member_id"));
    }

    #[test]
    fn is_about_matches_reviewed_member_only() {
        let review = make_review();
        assert!(review.is_about(&review.reviewed_member_id));
        assert!(!review.is_about(&review.reviewer_id));
    }

    #[test]
    fn score_bounds() {
        assert!(MIN_PEER_SCORE < MAX_PEER_SCORE);
        assert_eq!(MAX_PEER_SCORE, 5);
    }
}
