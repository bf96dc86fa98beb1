//! Project snapshot
//!
//! Everything the engine reads about one project, loaded once by the caller.
//! All methods are pure; two calls on the same snapshot give the same answer.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::entities::{Badge, CheckIn, Member, MemberId, PeerReview, Project, Task};
use crate::engine::badges::badges;
use crate::engine::fairness::{classify, FairnessReport};
use crate::engine::score::{breakdown, score, ScoreBreakdown};
use crate::engine::streak::streak;

#[derive(Debug, Clone)]
pub struct ProjectSnapshot {
    pub project: Project,
    pub members: Vec<Member>,
    /// Tasks in creation order
    pub tasks: Vec<Task>,
    pub check_ins: Vec<CheckIn>,
    pub peer_reviews: Vec<PeerReview>,
}

impl ProjectSnapshot {
    pub fn fairness(&self) -> FairnessReport {
        classify(&self.members, &self.tasks)
    }

    pub fn score_breakdown(&self, member: &Member) -> ScoreBreakdown {
        breakdown(member, &self.tasks, &self.check_ins, &self.peer_reviews)
    }

    pub fn score(&self, member: &Member) -> f64 {
        score(member, &self.tasks, &self.check_ins, &self.peer_reviews)
    }

    pub fn streak(&self, member_id: &MemberId, reference_date: NaiveDate) -> u32 {
        streak(member_id, &self.check_ins, reference_date)
    }

    pub fn badges(&self, member: &Member, reference_date: NaiveDate) -> BTreeSet<Badge> {
        badges(
            member,
            &self.tasks,
            &self.check_ins,
            &self.peer_reviews,
            reference_date,
        )
    }
}
