//! Contribution score engine
//!
//! Weighted sum of five independent activity channels. The result is a
//! relative ranking signal shown as "points"; it is not a percentage and does
//! not add up to anything across members.

use serde::Serialize;

use crate::domain::entities::{CheckIn, Member, PeerReview, Task};
use crate::engine::effort::{or_zero, task_hours};
use crate::engine::weights::{
    round1, SCORE_CHECK_IN_SCALE, SCORE_CHECK_IN_WEIGHT, SCORE_PEER_SCALE, SCORE_PEER_WEIGHT,
    SCORE_TASK_COUNT_SCALE, SCORE_TASK_COUNT_WEIGHT, SCORE_TASK_HOURS_WEIGHT,
    SCORE_WORK_LOG_SCALE, SCORE_WORK_LOG_WEIGHT,
};

/// Per-channel contribution to a member's score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub task_hours: f64,
    pub task_count: f64,
    pub work_logs: f64,
    pub check_ins: f64,
    pub peer_reviews: f64,
}

impl ScoreBreakdown {
    /// Sum of all channels, rounded to one decimal
    pub fn total(&self) -> f64 {
        round1(
            self.task_hours + self.task_count + self.work_logs + self.check_ins + self.peer_reviews,
        )
    }
}

/// Mean peer score received by a member, 0 when nobody reviewed them
pub fn peer_mean(member: &Member, peer_reviews: &[PeerReview]) -> f64 {
    let scores: Vec<f64> = peer_reviews
        .iter()
        .filter(|r| r.is_about(&member.id))
        .map(|r| f64::from(r.score))
        .collect();

    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Work-log entries the member wrote on their own assigned tasks
pub fn authored_work_logs(member: &Member, tasks: &[Task]) -> usize {
    tasks
        .iter()
        .filter(|t| t.is_assigned_to(&member.id))
        .map(|t| t.logs_by(&member.name).count())
        .sum()
}

/// Channel-by-channel score for a member
pub fn breakdown(
    member: &Member,
    tasks: &[Task],
    check_ins: &[CheckIn],
    peer_reviews: &[PeerReview],
) -> ScoreBreakdown {
    let hours = task_hours(&member.id, tasks).max(0.0);
    let task_count = tasks.iter().filter(|t| t.is_assigned_to(&member.id)).count();
    let work_logs = authored_work_logs(member, tasks);
    let check_in_count = check_ins.iter().filter(|c| c.member_id == member.id).count();
    let mean = or_zero(peer_mean(member, peer_reviews));

    ScoreBreakdown {
        task_hours: hours * SCORE_TASK_HOURS_WEIGHT,
        task_count: task_count as f64 * SCORE_TASK_COUNT_WEIGHT * SCORE_TASK_COUNT_SCALE,
        work_logs: work_logs as f64 * SCORE_WORK_LOG_WEIGHT * SCORE_WORK_LOG_SCALE,
        check_ins: check_in_count as f64 * SCORE_CHECK_IN_WEIGHT * SCORE_CHECK_IN_SCALE,
        peer_reviews: mean * SCORE_PEER_WEIGHT * SCORE_PEER_SCALE,
    }
}

/// Composite contribution score, rounded to one decimal
pub fn score(
    member: &Member,
    tasks: &[Task],
    check_ins: &[CheckIn],
    peer_reviews: &[PeerReview],
) -> f64 {
    breakdown(member, tasks, check_ins, peer_reviews).total()
}
