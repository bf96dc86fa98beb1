//! Fairness classifier
//!
//! Turns every member's effort into a share of the team total and labels the
//! team with a coarse three-tier verdict. Only the top one and top two shares
//! matter: one member above 50% is "unbalanced", otherwise two members above
//! 80% together are "slightly-unbalanced".
//!
//! A lone member always holds 100% and is therefore "unbalanced". That follows
//! from the threshold rule and is kept as is.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Member, MemberId, Task};
use crate::engine::effort::effort_of;
use crate::engine::weights::{round1, SLIGHTLY_UNBALANCED_TOP_TWO_SHARE, UNBALANCED_TOP_SHARE};

/// Team-level fairness verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FairnessStatus {
    Balanced,
    SlightlyUnbalanced,
    Unbalanced,
}

impl std::fmt::Display for FairnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FairnessStatus::Balanced => write!(f, "balanced"),
            FairnessStatus::SlightlyUnbalanced => write!(f, "slightly-unbalanced"),
            FairnessStatus::Unbalanced => write!(f, "unbalanced"),
        }
    }
}

/// One member's share of the team effort
#[derive(Debug, Clone, PartialEq)]
pub struct MemberShare {
    pub member_id: MemberId,
    pub name: String,
    pub task_hours: f64,
    pub manual_hours: f64,
    pub manual_tasks: u32,
    pub total_effort: f64,
    /// Unrounded percentage of the team total
    pub percentage: f64,
}

impl MemberShare {
    /// Percentage as shown to users, e.g. "65.8%"
    pub fn display_percentage(&self) -> String {
        format!("{:.1}%", round1(self.percentage))
    }
}

/// Result of classifying a team
#[derive(Debug, Clone, PartialEq)]
pub struct FairnessReport {
    /// One entry per member, in input order
    pub per_member: Vec<MemberShare>,
    pub total_effort: f64,
    pub status: FairnessStatus,
}

impl FairnessReport {
    pub fn member(&self, member_id: &MemberId) -> Option<&MemberShare> {
        self.per_member.iter().find(|s| s.member_id == *member_id)
    }
}

/// Classify how evenly effort is spread across a team
pub fn classify(members: &[Member], tasks: &[Task]) -> FairnessReport {
    let efforts: Vec<_> = members.iter().map(|m| (m, effort_of(m, tasks))).collect();
    let total_effort: f64 = efforts.iter().map(|(_, e)| e.total()).sum();

    let per_member: Vec<MemberShare> = efforts
        .into_iter()
        .map(|(member, effort)| {
            let total = effort.total();
            MemberShare {
                member_id: member.id,
                name: member.name.clone(),
                task_hours: effort.task_hours,
                manual_hours: effort.manual_hours,
                manual_tasks: effort.manual_tasks,
                total_effort: total,
                percentage: share(total, total_effort),
            }
        })
        .collect();

    let percentages: Vec<f64> = per_member.iter().map(|s| s.percentage).collect();
    let status = status_for(&percentages);

    FairnessReport {
        per_member,
        total_effort,
        status,
    }
}

/// Verdict for a set of percentage shares, in any order
pub fn status_for(percentages: &[f64]) -> FairnessStatus {
    let mut sorted = percentages.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let top_one = sorted.first().copied().unwrap_or(0.0);
    let top_two = top_one + sorted.get(1).copied().unwrap_or(0.0);

    if top_one > UNBALANCED_TOP_SHARE {
        FairnessStatus::Unbalanced
    } else if top_two > SLIGHTLY_UNBALANCED_TOP_TWO_SHARE {
        FairnessStatus::SlightlyUnbalanced
    } else {
        FairnessStatus::Balanced
    }
}

fn share(effort: f64, total: f64) -> f64 {
    if total > 0.0 {
        effort / total * 100.0
    } else {
        0.0
    }
}
