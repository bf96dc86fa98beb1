//! Contribution ranking
//!
//! Combines score, effort share, streak and badges into one row per member,
//! ranked by score (highest first). Equal scores are ordered by name so the
//! ranking is stable between requests.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::entities::{Badge, MemberId, MemberRole};
use crate::engine::fairness::FairnessStatus;
use crate::engine::score::ScoreBreakdown;
use crate::engine::snapshot::ProjectSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub struct ContributionRow {
    /// 1-based position in the ranking
    pub rank: usize,
    pub member_id: MemberId,
    pub name: String,
    pub role: MemberRole,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Share of team effort, unrounded
    pub percentage: f64,
    pub streak_weeks: u32,
    pub badges: BTreeSet<Badge>,
    /// Hours the member reported in their own work logs
    pub logged_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContributionReport {
    pub rows: Vec<ContributionRow>,
    pub status: FairnessStatus,
    pub total_effort: f64,
}

/// Build the ranked contribution report for a project
pub fn contribution_report(
    snapshot: &ProjectSnapshot,
    reference_date: NaiveDate,
) -> ContributionReport {
    let fairness = snapshot.fairness();

    let mut rows: Vec<ContributionRow> = snapshot
        .members
        .iter()
        .map(|member| {
            let breakdown = snapshot.score_breakdown(member);
            let logged_hours: f64 = snapshot
                .tasks
                .iter()
                .flat_map(|t| t.logs_by(&member.name))
                .map(|log| log.hours())
                .sum();

            ContributionRow {
                rank: 0,
                member_id: member.id,
                name: member.name.clone(),
                role: member.role,
                score: snapshot.score(member),
                breakdown,
                percentage: fairness
                    .member(&member.id)
                    .map(|s| s.percentage)
                    .unwrap_or(0.0),
                streak_weeks: snapshot.streak(&member.id, reference_date),
                badges: snapshot.badges(member, reference_date),
                logged_hours,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }

    ContributionReport {
        rows,
        status: fairness.status,
        total_effort: fairness.total_effort,
    }
}
