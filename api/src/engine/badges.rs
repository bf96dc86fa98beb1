//! Badge evaluator
//!
//! Each rule is evaluated on its own, so a member can hold any combination.
//! `BadgeType::Innovator` has no earning rule and is never emitted.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::entities::{Badge, BadgeType, CheckIn, Member, PeerReview, Task};
use crate::engine::score::peer_mean;
use crate::engine::streak::streak;
use crate::engine::weights::{
    ON_TIME_COMPLETION_RATIO, ON_TIME_MIN_TASKS, RELIABLE_STREAK_WEEKS, TEAM_PLAYER_MIN_MEAN,
    TEAM_PLAYER_MIN_REVIEWS,
};

/// Checked in for at least four consecutive weeks
fn is_reliable(streak_weeks: u32) -> bool {
    streak_weeks >= RELIABLE_STREAK_WEEKS
}

/// Has tasks, and left a work log of their own on every one of them
fn is_clarity_champion(member: &Member, assigned: &[&Task]) -> bool {
    !assigned.is_empty()
        && assigned
            .iter()
            .all(|t| t.logs_by(&member.name).next().is_some())
}

fn is_on_time_hero(assigned: &[&Task]) -> bool {
    if assigned.len() < ON_TIME_MIN_TASKS {
        return false;
    }
    let done = assigned.iter().filter(|t| t.is_done()).count();
    done as f64 / assigned.len() as f64 >= ON_TIME_COMPLETION_RATIO
}

fn is_team_player(member: &Member, peer_reviews: &[PeerReview]) -> bool {
    let received = peer_reviews.iter().filter(|r| r.is_about(&member.id)).count();
    received >= TEAM_PLAYER_MIN_REVIEWS && peer_mean(member, peer_reviews) >= TEAM_PLAYER_MIN_MEAN
}

/// Badges earned by a member, with the streak measured at `reference_date`
pub fn badges(
    member: &Member,
    tasks: &[Task],
    check_ins: &[CheckIn],
    peer_reviews: &[PeerReview],
    reference_date: NaiveDate,
) -> BTreeSet<Badge> {
    let assigned: Vec<&Task> = tasks.iter().filter(|t| t.is_assigned_to(&member.id)).collect();
    let mut earned = BTreeSet::new();

    if is_reliable(streak(&member.id, check_ins, reference_date)) {
        earned.insert(BadgeType::Reliable.into());
    }
    if is_clarity_champion(member, &assigned) {
        earned.insert(BadgeType::ClarityChampion.into());
    }
    if is_on_time_hero(&assigned) {
        earned.insert(BadgeType::OnTimeHero.into());
    }
    if is_team_player(member, peer_reviews) {
        earned.insert(BadgeType::TeamPlayer.into());
    }

    earned
}
