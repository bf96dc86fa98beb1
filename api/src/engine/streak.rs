//! Check-in streak tracker
//!
//! Counts consecutive ISO weeks with at least one check-in, walking backward
//! from the week that contains the reference date. The walk is capped at one
//! year.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::entities::{CheckIn, MemberId};
use crate::engine::week::IsoWeekLabel;
use crate::engine::weights::MAX_STREAK_WEEKS;

/// Weeks in which the member checked in. Unparseable labels are skipped.
fn weeks_with_check_ins(member_id: &MemberId, check_ins: &[CheckIn]) -> HashSet<IsoWeekLabel> {
    check_ins
        .iter()
        .filter(|c| c.member_id == *member_id)
        .filter_map(|c| c.week_of.parse().ok())
        .collect()
}

/// Consecutive-week check-in streak ending at the week of `reference_date`
pub fn streak(member_id: &MemberId, check_ins: &[CheckIn], reference_date: NaiveDate) -> u32 {
    let weeks = weeks_with_check_ins(member_id, check_ins);
    if weeks.is_empty() {
        return 0;
    }

    let mut current = Some(IsoWeekLabel::from_date(reference_date));
    let mut count = 0;

    for _ in 0..MAX_STREAK_WEEKS {
        match current {
            Some(week) if weeks.contains(&week) => {
                count += 1;
                current = week.previous();
            }
            _ => break,
        }
    }

    count
}
