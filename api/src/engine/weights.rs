//! Scoring constants
//!
//! Fixed weights and thresholds used by the fairness and contribution engine.
//! These are part of the contract with the presentation layer, not tunables.

/// Hour-equivalent credit for one self-reported task
pub const MANUAL_TASK_HOURS: f64 = 0.5;

/// A single member above this share makes the team "unbalanced"
pub const UNBALANCED_TOP_SHARE: f64 = 50.0;

/// The top two members above this combined share make the team "slightly-unbalanced"
pub const SLIGHTLY_UNBALANCED_TOP_TWO_SHARE: f64 = 80.0;

/// Contribution score: weight per estimated task hour
pub const SCORE_TASK_HOURS_WEIGHT: f64 = 0.4;

/// Contribution score: weight and scale per assigned task
pub const SCORE_TASK_COUNT_WEIGHT: f64 = 0.2;
pub const SCORE_TASK_COUNT_SCALE: f64 = 5.0;

/// Contribution score: weight and scale per authored work log
pub const SCORE_WORK_LOG_WEIGHT: f64 = 0.15;
pub const SCORE_WORK_LOG_SCALE: f64 = 3.0;

/// Contribution score: weight and scale per check-in
pub const SCORE_CHECK_IN_WEIGHT: f64 = 0.1;
pub const SCORE_CHECK_IN_SCALE: f64 = 10.0;

/// Contribution score: weight and scale on the mean peer rating
pub const SCORE_PEER_WEIGHT: f64 = 0.15;
pub const SCORE_PEER_SCALE: f64 = 4.0;

/// Longest streak the tracker will report, in weeks
pub const MAX_STREAK_WEEKS: u32 = 52;

/// Streak needed for the "reliable" badge
pub const RELIABLE_STREAK_WEEKS: u32 = 4;

/// Assigned tasks needed before "on-time-hero" is considered
pub const ON_TIME_MIN_TASKS: usize = 3;

/// Share of assigned tasks that must be done for "on-time-hero"
pub const ON_TIME_COMPLETION_RATIO: f64 = 0.9;

/// Reviews needed before "team-player" is considered
pub const TEAM_PLAYER_MIN_REVIEWS: usize = 2;

/// Mean peer rating needed for "team-player"
pub const TEAM_PLAYER_MIN_MEAN: f64 = 4.0;

/// Round to one decimal place, the precision every score is displayed at
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_thresholds_are_ordered() {
        assert!(UNBALANCED_TOP_SHARE < SLIGHTLY_UNBALANCED_TOP_TWO_SHARE);
        assert!(SLIGHTLY_UNBALANCED_TOP_TWO_SHARE < 100.0);
    }

    #[test]
    fn score_weights_are_positive() {
        for weight in [
            SCORE_TASK_HOURS_WEIGHT,
            SCORE_TASK_COUNT_WEIGHT,
            SCORE_WORK_LOG_WEIGHT,
            SCORE_CHECK_IN_WEIGHT,
            SCORE_PEER_WEIGHT,
        ] {
            assert!(weight > 0.0);
        }
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(65.789), 65.8);
        assert_eq!(round1(34.21), 34.2);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn streak_cap_is_one_year() {
        assert_eq!(MAX_STREAK_WEEKS, 52);
    }
}
