//! Badge taxonomy
//!
//! Achievement badges shown next to a member's name. Which badges a member
//! holds is derived by the engine; this module only names them.

use serde::{Deserialize, Serialize};

/// Kind of achievement badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeType {
    Reliable,
    ClarityChampion,
    OnTimeHero,
    TeamPlayer,
    /// Part of the taxonomy, but no earning rule is defined
    Innovator,
}

impl BadgeType {
    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            BadgeType::Reliable => "Reliable",
            BadgeType::ClarityChampion => "Clarity Champion",
            BadgeType::OnTimeHero => "On-Time Hero",
            BadgeType::TeamPlayer => "Team Player",
            BadgeType::Innovator => "Innovator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BadgeType::Reliable => "Checked in for 4 or more consecutive weeks",
            BadgeType::ClarityChampion => "Documented work on every assigned task",
            BadgeType::OnTimeHero => "Completed at least 90% of assigned tasks",
            BadgeType::TeamPlayer => "Rated 4 or higher on average by peers",
            BadgeType::Innovator => "Brought a new idea that changed the project",
        }
    }
}

impl std::fmt::Display for BadgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeType::Reliable => write!(f, "reliable"),
            BadgeType::ClarityChampion => write!(f, "clarity-champion"),
            BadgeType::OnTimeHero => write!(f, "on-time-hero"),
            BadgeType::TeamPlayer => write!(f, "team-player"),
            BadgeType::Innovator => write!(f, "innovator"),
        }
    }
}

impl std::str::FromStr for BadgeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reliable" => Ok(BadgeType::Reliable),
            "clarity-champion" => Ok(BadgeType::ClarityChampion),
            "on-time-hero" => Ok(BadgeType::OnTimeHero),
            "team-player" => Ok(BadgeType::TeamPlayer),
            "innovator" => Ok(BadgeType::Innovator),
            _ => Err(format!("Unknown badge type: {}", s)),
        }
    }
}

/// An earned badge, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Badge {
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<BadgeType> for Badge {
    fn from(badge_type: BadgeType) -> Self {
        Self {
            badge_type,
            label: badge_type.label(),
            description: badge_type.description(),
        }
    }
}
