//! Common types shared across engine modules.

use crate::error::ParseLevelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Proficiency ladder shared by a learner's experience and an item's difficulty.
///
/// Levels are ordered, so the distance between a learner and an item can be
/// measured in rungs.
///
/// # Examples
///
/// ```
/// use pathwise_engine::Level;
///
/// let learner: Level = "Intermediate".parse().unwrap();
/// assert_eq!(learner.distance(Level::Advanced), 1);
/// assert_eq!(learner.distance(Level::Intermediate), 0);
///
/// // Common aliases are accepted
/// assert_eq!("novice".parse::<Level>().unwrap(), Level::Beginner);
/// assert!("wizard".parse::<Level>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 4] = [
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
        Level::Expert,
    ];

    /// Position on the ladder, starting at zero for beginners.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
            Self::Expert => 3,
        }
    }

    /// Number of rungs between two levels.
    #[must_use]
    pub fn distance(self, other: Level) -> u8 {
        self.rank().abs_diff(other.rank())
    }

    /// Lowercase label, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "novice" | "entry" | "basic" | "introductory" => Ok(Self::Beginner),
            "intermediate" | "medium" => Ok(Self::Intermediate),
            "advanced" | "pro" => Ok(Self::Advanced),
            "expert" | "master" => Ok(Self::Expert),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
