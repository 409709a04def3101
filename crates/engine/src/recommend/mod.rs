//! Relevance scoring of catalog items against a user context.

mod explainer;
mod resource;
mod scorer;
mod weights;

pub use explainer::generate_explanation;
pub use resource::{assess_search_result, score_search_result, ResourceScorer};
pub use scorer::{assess_item, score_item, score_item_with, CatalogScorer};
pub use weights::CatalogWeights;

use crate::types::Level;
use serde::{Deserialize, Serialize};

/// Breakdown of a score into its additive parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Fixed starting score.
    pub base: f64,
    /// Skill, goal and audience overlap.
    pub profile: f64,
    /// Fit between experience level and item difficulty or format.
    pub level: f64,
    /// Overlap with recently active topics.
    pub activity: f64,
    /// Stated preferences such as free content.
    pub preference: f64,
    /// Properties of the item itself, such as awarding a certificate.
    pub content: f64,
}

impl ScoreBreakdown {
    /// Calculate total score.
    pub fn total(&self) -> f64 {
        self.base + self.profile + self.level + self.activity + self.preference + self.content
    }
}

/// A signal that fired while scoring an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum Signal {
    /// User skills found among the item's tags or text.
    SkillMatch { skills: Vec<String> },
    /// Learning goals found in the item's text.
    GoalMatch { goals: Vec<String> },
    /// The user's background is one the item targets.
    BackgroundMatch { background: String },
    /// The user's education level is one the item admits.
    EducationMatch { level: String },
    /// The user's country is one the item targets.
    CountryMatch { country: String },
    /// Item difficulty is at or next to the user's level.
    LevelFit { level: Level, distance: u8 },
    /// Item tags overlap recently active topics.
    RecentInterest { topics: Vec<String> },
    /// Free item for a user who prefers free content.
    FreeMatch,
    /// Beginner-friendly resource for a beginner.
    BeginnerFriendly,
    /// In-depth resource for an advanced user.
    AdvancedDepth,
    /// Book for an intermediate or advanced reader.
    BookForLevel,
    /// Course that awards a certificate.
    Certificate,
}

impl Signal {
    /// Get a short label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SkillMatch { .. } => "skill-match",
            Self::GoalMatch { .. } => "goal-match",
            Self::BackgroundMatch { .. } => "background-match",
            Self::EducationMatch { .. } => "education-match",
            Self::CountryMatch { .. } => "country-match",
            Self::LevelFit { .. } => "level-fit",
            Self::RecentInterest { .. } => "recent-interest",
            Self::FreeMatch => "free",
            Self::BeginnerFriendly => "beginner-friendly",
            Self::AdvancedDepth => "advanced-depth",
            Self::BookForLevel => "book-for-level",
            Self::Certificate => "certificate",
        }
    }
}

/// Full result of scoring one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Combined score; always finite and at least the base.
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub signals: Vec<Signal>,
}

impl ScoreCard {
    fn from_parts(breakdown: ScoreBreakdown, signals: Vec<Signal>) -> Self {
        Self {
            score: breakdown.total(),
            breakdown,
            signals,
        }
    }

    /// Human-readable reason, or `None` when nothing but the base applied.
    pub fn reason(&self) -> Option<String> {
        (!self.signals.is_empty()).then(|| generate_explanation(&self.signals))
    }
}
