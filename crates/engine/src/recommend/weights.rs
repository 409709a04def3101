//! Tunable weights for the generic catalog scorer.

use crate::error::WeightsError;
use serde::{Deserialize, Serialize};

/// Additive weights for each catalog signal.
///
/// These are a default scheme meant to be tuned per deployment. Every weight
/// must be non-negative so a matching signal can never lower a score, and an
/// exact level fit must be worth at least as much as an adjacent one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogWeights {
    /// Starting score for every item.
    pub base: f64,
    /// Per user skill found among the item's tags.
    pub skill_match: f64,
    pub background_match: f64,
    pub education_match: f64,
    pub country_match: f64,
    /// Item difficulty equals the user's level.
    pub level_exact: f64,
    /// Item difficulty is one rung away from the user's level.
    pub level_adjacent: f64,
    /// Ceiling per tag for recent-activity overlap.
    pub activity: f64,
    /// Free item for a user who prefers free content.
    pub free_match: f64,
}

impl Default for CatalogWeights {
    fn default() -> Self {
        Self {
            base: 10.0,
            skill_match: 5.0,
            background_match: 4.0,
            education_match: 3.0,
            country_match: 3.0,
            level_exact: 3.0,
            level_adjacent: 1.5,
            activity: 2.0,
            free_match: 2.0,
        }
    }
}

impl CatalogWeights {
    fn named(&self) -> [(&'static str, f64); 9] {
        [
            ("base", self.base),
            ("skill_match", self.skill_match),
            ("background_match", self.background_match),
            ("education_match", self.education_match),
            ("country_match", self.country_match),
            ("level_exact", self.level_exact),
            ("level_adjacent", self.level_adjacent),
            ("activity", self.activity),
            ("free_match", self.free_match),
        ]
    }

    /// Check that the weights keep scoring monotonic.
    pub fn validate(&self) -> Result<(), WeightsError> {
        for (name, value) in self.named() {
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { name });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { name, value });
            }
        }
        if self.level_adjacent > self.level_exact {
            return Err(WeightsError::LevelOrdering {
                exact: self.level_exact,
                adjacent: self.level_adjacent,
            });
        }
        Ok(())
    }

    /// Validate and return the weights.
    pub fn validated(self) -> Result<Self, WeightsError> {
        self.validate().map(|()| self)
    }
}
