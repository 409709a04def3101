//! User context: the normalized interest snapshot every scorer reads.

mod activity;
mod builder;

pub use activity::{ActivityEvent, ActivityKind};
pub use builder::{build_user_context, build_user_context_with, ContextOptions};

use crate::catalog::lenient;
use crate::types::Level;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Goals shorter than this many characters are treated as noise.
pub const MIN_GOAL_CHARS: usize = 4;

/// Learner category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Background {
    Student,
    Professional,
    SelfLearner,
    CareerChanger,
    Educator,
    /// Any other label, normalized to lowercase.
    Other(String),
}

impl Background {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Student => "student",
            Self::Professional => "professional",
            Self::SelfLearner => "self-learner",
            Self::CareerChanger => "career-changer",
            Self::Educator => "educator",
            Self::Other(label) => label,
        }
    }

    /// Whether a free-text audience label names this background.
    pub fn matches(&self, label: &str) -> bool {
        label
            .parse::<Background>()
            .is_ok_and(|parsed| &parsed == self)
    }
}

impl FromStr for Background {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c })
            .collect();
        Ok(match normalized.as_str() {
            "student" | "students" => Self::Student,
            "professional" | "professionals" | "working-professional" => Self::Professional,
            "self-learner" | "selflearner" | "self-taught" => Self::SelfLearner,
            "career-changer" | "career-switcher" => Self::CareerChanger,
            "educator" | "teacher" => Self::Educator,
            _ => Self::Other(normalized),
        })
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Background {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Background {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(label
            .parse::<Background>()
            .unwrap_or_else(|never: Infallible| match never {}))
    }
}

/// Stored profile attributes as returned by the profile source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub experience_level: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub background: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub education_level: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub learning_goals: Vec<String>,
}

/// Explicit user-set preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceRecord {
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub prefers_free: Option<bool>,
    /// Topics the user asked to see more of; folded into learning goals.
    #[serde(deserialize_with = "lenient::string_list")]
    pub interests: Vec<String>,
}

/// Normalized scoring snapshot for one user.
///
/// Skills, goals and activity tokens are stored lowercase. Scorers still
/// compare case-insensitively, so a hand-built context behaves the same.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContext {
    pub experience_level: Option<Level>,
    pub background: Option<Background>,
    pub education_level: Option<String>,
    pub country: Option<String>,
    pub skills: BTreeSet<String>,
    pub learning_goals: BTreeSet<String>,
    pub prefers_free: bool,
    /// Topic token -> recency-decayed weight from recent activity.
    pub recent_activity_weight: BTreeMap<String, f64>,
}

impl UserContext {
    /// The least-informative context.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.experience_level = Some(level);
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_education_level(mut self, level: impl Into<String>) -> Self {
        self.education_level = Some(level.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Add a skill. Blank skills are ignored.
    pub fn with_skill(mut self, skill: &str) -> Self {
        if let Some(skill) = normalize(skill) {
            self.skills.insert(skill);
        }
        self
    }

    /// Add a learning goal. Goals under [`MIN_GOAL_CHARS`] characters are ignored.
    pub fn with_goal(mut self, goal: &str) -> Self {
        if let Some(goal) = normalize(goal).filter(|g| is_meaningful_goal(g)) {
            self.learning_goals.insert(goal);
        }
        self
    }

    pub fn with_prefers_free(mut self, prefers_free: bool) -> Self {
        self.prefers_free = prefers_free;
        self
    }

    /// Set the activity weight for a topic token. Non-finite or negative
    /// weights are stored as zero.
    pub fn with_activity_weight(mut self, token: &str, weight: f64) -> Self {
        if let Some(token) = normalize(token) {
            let weight = if weight.is_finite() && weight > 0.0 { weight } else { 0.0 };
            self.recent_activity_weight.insert(token, weight);
        }
        self
    }

    /// Skills in lowercase.
    pub fn skills_lower(&self) -> impl Iterator<Item = String> + '_ {
        self.skills.iter().map(|s| s.trim().to_lowercase())
    }

    /// Goals long enough to count as signal, in lowercase.
    pub fn meaningful_goals(&self) -> impl Iterator<Item = String> + '_ {
        self.learning_goals
            .iter()
            .map(|g| g.trim().to_lowercase())
            .filter(|g| is_meaningful_goal(g))
    }

    /// Whether the context carries no signal at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn normalize(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

pub(crate) fn is_meaningful_goal(goal: &str) -> bool {
    goal.chars().count() >= MIN_GOAL_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_parse_normalizes() {
        assert_eq!("Self Learner".parse::<Background>(), Ok(Background::SelfLearner));
        assert_eq!("self_learner".parse::<Background>(), Ok(Background::SelfLearner));
        assert_eq!("Students".parse::<Background>(), Ok(Background::Student));
        assert_eq!(
            "Retiree".parse::<Background>(),
            Ok(Background::Other("retiree".to_string()))
        );
    }

    #[test]
    fn test_background_matches_label() {
        assert!(Background::Professional.matches("Working Professional"));
        assert!(!Background::Student.matches("professional"));
        assert!(Background::Other("retiree".to_string()).matches("RETIREE"));
    }

    #[test]
    fn test_background_serde_roundtrip() {
        let json = serde_json::to_string(&Background::CareerChanger).unwrap();
        assert_eq!(json, "\"career-changer\"");
        let parsed: Background = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Background::CareerChanger);
    }

    #[test]
    fn test_builder_normalizes_skills() {
        let ctx = UserContext::new().with_skill("  React ").with_skill("");
        assert_eq!(ctx.skills.len(), 1);
        assert!(ctx.skills.contains("react"));
    }

    #[test]
    fn test_builder_drops_short_goals() {
        let ctx = UserContext::new().with_goal("AI").with_goal("get hired");
        assert_eq!(ctx.learning_goals.len(), 1);
        assert!(ctx.learning_goals.contains("get hired"));
    }

    #[test]
    fn test_meaningful_goals_filters_hand_built_sets() {
        let mut ctx = UserContext::new();
        ctx.learning_goals.insert("ML".to_string());
        ctx.learning_goals.insert("Data Science".to_string());
        let goals: Vec<String> = ctx.meaningful_goals().collect();
        assert_eq!(goals, vec!["data science"]);
    }

    #[test]
    fn test_activity_weight_sanitized() {
        let ctx = UserContext::new()
            .with_activity_weight("rust", f64::NAN)
            .with_activity_weight("go", -1.0)
            .with_activity_weight("sql", 0.5);
        assert_eq!(ctx.recent_activity_weight["rust"], 0.0);
        assert_eq!(ctx.recent_activity_weight["go"], 0.0);
        assert_eq!(ctx.recent_activity_weight["sql"], 0.5);
    }

    #[test]
    fn test_default_context_is_empty() {
        assert!(UserContext::new().is_empty());
        assert!(!UserContext::new().with_prefers_free(true).is_empty());
    }

    #[test]
    fn test_profile_record_lenient() {
        let profile: ProfileRecord =
            serde_json::from_str(r#"{"skills": "python, sql", "country": 7, "background": null}"#)
                .unwrap();
        assert_eq!(profile.skills, vec!["python", "sql"]);
        assert_eq!(profile.country.as_deref(), Some("7"));
        assert!(profile.background.is_none());
    }
}
