//! Build a [`UserContext`] from the raw profile, preference and activity records.

use super::activity::{fold_activity, ActivityEvent};
use super::{Background, PreferenceRecord, ProfileRecord, UserContext};
use crate::types::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_HALF_LIFE_DAYS: f64 = 14.0;

/// Tunables for context building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextOptions {
    /// Days after which an event's contribution halves.
    pub half_life_days: f64,
    /// Instant event ages are measured from. Defaults to the newest event,
    /// so pin it when comparing contexts built from growing activity lists.
    #[serde(skip)]
    pub as_of: Option<DateTime<Utc>>,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            half_life_days: DEFAULT_HALF_LIFE_DAYS,
            as_of: None,
        }
    }
}

impl ContextOptions {
    /// Measure event ages from `as_of`.
    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Half-life to use, falling back to the default when the configured one
    /// is not a positive finite number.
    fn effective_half_life(&self) -> f64 {
        if self.half_life_days.is_finite() && self.half_life_days > 0.0 {
            self.half_life_days
        } else {
            DEFAULT_HALF_LIFE_DAYS
        }
    }
}

/// Build a user context with default options.
///
/// Missing records yield the least-informative context; this never fails.
pub fn build_user_context(
    profile: Option<&ProfileRecord>,
    preferences: Option<&PreferenceRecord>,
    recent_activity: &[ActivityEvent],
) -> UserContext {
    build_user_context_with(
        profile,
        preferences,
        recent_activity,
        &ContextOptions::default(),
    )
}

/// Build a user context with explicit options.
pub fn build_user_context_with(
    profile: Option<&ProfileRecord>,
    preferences: Option<&PreferenceRecord>,
    recent_activity: &[ActivityEvent],
    options: &ContextOptions,
) -> UserContext {
    let mut ctx = UserContext::new();

    if let Some(profile) = profile {
        ctx.experience_level = profile
            .experience_level
            .as_deref()
            .and_then(|text| match text.parse::<Level>() {
                Ok(level) => Some(level),
                Err(err) => {
                    tracing::debug!(target: "pathwise::context", %err, "Ignoring experience level");
                    None
                }
            });
        ctx.background = profile
            .background
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .and_then(|b| b.parse::<Background>().ok());
        ctx.education_level = non_blank(profile.education_level.as_deref());
        ctx.country = non_blank(profile.country.as_deref());

        ctx = profile
            .skills
            .iter()
            .fold(ctx, |ctx, skill| ctx.with_skill(skill));
        ctx = profile
            .learning_goals
            .iter()
            .fold(ctx, |ctx, goal| ctx.with_goal(goal));
    }

    if let Some(preferences) = preferences {
        ctx.prefers_free = preferences.prefers_free.unwrap_or(false);
        ctx = preferences
            .interests
            .iter()
            .fold(ctx, |ctx, interest| ctx.with_goal(interest));
    }

    ctx.recent_activity_weight = fold_activity(
        recent_activity,
        options.effective_half_life(),
        options.as_of,
    );

    tracing::debug!(
        target: "pathwise::context",
        has_profile = profile.is_some(),
        has_preferences = preferences.is_some(),
        skills = ctx.skills.len(),
        goals = ctx.learning_goals.len(),
        activity_tokens = ctx.recent_activity_weight.len(),
        "Built user context"
    );

    ctx
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
