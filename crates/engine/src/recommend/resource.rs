//! Keyword and format heuristics for free-text search results.
//!
//! Unlike the catalog scorer these weights are fixed: they are the
//! platform's published ordering for search, and other surfaces rely on
//! identical scores for identical inputs.

use super::{ScoreBreakdown, ScoreCard, Signal};
use crate::catalog::{Catalog, ResourceKind};
use crate::context::UserContext;
use crate::rank::{Assessment, Scorer};
use crate::types::Level;
use std::collections::BTreeSet;

const BASE_SCORE: f64 = 5.0;
const SKILL_WEIGHT: f64 = 8.0;
const GOAL_WEIGHT: f64 = 6.0;
const FREE_WEIGHT: f64 = 5.0;
const BEGINNER_WEIGHT: f64 = 7.0;
const ADVANCED_WEIGHT: f64 = 7.0;
const BOOK_WEIGHT: f64 = 4.0;
const CERTIFICATE_WEIGHT: f64 = 6.0;

/// Score a search-style result.
pub fn score_search_result<T: Catalog + ?Sized>(result: &T, ctx: &UserContext) -> f64 {
    assess_search_result(result, ctx).score
}

/// Score a search-style result and report which heuristics fired.
///
/// Matching is case-insensitive substring search over title and
/// description; bonuses stack without a cap.
pub fn assess_search_result<T: Catalog + ?Sized>(result: &T, ctx: &UserContext) -> ScoreCard {
    let facets = result.facets();
    let text = facets.search_text();
    let description = facets.description.unwrap_or_default().to_lowercase();
    let kind = facets.kind;

    let mut breakdown = ScoreBreakdown {
        base: BASE_SCORE,
        ..Default::default()
    };
    let mut signals = Vec::new();

    // Skills and goals are sets under case folding; count each once
    let skills: Vec<String> = ctx
        .skills_lower()
        .filter(|skill| !skill.is_empty() && text.contains(skill.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !skills.is_empty() {
        breakdown.profile += SKILL_WEIGHT * skills.len() as f64;
        signals.push(Signal::SkillMatch { skills });
    }

    let goals: Vec<String> = ctx
        .meaningful_goals()
        .filter(|goal| text.contains(goal.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !goals.is_empty() {
        breakdown.profile += GOAL_WEIGHT * goals.len() as f64;
        signals.push(Signal::GoalMatch { goals });
    }

    if ctx.prefers_free && description.contains("free") {
        breakdown.preference += FREE_WEIGHT;
        signals.push(Signal::FreeMatch);
    }

    let is = |expected: ResourceKind| kind == Some(&expected);

    match ctx.experience_level {
        Some(Level::Beginner) if is(ResourceKind::Youtube) || description.contains("beginner") => {
            breakdown.level += BEGINNER_WEIGHT;
            signals.push(Signal::BeginnerFriendly);
        }
        Some(Level::Advanced | Level::Expert)
            if description.contains("advanced") || description.contains("expert") =>
        {
            breakdown.level += ADVANCED_WEIGHT;
            signals.push(Signal::AdvancedDepth);
        }
        _ => {}
    }

    if matches!(
        ctx.experience_level,
        Some(Level::Intermediate | Level::Advanced)
    ) && is(ResourceKind::Book)
    {
        breakdown.level += BOOK_WEIGHT;
        signals.push(Signal::BookForLevel);
    }

    if is(ResourceKind::Course) && description.contains("certificate") {
        breakdown.content += CERTIFICATE_WEIGHT;
        signals.push(Signal::Certificate);
    }

    ScoreCard::from_parts(breakdown, signals)
}

/// Search result scorer with the fixed resource weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceScorer;

impl<T: Catalog> Scorer<T> for ResourceScorer {
    fn assess(&self, item: &T, ctx: &UserContext) -> Assessment {
        let card = assess_search_result(item, ctx);
        Assessment {
            score: card.score,
            reason: card.reason(),
        }
    }
}
