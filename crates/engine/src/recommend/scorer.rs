//! Generic attribute-overlap scoring for any catalog item.

use super::{CatalogWeights, ScoreBreakdown, ScoreCard, Signal};
use crate::catalog::{Catalog, ItemFacets};
use crate::context::UserContext;
use crate::rank::{Assessment, Scorer};
use std::collections::BTreeSet;

/// Score an item with the default weights.
pub fn score_item<T: Catalog + ?Sized>(item: &T, ctx: &UserContext) -> f64 {
    score_item_with(item, ctx, &CatalogWeights::default())
}

/// Score an item with explicit weights.
pub fn score_item_with<T: Catalog + ?Sized>(
    item: &T,
    ctx: &UserContext,
    weights: &CatalogWeights,
) -> f64 {
    assess_item(item, ctx, weights).score
}

/// Score an item and report which signals fired.
///
/// Every bonus is additive and independent of the others, so dropping any
/// one matching signal from the context can only lower or hold the score.
pub fn assess_item<T: Catalog + ?Sized>(
    item: &T,
    ctx: &UserContext,
    weights: &CatalogWeights,
) -> ScoreCard {
    let facets = item.facets();
    let tags = lowercase_tags(&facets);
    let mut breakdown = ScoreBreakdown {
        base: weights.base,
        ..Default::default()
    };
    let mut signals = Vec::new();

    // Skills against tags
    let matched_skills: Vec<String> = ctx
        .skills_lower()
        .filter(|skill| tags.contains(skill))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !matched_skills.is_empty() {
        breakdown.profile += weights.skill_match * matched_skills.len() as f64;
        signals.push(Signal::SkillMatch {
            skills: matched_skills,
        });
    }

    // Audience attributes
    if let Some(background) = &ctx.background {
        if facets
            .relevant_backgrounds
            .iter()
            .any(|label| background.matches(label))
        {
            breakdown.profile += weights.background_match;
            signals.push(Signal::BackgroundMatch {
                background: background.to_string(),
            });
        }
    }

    if let Some(level) = ctx.education_level.as_deref() {
        if contains_ignore_case(facets.education_levels, level) {
            breakdown.profile += weights.education_match;
            signals.push(Signal::EducationMatch {
                level: level.to_string(),
            });
        }
    }

    if let Some(country) = ctx.country.as_deref() {
        if contains_ignore_case(facets.target_countries, country) {
            breakdown.profile += weights.country_match;
            signals.push(Signal::CountryMatch {
                country: country.to_string(),
            });
        }
    }

    // Difficulty fit
    if let (Some(user_level), Some(difficulty)) = (ctx.experience_level, facets.difficulty) {
        let distance = user_level.distance(difficulty);
        let bonus = match distance {
            0 => weights.level_exact,
            1 => weights.level_adjacent,
            _ => 0.0,
        };
        if bonus > 0.0 {
            breakdown.level += bonus;
            signals.push(Signal::LevelFit {
                level: difficulty,
                distance,
            });
        }
    }

    // Recent activity
    let mut topics = Vec::new();
    for tag in &tags {
        if let Some(&weight) = ctx.recent_activity_weight.get(tag) {
            let bonus = weights.activity * saturate(weight);
            if bonus > 0.0 {
                breakdown.activity += bonus;
                topics.push(tag.clone());
            }
        }
    }
    if !topics.is_empty() {
        signals.push(Signal::RecentInterest { topics });
    }

    if ctx.prefers_free && facets.is_free() {
        breakdown.preference += weights.free_match;
        signals.push(Signal::FreeMatch);
    }

    ScoreCard::from_parts(breakdown, signals)
}

/// Map an unbounded activity weight into `[0, 1]`, increasing.
fn saturate(weight: f64) -> f64 {
    if weight == f64::INFINITY {
        1.0
    } else if weight.is_finite() && weight > 0.0 {
        1.0 - (-weight).exp()
    } else {
        0.0
    }
}

fn lowercase_tags(facets: &ItemFacets<'_>) -> BTreeSet<String> {
    facets
        .tags
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn contains_ignore_case(haystack: &[String], needle: &str) -> bool {
    let needle = needle.trim();
    !needle.is_empty()
        && haystack
            .iter()
            .any(|candidate| candidate.trim().eq_ignore_ascii_case(needle))
}

/// Catalog scorer carrying a set of weights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CatalogScorer {
    weights: CatalogWeights,
}

impl CatalogScorer {
    /// Create a scorer with default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom weights.
    pub fn with_weights(mut self, weights: CatalogWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &CatalogWeights {
        &self.weights
    }
}

impl<T: Catalog> Scorer<T> for CatalogScorer {
    fn assess(&self, item: &T, ctx: &UserContext) -> Assessment {
        let card = assess_item(item, ctx, &self.weights);
        Assessment {
            score: card.score,
            reason: card.reason(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Certification, Degree, Exam, LearningPath};
    use crate::context::Background;
    use crate::types::Level;

    fn exam() -> Exam {
        Exam {
            name: Some("Data Engineering Exam".to_string()),
            description: Some("Pipelines and warehouses".to_string()),
            subjects: vec!["SQL".to_string(), "Python".to_string(), "Spark".to_string()],
            difficulty: Some(Level::Intermediate),
            relevant_backgrounds: vec!["Professional".to_string()],
            education_levels: vec!["Undergraduate".to_string()],
            target_countries: vec!["IN".to_string(), "US".to_string()],
            ..Default::default()
        }
    }

    fn ctx() -> UserContext {
        UserContext::new()
            .with_level(Level::Intermediate)
            .with_background(Background::Professional)
            .with_education_level("undergraduate")
            .with_country("in")
            .with_skill("python")
            .with_skill("sql")
    }

    #[test]
    fn test_empty_context_scores_base() {
        let score = score_item(&exam(), &UserContext::new());
        assert_eq!(score, CatalogWeights::default().base);
    }

    #[test]
    fn test_all_profile_signals() {
        let w = CatalogWeights::default();
        let card = assess_item(&exam(), &ctx(), &w);
        let expected = w.base
            + 2.0 * w.skill_match
            + w.background_match
            + w.education_match
            + w.country_match
            + w.level_exact;
        assert!((card.score - expected).abs() < 1e-9);
        assert_eq!(card.signals.len(), 5);
    }

    #[test]
    fn test_skill_match_case_insensitive() {
        let ctx = UserContext::new().with_skill("SPARK");
        let card = assess_item(&exam(), &ctx, &CatalogWeights::default());
        assert_eq!(
            card.signals,
            vec![Signal::SkillMatch {
                skills: vec!["spark".to_string()]
            }]
        );
    }

    #[test]
    fn test_level_exact_beats_adjacent_beats_distant() {
        let w = CatalogWeights::default();
        let item = |level| LearningPath {
            difficulty: Some(level),
            ..Default::default()
        };
        let ctx = UserContext::new().with_level(Level::Beginner);

        let exact = score_item(&item(Level::Beginner), &ctx);
        let adjacent = score_item(&item(Level::Intermediate), &ctx);
        let distant = score_item(&item(Level::Advanced), &ctx);
        let far = score_item(&item(Level::Expert), &ctx);

        assert_eq!(exact, w.base + w.level_exact);
        assert_eq!(adjacent, w.base + w.level_adjacent);
        assert_eq!(distant, w.base);
        assert_eq!(far, w.base);
    }

    #[test]
    fn test_missing_difficulty_contributes_nothing() {
        let ctx = UserContext::new().with_level(Level::Expert);
        assert_eq!(
            score_item(&Degree::default(), &ctx),
            CatalogWeights::default().base
        );
    }

    #[test]
    fn test_activity_bonus_is_bounded_and_increasing() {
        let w = CatalogWeights::default();
        let item = LearningPath {
            tags: vec!["Docker".to_string()],
            ..Default::default()
        };
        let light = UserContext::new().with_activity_weight("docker", 0.2);
        let heavy = UserContext::new().with_activity_weight("docker", 5.0);

        let light_score = score_item(&item, &light);
        let heavy_score = score_item(&item, &heavy);
        assert!(heavy_score > light_score);
        assert!(heavy_score < w.base + w.activity);
    }

    #[test]
    fn test_zero_activity_weight_no_signal() {
        let item = LearningPath {
            tags: vec!["docker".to_string()],
            ..Default::default()
        };
        let ctx = UserContext::new().with_activity_weight("docker", 0.0);
        let card = assess_item(&item, &ctx, &CatalogWeights::default());
        assert!(card.signals.is_empty());
    }

    #[test]
    fn test_free_preference() {
        let w = CatalogWeights::default();
        let free = Certification {
            description: Some("Free certification track".to_string()),
            ..Default::default()
        };
        let paid = Certification {
            description: Some("Free study guide included".to_string()),
            is_free: Some(false),
            ..Default::default()
        };
        let ctx = UserContext::new().with_prefers_free(true);

        assert_eq!(score_item(&free, &ctx), w.base + w.free_match);
        assert_eq!(score_item(&paid, &ctx), w.base);
        assert_eq!(score_item(&free, &UserContext::new()), w.base);
    }

    #[test]
    fn test_duplicate_tags_counted_once() {
        let item = LearningPath {
            tags: vec!["Rust".to_string(), "rust".to_string()],
            ..Default::default()
        };
        let ctx = UserContext::new().with_skill("rust");
        let w = CatalogWeights::default();
        assert_eq!(score_item(&item, &ctx), w.base + w.skill_match);
    }

    #[test]
    fn test_custom_weights() {
        let w = CatalogWeights {
            base: 1.0,
            skill_match: 10.0,
            ..Default::default()
        };
        let ctx = UserContext::new().with_skill("sql");
        assert_eq!(score_item_with(&exam(), &ctx, &w), 11.0);
    }

    #[test]
    fn test_scorer_reason() {
        let scorer = CatalogScorer::new();
        let assessment = scorer.assess(&exam(), &UserContext::new().with_country("US"));
        assert_eq!(assessment.reason.as_deref(), Some("Offered in US"));

        let plain = scorer.assess(&exam(), &UserContext::new());
        assert!(plain.reason.is_none());
    }

    #[test]
    fn test_infinite_activity_weight_gives_full_bonus() {
        let w = CatalogWeights::default();
        let item = LearningPath {
            tags: vec!["rust".to_string()],
            ..Default::default()
        };
        let mut finite = UserContext::new();
        finite.recent_activity_weight.insert("rust".to_string(), 40.0);
        let mut infinite = UserContext::new();
        infinite
            .recent_activity_weight
            .insert("rust".to_string(), f64::INFINITY);

        let top = score_item(&item, &infinite);
        assert_eq!(top, w.base + w.activity);
        assert!(top >= score_item(&item, &finite));
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(0.0), 0.0);
        assert_eq!(saturate(-3.0), 0.0);
        assert_eq!(saturate(f64::NAN), 0.0);
        assert_eq!(saturate(f64::INFINITY), 1.0);
        assert!(saturate(50.0) <= saturate(f64::INFINITY));
        assert!(saturate(1.0) < saturate(2.0));
        assert!(saturate(50.0) <= 1.0);
    }
}
