//! Score candidate lists, order them stably and truncate.

use crate::context::UserContext;
use serde::Serialize;

/// Result of assessing one item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assessment {
    pub score: f64,
    pub reason: Option<String>,
}

impl From<f64> for Assessment {
    fn from(score: f64) -> Self {
        Self {
            score,
            reason: None,
        }
    }
}

/// Trait for computing an item's relevance to a user.
///
/// Implementations must be pure: the same item and context always produce
/// the same assessment. Any `Fn(&T, &UserContext) -> f64` is a scorer.
pub trait Scorer<T: ?Sized> {
    /// Score `item` for `ctx`, optionally explaining why.
    fn assess(&self, item: &T, ctx: &UserContext) -> Assessment;
}

impl<T: ?Sized, F> Scorer<T> for F
where
    F: Fn(&T, &UserContext) -> f64,
{
    fn assess(&self, item: &T, ctx: &UserContext) -> Assessment {
        self(item, ctx).into()
    }
}

/// An item paired with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem<T> {
    pub item: T,
    /// Finite and non-negative.
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Score every item, sort descending by score and keep the first `limit`.
///
/// Items are scored independently. Equal scores keep their input order, so
/// truncation always returns a prefix of the full ordering.
pub fn rank_and_truncate<T, S>(
    items: impl IntoIterator<Item = T>,
    ctx: &UserContext,
    scorer: &S,
    limit: Option<usize>,
) -> Vec<ScoredItem<T>>
where
    S: Scorer<T> + ?Sized,
{
    rank_assessed(items, limit, |item| scorer.assess(item, ctx))
}

/// Rank with a scoring closure that already captures its context.
pub fn rank_with<T, F>(
    items: impl IntoIterator<Item = T>,
    limit: Option<usize>,
    score: F,
) -> Vec<ScoredItem<T>>
where
    F: Fn(&T) -> f64,
{
    rank_assessed(items, limit, |item| score(item).into())
}

fn rank_assessed<T, F>(
    items: impl IntoIterator<Item = T>,
    limit: Option<usize>,
    assess: F,
) -> Vec<ScoredItem<T>>
where
    F: Fn(&T) -> Assessment,
{
    let mut scored: Vec<ScoredItem<T>> = items
        .into_iter()
        .map(|item| {
            let Assessment { score, reason } = assess(&item);
            ScoredItem {
                score: sanitize(score),
                reason,
                item,
            }
        })
        .collect();

    let candidates = scored.len();

    // `sort_by` is stable: ties keep input order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(limit) = limit {
        scored.truncate(limit);
    }

    tracing::trace!(
        target: "pathwise::rank",
        candidates,
        returned = scored.len(),
        limit = ?limit,
        "Ranked candidates"
    );

    scored
}

/// Clamp a raw score to a finite, non-negative value.
fn sanitize(score: f64) -> f64 {
    if score.is_finite() && score > 0.0 {
        score
    } else {
        if !score.is_finite() {
            tracing::debug!(target: "pathwise::rank", score, "Non-finite score treated as zero");
        }
        0.0
    }
}
