//! Fold recent activity into recency-decayed topic weights.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Phrases up to this many words are also kept whole, so multi-word tags
/// such as "machine learning" can match.
const MAX_PHRASE_WORDS: usize = 4;

/// Kind of user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Viewed,
    Searched,
    Bookmarked,
    Enrolled,
    Completed,
    Other,
}

impl ActivityKind {
    /// Multiplier applied to every token the event contributes.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Completed => 1.5,
            Self::Enrolled => 1.25,
            Self::Bookmarked => 1.0,
            Self::Searched => 1.0,
            Self::Viewed => 0.75,
            Self::Other => 0.5,
        }
    }

    fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().replace('-', "_").as_str() {
            "viewed" | "view" | "page_view" | "opened" => Self::Viewed,
            "searched" | "search" | "query" => Self::Searched,
            "bookmarked" | "bookmark" | "saved" | "save" => Self::Bookmarked,
            "enrolled" | "enroll" | "started" | "start" => Self::Enrolled,
            "completed" | "complete" | "finished" | "finish" => Self::Completed,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for ActivityKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// One recent interaction, as returned by the activity source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Free-form event payload; every string inside it is a token source.
    #[serde(default)]
    pub metadata: Option<Value>,
    pub timestamp: DateTime<Utc>,
    /// Opaque id of the content involved, if any.
    #[serde(default)]
    pub content_id: Option<String>,
}

impl ActivityEvent {
    pub fn new(kind: ActivityKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            metadata: None,
            timestamp,
            content_id: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Build topic weights from activity events.
///
/// Each event contributes `kind multiplier * 0.5^(age / half_life)` to every
/// distinct token in its metadata. Age is measured from `as_of`, or from the
/// newest event when none is given; events after `as_of` count as age zero.
/// With a fixed `as_of`, adding an event only ever adds weight.
pub(crate) fn fold_activity(
    events: &[ActivityEvent],
    half_life_days: f64,
    as_of: Option<DateTime<Utc>>,
) -> BTreeMap<String, f64> {
    let mut weights: BTreeMap<String, f64> = BTreeMap::new();

    let Some(reference) = as_of.or_else(|| events.iter().map(|e| e.timestamp).max()) else {
        return weights;
    };

    for event in events {
        let age_seconds = (reference - event.timestamp).num_seconds().max(0);
        let age_days = age_seconds as f64 / 86_400.0;
        let decay = 0.5_f64.powf(age_days / half_life_days);
        let contribution = event.kind.multiplier() * decay;
        if !(contribution.is_finite() && contribution > 0.0) {
            continue;
        }

        for token in event_tokens(event) {
            *weights.entry(token).or_insert(0.0) += contribution;
        }
    }

    tracing::trace!(
        target: "pathwise::context",
        events = events.len(),
        tokens = weights.len(),
        "Folded recent activity"
    );

    weights
}

/// Distinct tokens carried by an event's metadata.
fn event_tokens(event: &ActivityEvent) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    if let Some(metadata) = &event.metadata {
        collect_tokens(metadata, &mut tokens);
    }
    tokens
}

fn collect_tokens(value: &Value, tokens: &mut BTreeSet<String>) {
    match value {
        Value::String(text) => {
            let words = extract_keywords(text);
            let phrase = text.trim().to_lowercase();
            let word_count = phrase.split_whitespace().count();
            if word_count > 1 && word_count <= MAX_PHRASE_WORDS {
                tokens.insert(phrase);
            }
            tokens.extend(words);
        }
        Value::Array(items) => items.iter().for_each(|item| collect_tokens(item, tokens)),
        Value::Object(map) => map.values().for_each(|item| collect_tokens(item, tokens)),
        _ => {}
    }
}

/// Extract keywords from free text.
pub(crate) fn extract_keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '-' && c != '_' && c != '+' && c != '#')
        .filter(|s| s.chars().count() >= 2)
        .filter(|s| !is_stop_word(s))
        .map(|s| s.to_string())
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    const STOP_WORDS: &[&str] = &[
        "the", "and", "for", "that", "this", "with", "are", "was", "were", "been", "have", "has",
        "had", "not", "but", "can", "from", "into", "about", "than", "then", "when", "where",
        "what", "which", "who", "how", "all", "each", "some", "such", "only", "just", "also",
        "very", "of", "to", "in", "on", "at", "by", "an", "or", "is", "it", "as", "be", "my",
        "your", "intro", "introduction", "guide", "part",
    ];
    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn at(days_ago: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() - Duration::days(days_ago)
    }

    fn event(kind: ActivityKind, days_ago: i64, metadata: Value) -> ActivityEvent {
        ActivityEvent::new(kind, at(days_ago)).with_metadata(metadata)
    }

    #[test]
    fn test_no_events_no_weights() {
        assert!(fold_activity(&[], 14.0, None).is_empty());
    }

    #[test]
    fn test_newest_event_has_full_weight() {
        let events = vec![event(ActivityKind::Bookmarked, 0, json!({"topic": "rust"}))];
        let weights = fold_activity(&events, 14.0, None);
        assert!((weights["rust"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_half_life_halves_weight() {
        let events = vec![
            event(ActivityKind::Bookmarked, 0, json!({"topic": "rust"})),
            event(ActivityKind::Bookmarked, 14, json!({"topic": "golang"})),
        ];
        let weights = fold_activity(&events, 14.0, None);
        assert!((weights["golang"] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_as_of_measures_age_from_fixed_instant() {
        let events = vec![event(ActivityKind::Bookmarked, 14, json!({"topic": "rust"}))];
        let weights = fold_activity(&events, 14.0, Some(at(0)));
        assert!((weights["rust"] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_later_event_never_lowers_weight_with_fixed_as_of() {
        let older = event(ActivityKind::Completed, 100, json!({"topic": "rust"}));
        let newer = event(ActivityKind::Viewed, 0, json!({"topic": "rust"}));

        let before = fold_activity(&[older.clone()], 14.0, Some(at(0)));
        let after = fold_activity(&[older, newer], 14.0, Some(at(0)));
        assert!(after["rust"] >= before["rust"]);
    }

    #[test]
    fn test_events_after_as_of_count_in_full() {
        let events = vec![event(ActivityKind::Bookmarked, 0, json!({"topic": "go"}))];
        let weights = fold_activity(&events, 14.0, Some(at(3)));
        assert!((weights["go"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_repetition_increases_weight() {
        let once = vec![event(ActivityKind::Viewed, 0, json!({"topic": "sql"}))];
        let twice = vec![
            event(ActivityKind::Viewed, 0, json!({"topic": "sql"})),
            event(ActivityKind::Viewed, 3, json!({"topic": "sql"})),
        ];
        let once = fold_activity(&once, 14.0, None);
        let twice = fold_activity(&twice, 14.0, None);
        assert!(twice["sql"] > once["sql"]);
    }

    #[test]
    fn test_recent_outweighs_older() {
        let events = vec![
            event(ActivityKind::Viewed, 0, json!({"topic": "docker"})),
            event(ActivityKind::Viewed, 10, json!({"topic": "kubernetes"})),
        ];
        let weights = fold_activity(&events, 14.0, None);
        assert!(weights["docker"] > weights["kubernetes"]);
    }

    #[test]
    fn test_kind_multiplier_applies() {
        let events = vec![
            event(ActivityKind::Completed, 0, json!({"topic": "python"})),
            event(ActivityKind::Viewed, 0, json!({"topic": "java"})),
        ];
        let weights = fold_activity(&events, 14.0, None);
        assert!((weights["python"] - 1.5).abs() < 1e-9);
        assert!((weights["java"] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_nested_metadata_and_phrases() {
        let events = vec![event(
            ActivityKind::Searched,
            0,
            json!({"query": "Machine Learning", "filters": {"tags": ["AI/ML", 3]}}),
        )];
        let weights = fold_activity(&events, 14.0, None);
        assert!(weights.contains_key("machine learning"));
        assert!(weights.contains_key("machine"));
        assert!(weights.contains_key("learning"));
        assert!(weights.contains_key("ai"));
        assert!(weights.contains_key("ml"));
    }

    #[test]
    fn test_tokens_counted_once_per_event() {
        let events = vec![event(
            ActivityKind::Bookmarked,
            0,
            json!({"title": "rust", "topic": "rust"}),
        )];
        let weights = fold_activity(&events, 14.0, None);
        assert!((weights["rust"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_event_without_metadata_contributes_nothing() {
        let events = vec![ActivityEvent::new(ActivityKind::Completed, at(0))];
        assert!(fold_activity(&events, 14.0, None).is_empty());
    }

    #[test]
    fn test_extract_keywords_keeps_language_names() {
        let words = extract_keywords("Intro to C++ and C# for the web");
        assert_eq!(words, vec!["c++", "c#", "web"]);
    }

    #[test]
    fn test_activity_kind_aliases() {
        let kind: ActivityKind = serde_json::from_str("\"page-view\"").unwrap();
        assert_eq!(kind, ActivityKind::Viewed);
        let kind: ActivityKind = serde_json::from_str("\"shared\"").unwrap();
        assert_eq!(kind, ActivityKind::Other);
    }

    #[test]
    fn test_event_json_shape() {
        let event: ActivityEvent = serde_json::from_str(
            r#"{"type": "completed", "timestamp": "2024-06-01T12:00:00Z", "content_id": "c-1"}"#,
        )
        .unwrap();
        assert_eq!(event.kind, ActivityKind::Completed);
        assert_eq!(event.content_id.as_deref(), Some("c-1"));
        assert!(event.metadata.is_none());
    }
}
