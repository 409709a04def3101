//! Snapshot files: one user's records plus candidate catalogs, as JSON.
//!
//! Every top-level key is optional. A section with the wrong shape is
//! logged and replaced by its empty value. Activity events and catalog
//! entries that fail to decode are skipped one by one, so a partly broken
//! export still ranks.
//!
//! An optional `as_of` timestamp pins the instant activity ages are measured
//! from; without it the newest event is used.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use pathwise_engine::{
    build_user_context_with, ActivityEvent, CatalogSet, ContextOptions, PreferenceRecord,
    ProfileRecord, UserContext,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    #[serde(deserialize_with = "section")]
    pub profile: Option<ProfileRecord>,
    #[serde(deserialize_with = "section")]
    pub preferences: Option<PreferenceRecord>,
    #[serde(deserialize_with = "events")]
    pub activity: Vec<ActivityEvent>,
    #[serde(deserialize_with = "section")]
    pub catalogs: CatalogSet,
    #[serde(deserialize_with = "section")]
    pub as_of: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("snapshot is not a JSON object")
    }

    /// Derive the user context with the given options.
    ///
    /// The snapshot's `as_of` wins over one set in `options`.
    pub fn user_context(&self, options: &ContextOptions) -> UserContext {
        let options = ContextOptions {
            as_of: self.as_of.or(options.as_of),
            ..*options
        };
        build_user_context_with(
            self.profile.as_ref(),
            self.preferences.as_ref(),
            &self.activity,
            &options,
        )
    }
}

/// Read and parse a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = Snapshot::from_json(&text)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

    tracing::debug!(
        target: "pathwise::snapshot",
        path = %path.display(),
        events = snapshot.activity.len(),
        candidates = snapshot.catalogs.len(),
        "Loaded snapshot"
    );

    Ok(snapshot)
}

fn section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|err| {
        tracing::warn!(target: "pathwise::snapshot", error = %err, "Ignoring malformed section");
        T::default()
    }))
}

fn events<'de, D>(deserializer: D) -> Result<Vec<ActivityEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        tracing::warn!(target: "pathwise::snapshot", "Activity is not a list, ignoring it");
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::warn!(
                    target: "pathwise::snapshot",
                    index,
                    error = %err,
                    "Skipping malformed activity event"
                );
                None
            }
        })
        .collect())
}
