//! Forgiving field decoders for catalog and profile records.
//!
//! Upstream data comes from several hosted tables with loose typing. A field
//! holding the wrong JSON type decodes as absent instead of failing the whole
//! record, so one malformed item only loses the signals it cannot provide.

use super::ResourceKind;
use crate::types::Level;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a list of strings.
///
/// Accepts an array (non-string entries are skipped), a comma-separated
/// string, or null. Anything else decodes as an empty list.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::String(_) => None,
                other => {
                    tracing::warn!(
                        target: "pathwise::catalog",
                        kind = value_kind(&other),
                        "Skipping non-string list entry"
                    );
                    None
                }
            })
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(
                target: "pathwise::catalog",
                kind = value_kind(&other),
                "Expected a string list, treating as empty"
            );
            Vec::new()
        }
    })
}

/// Decode optional free text. Numbers are rendered, blank strings are absent.
pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => None,
        other => {
            tracing::warn!(
                target: "pathwise::catalog",
                kind = value_kind(&other),
                "Expected text, treating as absent"
            );
            None
        }
    })
}

/// Decode an optional level from its textual name.
pub(crate) fn opt_level<'de, D>(deserializer: D) -> Result<Option<Level>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => match s.parse::<Level>() {
            Ok(level) => Some(level),
            Err(err) => {
                tracing::warn!(target: "pathwise::catalog", %err, "Ignoring level");
                None
            }
        },
        Value::Null => None,
        other => {
            tracing::warn!(
                target: "pathwise::catalog",
                kind = value_kind(&other),
                "Expected a level name, treating as absent"
            );
            None
        }
    })
}

/// Decode an optional resource format. Any string is accepted.
pub(crate) fn opt_kind<'de, D>(deserializer: D) -> Result<Option<ResourceKind>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.and_then(|label| label.parse().ok()))
}

/// Decode an optional flag from a boolean, `0`/`1`, or `"true"`/`"yes"` style text.
pub(crate) fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Decode a list of records one entry at a time.
///
/// Entries that fail to decode are skipped with a warning, so one bad item
/// never empties the rest of its list. A non-list decodes as empty.
pub(crate) fn item_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!(
                target: "pathwise::catalog",
                kind = value_kind(&other),
                "Expected a list of items, treating as empty"
            );
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let kind = value_kind(&item);
            match serde_json::from_value(item) {
                Ok(decoded) => Some(decoded),
                Err(err) => {
                    tracing::warn!(
                        target: "pathwise::catalog",
                        index,
                        kind,
                        error = %err,
                        "Skipping malformed item"
                    );
                    None
                }
            }
        })
        .collect())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
