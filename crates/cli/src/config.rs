//! Configuration file support for pathwise.
//!
//! Loads settings from `~/.pathwise/config.toml` (or the file named by
//! `PATHWISE_CONFIG`) with the following precedence:
//! CLI arguments > Environment variables > Config file > Defaults
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.pathwise/config.toml
//!
//! [explore]
//! # Results per domain
//! limit = 6
//! # Per-domain overrides
//! exams = 3
//!
//! [weights]
//! # Generic catalog scorer; every weight must be non-negative
//! base = 10.0
//! skill_match = 5.0
//! level_exact = 3.0
//! level_adjacent = 1.5
//!
//! [activity]
//! # Days after which an activity event counts half
//! half_life_days = 14.0
//! ```

use anyhow::{Context, Result};
use pathwise_engine::{CatalogWeights, ContextOptions, ExploreLimits};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PATHWISE_CONFIG";
/// Environment variable overriding `[explore] limit`.
pub const LIMIT_ENV: &str = "PATHWISE_EXPLORE_LIMIT";

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Result limits for `explore` and `search`.
    pub explore: ExploreConfig,
    /// Weights for the generic catalog scorer.
    pub weights: CatalogWeights,
    /// Context building tunables.
    pub activity: ContextOptions,
}

/// The `[explore]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    pub limit: Option<usize>,
    pub categories: Option<usize>,
    pub exams: Option<usize>,
    pub certifications: Option<usize>,
    pub learning_paths: Option<usize>,
    pub degrees: Option<usize>,
    pub resources: Option<usize>,
}

impl ExploreConfig {
    /// Resolve per-domain limits.
    ///
    /// A `--limit` flag applies to every domain and drops the file's
    /// per-domain overrides. Otherwise `PATHWISE_EXPLORE_LIMIT`, then the
    /// file's `limit`, set the default that overrides fall back to.
    pub fn resolve(&self, flag: Option<usize>) -> ExploreLimits {
        if let Some(limit) = flag {
            return ExploreLimits::uniform(limit);
        }

        let base = ExploreLimits::default();
        ExploreLimits {
            limit: env_limit().or(self.limit).unwrap_or(base.limit),
            categories: self.categories,
            exams: self.exams,
            certifications: self.certifications,
            learning_paths: self.learning_paths,
            degrees: self.degrees,
            resources: self.resources,
        }
    }
}

fn env_limit() -> Option<usize> {
    let raw = std::env::var(LIMIT_ENV).ok()?;
    match raw.trim().parse() {
        Ok(limit) => Some(limit),
        Err(_) => {
            tracing::warn!(
                target: "pathwise::config",
                key = LIMIT_ENV,
                value = %raw,
                "Ignoring non-numeric limit"
            );
            None
        }
    }
}

/// Returns the path to the config file.
///
/// `PATHWISE_CONFIG` wins when set; otherwise `~/.pathwise/config.toml`.
/// The flag tells whether the path was named explicitly.
fn config_path() -> Option<(PathBuf, bool)> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some((PathBuf::from(explicit), true));
    }
    dirs::home_dir().map(|h| (h.join(".pathwise").join("config.toml"), false))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the default file doesn't exist.
/// Returns `Ok(Some(config))` if the file exists, parses and its weights
/// validate.
/// Returns `Err` if the file fails to parse or validate, or if
/// `PATHWISE_CONFIG` names a missing file.
pub fn load_config() -> Result<Option<Config>> {
    let Some((path, explicit)) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        if explicit {
            anyhow::bail!("config file {} does not exist", path.display());
        }
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    config
        .weights
        .validate()
        .with_context(|| format!("invalid [weights] in {}", path.display()))?;

    tracing::debug!(
        target: "pathwise::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}
