//! Shared test utilities for pathwise crates.
//!
//! This crate provides common test fixtures and utilities used across
//! multiple crates in the pathwise workspace: sample contexts and catalogs,
//! snapshot files on disk, and guards for process environment.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pathwise_engine::{
    ActivityEvent, ActivityKind, Background, CatalogSet, Category, Certification, Degree, Exam,
    LearningPath, Level, ResourceKind, SearchResult, UserContext,
};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// RAII guard for environment variables - restores original value on drop.
///
/// Tests that touch the environment run under `#[serial]` from `serial_test`.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = pathwise_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

// -----------------------------------------------------------------------------
// Engine fixtures
// -----------------------------------------------------------------------------

/// Fixed reference instant so activity fixtures are deterministic.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// An activity event `days_ago` days before [`reference_time`].
pub fn event(kind: ActivityKind, days_ago: i64, metadata: Value) -> ActivityEvent {
    ActivityEvent::new(kind, reference_time() - Duration::days(days_ago)).with_metadata(metadata)
}

/// A beginner web developer who prefers free content.
pub fn sample_context() -> UserContext {
    UserContext::new()
        .with_level(Level::Beginner)
        .with_background(Background::Student)
        .with_education_level("undergraduate")
        .with_country("IN")
        .with_skill("react")
        .with_skill("javascript")
        .with_goal("become a frontend developer")
        .with_prefers_free(true)
        .with_activity_weight("css", 1.2)
}

/// A small catalog covering every domain.
pub fn sample_catalogs() -> CatalogSet {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    CatalogSet {
        categories: vec![
            Category {
                name: Some("Web Development".to_string()),
                skills: strings(&["react", "css", "javascript"]),
                relevant_backgrounds: strings(&["student"]),
                difficulty: Some(Level::Beginner),
                ..Default::default()
            },
            Category {
                name: Some("Data Science".to_string()),
                skills: strings(&["python", "sql"]),
                ..Default::default()
            },
            Category {
                name: Some("Cybersecurity".to_string()),
                skills: strings(&["networking"]),
                difficulty: Some(Level::Advanced),
                ..Default::default()
            },
        ],
        exams: vec![
            Exam {
                name: Some("JEE Main".to_string()),
                subjects: strings(&["physics", "chemistry", "mathematics"]),
                education_levels: strings(&["high school"]),
                target_countries: strings(&["IN"]),
                ..Default::default()
            },
            Exam {
                name: Some("GRE".to_string()),
                subjects: strings(&["verbal", "quantitative"]),
                education_levels: strings(&["undergraduate"]),
                target_countries: strings(&["US"]),
                ..Default::default()
            },
        ],
        certifications: vec![Certification {
            title: Some("Meta Front-End Developer".to_string()),
            provider: Some("Meta".to_string()),
            skills: strings(&["react", "javascript", "html"]),
            level: Some(Level::Beginner),
            ..Default::default()
        }],
        learning_paths: vec![LearningPath {
            title: Some("Frontend Foundations".to_string()),
            description: Some("Free path from HTML to React".to_string()),
            tags: strings(&["html", "css", "react"]),
            difficulty: Some(Level::Beginner),
            ..Default::default()
        }],
        degrees: vec![Degree {
            title: Some("B.Tech Computer Science".to_string()),
            field: Some("computer science".to_string()),
            education_levels: strings(&["high school"]),
            target_countries: strings(&["IN"]),
            ..Default::default()
        }],
        resources: vec![
            SearchResult::new("Advanced Rust", "Expert material", ResourceKind::Book),
            SearchResult::new(
                "React for Beginners",
                "A free course",
                ResourceKind::Youtube,
            ),
            SearchResult::new(
                "JavaScript Certificate",
                "Earn a certificate",
                ResourceKind::Course,
            ),
        ],
    }
}

/// Snapshot JSON in the shape the `pathwise` binary reads.
pub fn sample_snapshot_json() -> Value {
    json!({
        "profile": {
            "experience_level": "beginner",
            "background": "student",
            "education_level": "undergraduate",
            "country": "IN",
            "skills": ["React", "JavaScript"],
            "learning_goals": ["become a frontend developer", "UI"]
        },
        "preferences": { "prefers_free": true, "interests": ["web design"] },
        "activity": [
            {
                "type": "completed",
                "timestamp": "2024-06-01T12:00:00Z",
                "metadata": { "tags": ["css", "html"] }
            },
            { "type": "viewed", "timestamp": "not a date" }
        ],
        "catalogs": serde_json::to_value(sample_catalogs()).unwrap_or(Value::Null)
    })
}

// -----------------------------------------------------------------------------
// Filesystem fixture
// -----------------------------------------------------------------------------

/// Standard test fixture with a temporary HOME and config directory.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// Path to ~/.pathwise in the temp environment
    pub config_dir: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with `$HOME/.pathwise/`.
    ///
    /// Does NOT set HOME env var - use `home_guard()` for that.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let config_dir = tempdir.path().join(".pathwise");
        std::fs::create_dir_all(&config_dir)?;

        Ok(Self {
            tempdir,
            config_dir,
        })
    }

    /// Get the path that should be set as HOME.
    pub fn home_path(&self) -> &Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(&self.home_path().to_string_lossy()))
    }

    /// Write `~/.pathwise/config.toml`.
    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.config_dir.join("config.toml");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write a snapshot file and return its path.
    pub fn write_snapshot(&self, name: &str, snapshot: &Value) -> std::io::Result<PathBuf> {
        let path = self.tempdir.path().join(name);
        let body = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&path, body)?;
        Ok(path)
    }
}
