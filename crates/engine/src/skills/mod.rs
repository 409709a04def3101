//! Resolve a category or domain label to its canonical skill checklist.
//!
//! Resolution order:
//! 1. exact key match
//! 2. case-insensitive substring match in either direction, first table
//!    entry wins
//! 3. the fixed [`DEFAULT_SKILLS`] list
//!
//! A missing or blank label resolves to an empty list, which callers can
//! tell apart from the default list returned for unmatched labels.

mod table;

pub use table::DEFAULT_SKILLS;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Ordered lookup from domain label to skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSkillTable {
    entries: Vec<(String, Vec<String>)>,
    default: Vec<String>,
}

static BUILTIN: LazyLock<DomainSkillTable> = LazyLock::new(|| {
    DomainSkillTable::new(
        table::BUILTIN_DOMAINS
            .iter()
            .map(|(domain, skills)| (domain.to_string(), owned_list(skills)))
            .collect(),
        owned_list(&DEFAULT_SKILLS),
    )
});

fn owned_list(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}

impl DomainSkillTable {
    /// Build a table from caller-supplied content. Entry order is lookup order.
    pub fn new(entries: Vec<(String, Vec<String>)>, default: Vec<String>) -> Self {
        Self { entries, default }
    }

    /// The built-in table.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Domain labels in lookup order.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(domain, _)| domain.as_str())
    }

    /// The fallback list for unmatched labels.
    pub fn default_skills(&self) -> &[String] {
        &self.default
    }

    /// Find the table entry a label resolves to, if any.
    pub fn lookup(&self, label: &str) -> Option<(&str, &[String])> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }

        if let Some((domain, skills)) = self.entries.iter().find(|(domain, _)| domain == label) {
            return Some((domain.as_str(), skills.as_slice()));
        }

        let needle = label.to_lowercase();
        self.entries
            .iter()
            .find(|(domain, _)| {
                let key = domain.to_lowercase();
                key.contains(&needle) || needle.contains(&key)
            })
            .map(|(domain, skills)| (domain.as_str(), skills.as_slice()))
    }

    /// Resolve a label to its skill list. Never fails.
    pub fn skills_for(&self, label: Option<&str>) -> &[String] {
        let Some(label) = label.filter(|l| !l.trim().is_empty()) else {
            return &[];
        };

        match self.lookup(label) {
            Some((domain, skills)) => {
                tracing::trace!(target: "pathwise::skills", label, domain, "Resolved domain");
                skills
            }
            None => {
                tracing::trace!(
                    target: "pathwise::skills",
                    label,
                    "No domain matched, using default"
                );
                &self.default
            }
        }
    }
}

impl Default for DomainSkillTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Resolve a label against the built-in table.
pub fn get_skills_for_domain(label: Option<&str>) -> Vec<String> {
    DomainSkillTable::builtin().skills_for(label).to_vec()
}

/// One row of a roadmap checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub skill: String,
    /// Whether the user already lists this skill.
    pub acquired: bool,
}

/// Pair each skill of a domain with whether the user already has it.
pub fn roadmap_checklist<S: AsRef<str>>(
    label: Option<&str>,
    known_skills: impl IntoIterator<Item = S>,
) -> Vec<ChecklistEntry> {
    let known: HashSet<String> = known_skills
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .collect();

    DomainSkillTable::builtin()
        .skills_for(label)
        .iter()
        .map(|skill| ChecklistEntry {
            acquired: known.contains(&skill.to_lowercase()),
            skill: skill.clone(),
        })
        .collect()
}
