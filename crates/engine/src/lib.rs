//! Personalized ranking of learning catalogs.
//!
//! This crate provides:
//! - A user context builder folding profile, preferences and recent activity
//!   into one scoring snapshot
//! - A generic catalog scorer over categories, exams, certifications,
//!   learning paths, degrees and search results
//! - The fixed-weight resource scorer used for free-text search results
//! - A domain-to-skill lookup for roadmap checklists
//! - Stable ranking with truncation, per domain or for a whole explore page
//!
//! Every operation is pure and synchronous: callers fetch inputs, the engine
//! scores and orders them, and nothing is cached or persisted in between.

pub mod catalog;
pub mod context;
pub mod error;
pub mod explore;
pub mod rank;
pub mod recommend;
pub mod skills;
mod types;

pub use catalog::{
    Catalog, CatalogItem, Category, Certification, Degree, Domain, Exam, ItemFacets,
    LearningPath, ResourceKind, SearchResult,
};
pub use context::{
    build_user_context, build_user_context_with, ActivityEvent, ActivityKind, Background,
    ContextOptions, PreferenceRecord, ProfileRecord, UserContext,
};
pub use error::{ParseLevelError, WeightsError};
pub use explore::{build_explore_page, CatalogSet, ExploreLimits, ExplorePage};
pub use rank::{rank_and_truncate, rank_with, Assessment, ScoredItem, Scorer};
pub use recommend::{
    assess_item, assess_search_result, generate_explanation, score_item, score_item_with,
    score_search_result, CatalogScorer, CatalogWeights, ResourceScorer, ScoreBreakdown,
    ScoreCard, Signal,
};
pub use skills::{
    get_skills_for_domain, roadmap_checklist, ChecklistEntry, DomainSkillTable,
    DEFAULT_SKILLS,
};
pub use types::Level;
