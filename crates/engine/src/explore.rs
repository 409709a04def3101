//! Build the personalized explore page: one independent ranking per domain.

use crate::catalog::{
    lenient, Category, Certification, Degree, Domain, Exam, LearningPath, SearchResult,
};
use crate::context::UserContext;
use crate::rank::{rank_and_truncate, ScoredItem};
use crate::recommend::{CatalogScorer, CatalogWeights, ResourceScorer};
use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: usize = 6;

/// Already-fetched candidate lists, one per domain.
///
/// Each list decodes entry by entry; an entry of the wrong shape is skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSet {
    #[serde(deserialize_with = "lenient::item_list")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with = "lenient::item_list")]
    pub exams: Vec<Exam>,
    #[serde(deserialize_with = "lenient::item_list")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "lenient::item_list")]
    pub learning_paths: Vec<LearningPath>,
    #[serde(deserialize_with = "lenient::item_list")]
    pub degrees: Vec<Degree>,
    /// Trending or search results.
    #[serde(deserialize_with = "lenient::item_list")]
    pub resources: Vec<SearchResult>,
}

impl CatalogSet {
    /// Total number of candidates across all domains.
    pub fn len(&self) -> usize {
        self.categories.len()
            + self.exams.len()
            + self.certifications.len()
            + self.learning_paths.len()
            + self.degrees.len()
            + self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How many results each domain keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreLimits {
    /// Default for every domain without an override.
    pub limit: usize,
    pub categories: Option<usize>,
    pub exams: Option<usize>,
    pub certifications: Option<usize>,
    pub learning_paths: Option<usize>,
    pub degrees: Option<usize>,
    pub resources: Option<usize>,
}

impl Default for ExploreLimits {
    fn default() -> Self {
        Self::uniform(DEFAULT_LIMIT)
    }
}

impl ExploreLimits {
    /// The same limit for every domain.
    pub fn uniform(limit: usize) -> Self {
        Self {
            limit,
            categories: None,
            exams: None,
            certifications: None,
            learning_paths: None,
            degrees: None,
            resources: None,
        }
    }

    /// Effective limit for a domain.
    pub fn for_domain(&self, domain: Domain) -> usize {
        let specific = match domain {
            Domain::Categories => self.categories,
            Domain::Exams => self.exams,
            Domain::Certifications => self.certifications,
            Domain::LearningPaths => self.learning_paths,
            Domain::Degrees => self.degrees,
            Domain::Resources => self.resources,
        };
        specific.unwrap_or(self.limit)
    }
}

/// Ranked sections of the explore page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExplorePage {
    pub categories: Vec<ScoredItem<Category>>,
    pub exams: Vec<ScoredItem<Exam>>,
    pub certifications: Vec<ScoredItem<Certification>>,
    pub learning_paths: Vec<ScoredItem<LearningPath>>,
    pub degrees: Vec<ScoredItem<Degree>>,
    pub resources: Vec<ScoredItem<SearchResult>>,
}

impl ExplorePage {
    /// Number of ranked items across all sections.
    pub fn len(&self) -> usize {
        self.categories.len()
            + self.exams.len()
            + self.certifications.len()
            + self.learning_paths.len()
            + self.degrees.len()
            + self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rank every domain of `catalogs` for `ctx`.
///
/// Catalog domains use the generic scorer with `weights`; resources use the
/// fixed search heuristics. Each domain is ranked on its own, so one domain's
/// candidates never affect another's results.
pub fn build_explore_page(
    ctx: &UserContext,
    catalogs: CatalogSet,
    limits: &ExploreLimits,
    weights: &CatalogWeights,
) -> ExplorePage {
    let scorer = CatalogScorer::new().with_weights(*weights);
    let CatalogSet {
        categories,
        exams,
        certifications,
        learning_paths,
        degrees,
        resources,
    } = catalogs;

    let page = ExplorePage {
        categories: section(Domain::Categories, categories, ctx, &scorer, limits),
        exams: section(Domain::Exams, exams, ctx, &scorer, limits),
        certifications: section(Domain::Certifications, certifications, ctx, &scorer, limits),
        learning_paths: section(Domain::LearningPaths, learning_paths, ctx, &scorer, limits),
        degrees: section(Domain::Degrees, degrees, ctx, &scorer, limits),
        resources: section(Domain::Resources, resources, ctx, &ResourceScorer, limits),
    };

    tracing::debug!(target: "pathwise::rank", items = page.len(), "Built explore page");

    page
}

fn section<T, S>(
    domain: Domain,
    items: Vec<T>,
    ctx: &UserContext,
    scorer: &S,
    limits: &ExploreLimits,
) -> Vec<ScoredItem<T>>
where
    S: crate::rank::Scorer<T>,
{
    let candidates = items.len();
    let limit = limits.for_domain(domain);
    let ranked = rank_and_truncate(items, ctx, scorer, Some(limit));

    tracing::debug!(
        target: "pathwise::rank",
        %domain,
        candidates,
        returned = ranked.len(),
        limit,
        "Ranked domain"
    );

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResourceKind;
    use crate::types::Level;

    fn category(name: &str, skills: &[&str]) -> Category {
        Category {
            name: Some(name.to_string()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn catalogs() -> CatalogSet {
        CatalogSet {
            categories: vec![
                category("Design", &["figma"]),
                category("Web Development", &["react", "css"]),
                category("Data", &["sql"]),
            ],
            resources: vec![
                SearchResult::new("Figma tour", "Paid", ResourceKind::Article),
                SearchResult::new("React for Beginners", "A free course", ResourceKind::Youtube),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_limits_overrides() {
        let limits = ExploreLimits {
            exams: Some(2),
            ..ExploreLimits::uniform(4)
        };
        assert_eq!(limits.for_domain(Domain::Exams), 2);
        assert_eq!(limits.for_domain(Domain::Degrees), 4);
        assert_eq!(ExploreLimits::default().for_domain(Domain::Resources), DEFAULT_LIMIT);
    }

    #[test]
    fn test_explore_page_ranks_each_domain() {
        let ctx = UserContext::new()
            .with_level(Level::Beginner)
            .with_skill("react")
            .with_prefers_free(true);

        let page = build_explore_page(
            &ctx,
            catalogs(),
            &ExploreLimits::uniform(2),
            &CatalogWeights::default(),
        );

        assert_eq!(page.categories.len(), 2);
        assert_eq!(
            page.categories[0].item.name.as_deref(),
            Some("Web Development")
        );
        // Remaining categories tie at the base score and keep input order
        assert_eq!(page.categories[1].item.name.as_deref(), Some("Design"));

        assert_eq!(page.resources[0].score, 25.0);
        assert!(page.resources[0].reason.is_some());
        assert!(page.exams.is_empty());
        assert_eq!(page.len(), 4);
    }

    #[test]
    fn test_domains_are_independent() {
        let ctx = UserContext::new().with_skill("react");
        let limits = ExploreLimits::default();
        let weights = CatalogWeights::default();

        let full = build_explore_page(&ctx, catalogs(), &limits, &weights);
        let only_categories = build_explore_page(
            &ctx,
            CatalogSet {
                categories: catalogs().categories,
                ..Default::default()
            },
            &limits,
            &weights,
        );

        assert_eq!(full.categories, only_categories.categories);
    }

    #[test]
    fn test_bad_entry_skipped_without_emptying_other_items() {
        let set: CatalogSet = serde_json::from_value(serde_json::json!({
            "categories": [{"name": "Web"}, "oops", 4, {"name": "Data"}],
            "exams": [{"name": "GRE"}],
            "resources": {"title": "not a list"}
        }))
        .unwrap();

        let names: Vec<_> = set
            .categories
            .iter()
            .filter_map(|c| c.name.as_deref())
            .collect();
        assert_eq!(names, vec!["Web", "Data"]);
        assert_eq!(set.exams.len(), 1);
        assert!(set.resources.is_empty());
    }

    #[test]
    fn test_empty_catalogs_empty_page() {
        let page = build_explore_page(
            &UserContext::new(),
            CatalogSet::default(),
            &ExploreLimits::default(),
            &CatalogWeights::default(),
        );
        assert!(page.is_empty());
        assert!(CatalogSet::default().is_empty());
    }
}
