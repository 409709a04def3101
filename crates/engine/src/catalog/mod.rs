//! Catalog item shapes and the shared facets the scorers read.
//!
//! Each domain keeps its own record type. Scorers never inspect those types
//! directly: every record projects itself onto [`ItemFacets`] through the
//! [`Catalog`] trait, and [`CatalogItem`] closes the set of domains when a
//! heterogeneous list is needed.

mod items;
pub(crate) mod lenient;

pub use items::{Category, Certification, Degree, Exam, LearningPath, SearchResult};

use crate::types::Level;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Catalog domain an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Categories,
    Exams,
    Certifications,
    LearningPaths,
    Degrees,
    Resources,
}

impl Domain {
    /// Snake-case label used in logs and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Exams => "exams",
            Self::Certifications => "certifications",
            Self::LearningPaths => "learning_paths",
            Self::Degrees => "degrees",
            Self::Resources => "resources",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of a learning resource returned by search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Youtube,
    Book,
    Course,
    Article,
    Podcast,
    /// Any other label, kept lowercase.
    Other(String),
}

impl ResourceKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Youtube => "youtube",
            Self::Book => "book",
            Self::Course => "course",
            Self::Article => "article",
            Self::Podcast => "podcast",
            Self::Other(label) => label,
        }
    }
}

impl FromStr for ResourceKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Ok(match label.as_str() {
            "youtube" => Self::Youtube,
            "book" | "ebook" => Self::Book,
            "course" => Self::Course,
            "article" | "blog" => Self::Article,
            "podcast" => Self::Podcast,
            _ => Self::Other(label),
        })
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResourceKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(label
            .parse::<ResourceKind>()
            .unwrap_or_else(|never: Infallible| match never {}))
    }
}

/// The capability record every catalog item projects onto.
///
/// Absent data is represented by `None` or an empty slice and contributes
/// nothing to a score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFacets<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    /// Tags and related skills, in the item's own order.
    pub tags: Vec<&'a str>,
    pub difficulty: Option<Level>,
    pub relevant_backgrounds: &'a [String],
    pub education_levels: &'a [String],
    pub target_countries: &'a [String],
    /// Resource format; only search results carry one.
    pub kind: Option<&'a ResourceKind>,
    /// Explicit free flag, if the source provides one.
    pub free: Option<bool>,
}

impl ItemFacets<'_> {
    /// Whether the item is free: the explicit flag, else a mention of "free"
    /// in the description.
    pub fn is_free(&self) -> bool {
        self.free.unwrap_or_else(|| {
            self.description
                .is_some_and(|d| d.to_lowercase().contains("free"))
        })
    }

    /// Title and description joined for keyword matching, lowercased.
    pub fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.title.unwrap_or_default(),
            self.description.unwrap_or_default()
        )
        .to_lowercase()
    }

    /// Human-facing name, falling back to an empty string.
    pub fn display_name(&self) -> &str {
        self.title.unwrap_or_default()
    }
}

/// A rankable catalog record.
pub trait Catalog {
    /// Domain the record belongs to.
    fn domain(&self) -> Domain;

    /// Project the record onto the shared facets.
    fn facets(&self) -> ItemFacets<'_>;
}

impl<T: Catalog + ?Sized> Catalog for &T {
    fn domain(&self) -> Domain {
        (**self).domain()
    }

    fn facets(&self) -> ItemFacets<'_> {
        (**self).facets()
    }
}

/// Closed set of catalog records from every domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "domain", rename_all = "snake_case")]
pub enum CatalogItem {
    Category(Category),
    Exam(Exam),
    Certification(Certification),
    LearningPath(LearningPath),
    Degree(Degree),
    SearchResult(SearchResult),
}

impl Catalog for CatalogItem {
    fn domain(&self) -> Domain {
        match self {
            Self::Category(item) => item.domain(),
            Self::Exam(item) => item.domain(),
            Self::Certification(item) => item.domain(),
            Self::LearningPath(item) => item.domain(),
            Self::Degree(item) => item.domain(),
            Self::SearchResult(item) => item.domain(),
        }
    }

    fn facets(&self) -> ItemFacets<'_> {
        match self {
            Self::Category(item) => item.facets(),
            Self::Exam(item) => item.facets(),
            Self::Certification(item) => item.facets(),
            Self::LearningPath(item) => item.facets(),
            Self::Degree(item) => item.facets(),
            Self::SearchResult(item) => item.facets(),
        }
    }
}

macro_rules! impl_from_item {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for CatalogItem {
                fn from(item: $variant) -> Self {
                    Self::$variant(item)
                }
            }
        )*
    };
}

impl_from_item!(Category, Exam, Certification, LearningPath, Degree, SearchResult);
