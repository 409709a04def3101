//! Concrete record types for each catalog domain.

use super::{lenient, Catalog, Domain, ItemFacets, ResourceKind};
use crate::types::Level;
use serde::{Deserialize, Serialize};

/// A browsable subject category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub relevant_backgrounds: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_level")]
    pub difficulty: Option<Level>,
}

impl Catalog for Category {
    fn domain(&self) -> Domain {
        Domain::Categories
    }

    fn facets(&self) -> ItemFacets<'_> {
        ItemFacets {
            title: self.name.as_deref(),
            description: self.description.as_deref(),
            tags: self.skills.iter().map(String::as_str).collect(),
            difficulty: self.difficulty,
            relevant_backgrounds: &self.relevant_backgrounds,
            ..Default::default()
        }
    }
}

/// An entrance or qualifying exam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exam {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub subjects: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_level")]
    pub difficulty: Option<Level>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub relevant_backgrounds: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub education_levels: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub target_countries: Vec<String>,
}

impl Catalog for Exam {
    fn domain(&self) -> Domain {
        Domain::Exams
    }

    fn facets(&self) -> ItemFacets<'_> {
        ItemFacets {
            title: self.name.as_deref(),
            description: self.description.as_deref(),
            tags: self.subjects.iter().map(String::as_str).collect(),
            difficulty: self.difficulty,
            relevant_backgrounds: &self.relevant_backgrounds,
            education_levels: &self.education_levels,
            target_countries: &self.target_countries,
            ..Default::default()
        }
    }
}

/// A professional certification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub provider: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_level")]
    pub level: Option<Level>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub relevant_backgrounds: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub target_countries: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub is_free: Option<bool>,
}

impl Catalog for Certification {
    fn domain(&self) -> Domain {
        Domain::Certifications
    }

    fn facets(&self) -> ItemFacets<'_> {
        ItemFacets {
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            tags: self.skills.iter().map(String::as_str).collect(),
            difficulty: self.level,
            relevant_backgrounds: &self.relevant_backgrounds,
            target_countries: &self.target_countries,
            free: self.is_free,
            ..Default::default()
        }
    }
}

/// A curated sequence of courses toward a goal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningPath {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_level")]
    pub difficulty: Option<Level>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub relevant_backgrounds: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub is_free: Option<bool>,
}

impl Catalog for LearningPath {
    fn domain(&self) -> Domain {
        Domain::LearningPaths
    }

    fn facets(&self) -> ItemFacets<'_> {
        ItemFacets {
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            tags: self.tags.iter().map(String::as_str).collect(),
            difficulty: self.difficulty,
            relevant_backgrounds: &self.relevant_backgrounds,
            free: self.is_free,
            ..Default::default()
        }
    }
}

/// A university degree programme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Degree {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    /// Field of study, matched like a tag.
    #[serde(deserialize_with = "lenient::opt_string")]
    pub field: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub related_skills: Vec<String>,
    /// Education levels the programme admits from.
    #[serde(deserialize_with = "lenient::string_list")]
    pub education_levels: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub target_countries: Vec<String>,
}

impl Catalog for Degree {
    fn domain(&self) -> Domain {
        Domain::Degrees
    }

    fn facets(&self) -> ItemFacets<'_> {
        let mut tags: Vec<&str> = self.related_skills.iter().map(String::as_str).collect();
        if let Some(field) = self.field.as_deref() {
            tags.push(field);
        }

        ItemFacets {
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            tags,
            education_levels: &self.education_levels,
            target_countries: &self.target_countries,
            ..Default::default()
        }
    }
}

/// A free-text search hit for a learning resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::opt_kind")]
    pub kind: Option<ResourceKind>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
}

impl SearchResult {
    /// Convenience constructor for the common title/description/type triple.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ResourceKind,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            kind: Some(kind),
            ..Default::default()
        }
    }
}

impl Catalog for SearchResult {
    fn domain(&self) -> Domain {
        Domain::Resources
    }

    fn facets(&self) -> ItemFacets<'_> {
        ItemFacets {
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            tags: self.tags.iter().map(String::as_str).collect(),
            kind: self.kind.as_ref(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_field_joins_tags() {
        let degree = Degree {
            field: Some("Computer Science".to_string()),
            related_skills: vec!["algorithms".to_string()],
            ..Default::default()
        };
        assert_eq!(degree.facets().tags, vec!["algorithms", "Computer Science"]);
    }

    #[test]
    fn test_certification_level_maps_to_difficulty() {
        let cert = Certification {
            level: Some(Level::Advanced),
            is_free: Some(true),
            ..Default::default()
        };
        let facets = cert.facets();
        assert_eq!(facets.difficulty, Some(Level::Advanced));
        assert!(facets.is_free());
    }

    #[test]
    fn test_search_result_reads_type_key() {
        let result: SearchResult = serde_json::from_str(
            r#"{"title": "Rust Book", "description": "Official", "type": "book"}"#,
        )
        .unwrap();
        assert_eq!(result.kind, Some(ResourceKind::Book));
        assert_eq!(result.facets().kind, Some(&ResourceKind::Book));
    }

    #[test]
    fn test_malformed_exam_decodes_what_it_can() {
        let exam: Exam = serde_json::from_str(
            r#"{"name": "SAT", "subjects": 42, "difficulty": ["hard"], "target_countries": "US, CA"}"#,
        )
        .unwrap();
        assert_eq!(exam.name.as_deref(), Some("SAT"));
        assert!(exam.subjects.is_empty());
        assert!(exam.difficulty.is_none());
        assert_eq!(exam.target_countries, vec!["US", "CA"]);
    }

    #[test]
    fn test_search_result_new() {
        let result = SearchResult::new("Intro", "Start here", ResourceKind::Course);
        assert_eq!(result.title.as_deref(), Some("Intro"));
        assert_eq!(result.kind, Some(ResourceKind::Course));
    }
}
