//! Project model matching the frontend project card.

use serde::{Deserialize, Serialize};

/// A portfolio project. Seeded once and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
}

/// Exact-match filter over the projects collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
}

impl ProjectFilter {
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_optional_fields_default() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "title": "Title",
            "description": "Desc",
            "tech_stack": ["Rust"],
            "image_url": "https://example.com/p1.png",
            "category": "Systems"
        }))
        .unwrap();

        assert_eq!(project.github_url, None);
        assert_eq!(project.demo_url, None);
        assert!(!project.featured);
    }

    #[test]
    fn test_optional_urls_serialize_as_null() {
        let project = Project {
            id: "p1".to_string(),
            title: "Title".to_string(),
            description: "Desc".to_string(),
            tech_stack: vec!["Rust".to_string(), "SQLite".to_string()],
            image_url: "https://example.com/p1.png".to_string(),
            github_url: None,
            demo_url: None,
            category: "Systems".to_string(),
            featured: true,
        };

        let value = serde_json::to_value(&project).unwrap();
        assert!(value["github_url"].is_null());
        assert!(value["demo_url"].is_null());
        assert_eq!(value["tech_stack"], json!(["Rust", "SQLite"]));
    }
}
