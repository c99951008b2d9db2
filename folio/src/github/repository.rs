//! Repository as returned by `GET /users/{username}/repos`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A live or sample repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,

    pub description: Option<String>,

    #[serde(rename = "language")]
    pub primary_language: Option<String>,

    #[serde(rename = "fork", default)]
    pub is_fork: bool,

    /// Project homepage. GitHub reports an unset homepage as `""` or `null`.
    #[serde(rename = "homepage")]
    pub homepage_url: Option<String>,

    #[serde(rename = "updated_at")]
    pub last_updated_at: DateTime<Utc>,

    #[serde(rename = "html_url")]
    pub repository_url: String,

    pub topics: Option<Vec<String>>,
}

impl RepositoryRecord {
    /// Returns the description if it is present and non-empty.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Returns the homepage if it is present and non-empty.
    #[must_use]
    pub fn homepage(&self) -> Option<&str> {
        self.homepage_url.as_deref().filter(|h| !h.is_empty())
    }

    /// Lowercased "{name} {description}" used for keyword matching.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description.as_deref().unwrap_or("")).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_api_shape() {
        let json = r#"{
            "name": "Hello-World",
            "description": "My first repository",
            "language": null,
            "fork": false,
            "homepage": "",
            "updated_at": "2024-03-01T12:00:00Z",
            "html_url": "https://github.com/octocat/Hello-World",
            "topics": ["octocat", "hello-world"],
            "stargazers_count": 80
        }"#;

        let repo: RepositoryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.primary_language, None);
        assert!(!repo.is_fork);
        assert_eq!(repo.homepage(), None);
        assert_eq!(
            repo.topics,
            Some(vec!["octocat".to_string(), "hello-world".to_string()])
        );
    }

    #[test]
    fn empty_description_counts_as_absent() {
        let json = r#"{
            "name": "x",
            "description": "",
            "updated_at": "2024-03-01T12:00:00Z",
            "html_url": "https://github.com/octocat/x"
        }"#;

        let repo: RepositoryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(repo.description(), None);
        assert_eq!(repo.topics, None);
        assert_eq!(repo.search_text(), "x ");
    }

    #[test]
    fn search_text_is_lowercase() {
        let json = r#"{
            "name": "MyAPI",
            "description": "A React Frontend",
            "updated_at": "2024-03-01T12:00:00Z",
            "html_url": "https://github.com/octocat/MyAPI"
        }"#;

        let repo: RepositoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(repo.search_text(), "myapi a react frontend");
    }
}
