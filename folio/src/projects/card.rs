//! Project card model.

use crate::github::RepositoryRecord;
use crate::projects::{repo_category, tech_tags, Category};
use serde::Serialize;

/// Shown when a repository has no description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Everything one project card displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,

    /// "View Code" link.
    pub code_url: String,

    /// "Live Demo" link, only for repositories with a homepage.
    pub demo_url: Option<String>,
}

impl ProjectCard {
    /// Builds the card for a repository.
    #[must_use]
    pub fn from_repository(repo: &RepositoryRecord) -> Self {
        Self {
            title: repo.name.clone(),
            description: repo.description().unwrap_or(NO_DESCRIPTION).to_string(),
            category: repo_category(repo.primary_language.as_deref()),
            tags: tech_tags(repo),
            code_url: repo.repository_url.clone(),
            demo_url: repo.homepage().map(str::to_string),
        }
    }
}
