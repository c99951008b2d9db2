//! Project categories used by the gallery filter.

use serde::Serialize;
use std::fmt;

const WEB_LANGUAGES: &[&str] = &["HTML", "CSS", "JavaScript", "TypeScript", "Vue", "React"];
const PYTHON_LANGUAGES: &[&str] = &["Python"];
const JAVASCRIPT_LANGUAGES: &[&str] = &["JavaScript", "TypeScript", "Node.js"];

/// Gallery category of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Python,
    JavaScript,
    Other,
}

impl Category {
    /// Every category, in filter-button order.
    pub const ALL: [Self; 4] = [Self::Web, Self::Python, Self::JavaScript, Self::Other];

    /// Returns the lowercase name used in markup and filter values.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Other => "other",
        }
    }

    /// Parses a lowercase category name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a primary language to a category.
///
/// The web table is checked first, so JavaScript and TypeScript are
/// always [`Category::Web`] even though they also appear in the
/// JavaScript table.
#[must_use]
pub fn repo_category(language: Option<&str>) -> Category {
    let Some(language) = language else {
        return Category::Other;
    };

    if WEB_LANGUAGES.contains(&language) {
        Category::Web
    } else if PYTHON_LANGUAGES.contains(&language) {
        Category::Python
    } else if JAVASCRIPT_LANGUAGES.contains(&language) {
        Category::JavaScript
    } else {
        Category::Other
    }
}
