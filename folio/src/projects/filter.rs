//! Gallery filter selection.

use crate::projects::{Category, ProjectCard};
use std::fmt;
use std::str::FromStr;

/// A filter button value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    All,
    Category(Category),
}

impl ProjectFilter {
    /// Every filter, in button order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Category))
            .collect()
    }

    /// Returns the `data-filter` value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(category) => category.as_str(),
        }
    }

    /// Returns the button caption.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(Category::Web) => "Web",
            Self::Category(Category::Python) => "Python",
            Self::Category(Category::JavaScript) => "JavaScript",
            Self::Category(Category::Other) => "Other",
        }
    }

    /// Returns the page file this filter is rendered to.
    #[must_use]
    pub fn page_name(&self) -> String {
        match self {
            Self::All => "index.html".to_string(),
            Self::Category(category) => format!("{category}.html"),
        }
    }

    /// Returns true if the card is visible under this filter.
    #[must_use]
    pub fn shows(&self, card: &ProjectCard) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => card.category == *category,
        }
    }

    /// Selects the visible cards without rebuilding them.
    #[must_use]
    pub fn select<'a>(&self, cards: &'a [ProjectCard]) -> Vec<&'a ProjectCard> {
        cards.iter().filter(|card| self.shows(card)).collect()
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown filter value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown project filter: {0}")]
pub struct UnknownFilter(pub String);

impl FromStr for ProjectFilter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Self::All);
        }
        Category::parse(value)
            .map(Self::Category)
            .ok_or_else(|| UnknownFilter(value.to_string()))
    }
}
