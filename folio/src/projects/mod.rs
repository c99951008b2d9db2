//! Project gallery curation.
//!
//! Live repositories are concatenated with the sample projects, then
//! filtered, sorted newest first and truncated before cards are built.

mod card;
mod category;
mod filter;
mod tags;

pub use card::{ProjectCard, NO_DESCRIPTION};
pub use category::{repo_category, Category};
pub use filter::{ProjectFilter, UnknownFilter};
pub use tags::{format_topic, tech_tags, MAX_TAGS};

use crate::github::RepositoryRecord;
use crate::samples::sample_projects;
use tracing::debug;

/// Maximum cards in the gallery.
pub const MAX_PROJECTS: usize = 6;

/// Text shown when no repository survives curation.
pub const NO_PROJECTS_MESSAGE: &str =
    "No public repositories found. Projects will be displayed here once available.";

/// The rendered project gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectGallery {
    /// Cards in display order.
    Cards(Vec<ProjectCard>),
    /// Nothing to show; render [`NO_PROJECTS_MESSAGE`].
    Empty,
}

impl ProjectGallery {
    /// Returns the cards, or an empty slice for [`ProjectGallery::Empty`].
    #[must_use]
    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            Self::Cards(cards) => cards,
            Self::Empty => &[],
        }
    }
}

/// Keeps non-fork repositories with a description, newest first, at most
/// [`MAX_PROJECTS`]. Equal timestamps keep their input order.
#[must_use]
pub fn featured_repositories(repositories: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    let mut featured: Vec<RepositoryRecord> = repositories
        .into_iter()
        .filter(|repo| !repo.is_fork && repo.description().is_some())
        .collect();

    // `sort_by` is stable, which the tie rule relies on.
    featured.sort_by(|a, b| b.last_updated_at.cmp(&a.last_updated_at));
    featured.truncate(MAX_PROJECTS);
    featured
}

/// Builds the gallery from already-merged records.
#[must_use]
pub fn build_gallery(repositories: Vec<RepositoryRecord>) -> ProjectGallery {
    let featured = featured_repositories(repositories);
    if featured.is_empty() {
        return ProjectGallery::Empty;
    }

    ProjectGallery::Cards(featured.iter().map(ProjectCard::from_repository).collect())
}

/// Curates the gallery for live repositories, appending the samples.
#[must_use]
pub fn curate_projects(live: &[RepositoryRecord]) -> ProjectGallery {
    let merged: Vec<RepositoryRecord> = live.iter().cloned().chain(sample_projects()).collect();
    debug!(live = live.len(), merged = merged.len(), "Curating projects");
    build_gallery(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::utc;
    use chrono::{DateTime, Utc};

    fn repo(name: &str, updated_at: DateTime<Utc>) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            description: Some(format!("{name} description")),
            primary_language: None,
            is_fork: false,
            homepage_url: None,
            last_updated_at: updated_at,
            repository_url: format!("https://github.com/octocat/{name}"),
            topics: None,
        }
    }

    fn names(repos: &[RepositoryRecord]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn drops_forks_and_undescribed() {
        let mut fork = repo("fork", utc(2024, 5, 1, 0, 0));
        fork.is_fork = true;
        let mut blank = repo("blank", utc(2024, 5, 1, 0, 0));
        blank.description = Some(String::new());
        let mut missing = repo("missing", utc(2024, 5, 1, 0, 0));
        missing.description = None;
        let kept = repo("kept", utc(2024, 5, 1, 0, 0));

        let featured = featured_repositories(vec![fork, blank, missing, kept]);
        assert_eq!(names(&featured), vec!["kept"]);
    }

    #[test]
    fn sorted_newest_first() {
        let featured = featured_repositories(vec![
            repo("old", utc(2023, 1, 1, 0, 0)),
            repo("new", utc(2025, 1, 1, 0, 0)),
            repo("mid", utc(2024, 1, 1, 0, 0)),
        ]);
        assert_eq!(names(&featured), vec!["new", "mid", "old"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let same = utc(2024, 6, 1, 12, 0);
        let featured = featured_repositories(vec![
            repo("first", same),
            repo("newer", utc(2024, 7, 1, 0, 0)),
            repo("second", same),
            repo("third", same),
        ]);
        assert_eq!(names(&featured), vec!["newer", "first", "second", "third"]);
    }

    #[test]
    fn truncated_to_six() {
        let repos: Vec<_> = (1..=9)
            .map(|day| repo(&format!("r{day}"), utc(2024, 1, day, 0, 0)))
            .collect();

        let featured = featured_repositories(repos);
        assert_eq!(featured.len(), MAX_PROJECTS);
        assert_eq!(featured[0].name, "r9");
        assert_eq!(featured[5].name, "r4");
    }

    #[test]
    fn empty_input_gives_placeholder() {
        assert_eq!(build_gallery(Vec::new()), ProjectGallery::Empty);
        assert!(ProjectGallery::Empty.cards().is_empty());
    }

    #[test]
    fn no_live_repositories_shows_samples() {
        let gallery = curate_projects(&[]);
        let cards = gallery.cards();

        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].title, "AI-Powered Task Manager");
        assert_eq!(cards[5].title, "DevOps Automation Suite");
    }

    #[test]
    fn recent_live_repositories_push_out_samples() {
        let live: Vec<_> = (1..=4)
            .map(|day| repo(&format!("live{day}"), utc(2025, 3, day, 0, 0)))
            .collect();

        let gallery = curate_projects(&live);
        let titles: Vec<_> = gallery.cards().iter().map(|c| c.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "live4",
                "live3",
                "live2",
                "live1",
                "AI-Powered Task Manager",
                "Blockchain Voting System"
            ]
        );
    }

    #[test]
    fn go_backend_card() {
        let mut record = repo("x", utc(2030, 1, 1, 0, 0));
        record.description = Some("a backend API in go".to_string());
        record.primary_language = Some("Go".to_string());
        record.topics = Some(Vec::new());

        let gallery = curate_projects(&[record]);
        let card = &gallery.cards()[0];

        assert_eq!(card.title, "x");
        assert_eq!(card.category, Category::Other);
        assert_eq!(card.tags, vec!["Go", "API", "Backend"]);
    }
}
