//! Which optional sections a page has.

use crate::config::Sections;
use crate::projects::ProjectFilter;

/// Sections present on the generated page, computed once per build.
///
/// Renderers consult this instead of checking for each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub profile: bool,
    pub counters: bool,
    pub projects: bool,
    pub skills: bool,
    pub contact: bool,
}

impl Capabilities {
    /// Filters that get their own page. Without a project gallery only
    /// the index page is written.
    #[must_use]
    pub fn page_filters(&self) -> Vec<ProjectFilter> {
        if self.projects {
            ProjectFilter::all()
        } else {
            vec![ProjectFilter::All]
        }
    }
}

impl From<&Sections> for Capabilities {
    fn from(sections: &Sections) -> Self {
        Self {
            profile: sections.profile,
            counters: sections.counters,
            projects: sections.projects,
            skills: sections.skills,
            contact: sections.contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_page_per_filter_with_projects() {
        let capabilities = Capabilities::from(&Sections::default());
        assert_eq!(capabilities.page_filters().len(), 5);
    }

    #[test]
    fn index_only_without_projects() {
        let sections = Sections {
            projects: false,
            ..Sections::default()
        };
        let capabilities = Capabilities::from(&sections);

        assert_eq!(capabilities.page_filters(), vec![ProjectFilter::All]);
        assert!(capabilities.skills);
    }
}
