//! Summary of a build.

use crate::github::DataOrigin;

/// Summary of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the profile and repositories came from.
    pub origin: DataOrigin,

    /// Number of project cards in the gallery.
    pub projects_rendered: usize,

    /// Number of skill cards.
    pub skills_rendered: usize,

    /// Files written to the output directory, including the stylesheet.
    /// Always zero on a dry run.
    pub pages_written: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(origin: DataOrigin, dry_run: bool) -> Self {
        Self {
            origin,
            projects_rendered: 0,
            skills_rendered: 0,
            pages_written: 0,
            dry_run,
        }
    }

    /// Returns true if live data was unavailable.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.origin == DataOrigin::Fallback
    }

    /// Returns true if the build used live data.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.used_fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_not_success() {
        let summary = RunSummary::new(DataOrigin::Fallback, false);
        assert!(summary.used_fallback());
        assert!(!summary.all_success());
    }

    #[test]
    fn live_is_success() {
        let summary = RunSummary::new(DataOrigin::Live, true);
        assert!(summary.all_success());
        assert!(summary.dry_run);
        assert_eq!(summary.pages_written, 0);
    }
}
