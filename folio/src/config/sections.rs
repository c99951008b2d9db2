//! Page section toggles.

use serde::Deserialize;

/// Which optional sections the generated page contains.
///
/// Every section is on unless the `[sections]` table turns it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Sections {
    /// Name, bio, avatar and contact details.
    pub profile: bool,

    /// Repository, follower and following counters.
    pub counters: bool,

    /// Project gallery and its filter buttons.
    pub projects: bool,

    /// Skills gallery.
    pub skills: bool,

    /// Contact form.
    pub contact: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            profile: true,
            counters: true,
            projects: true,
            skills: true,
            contact: true,
        }
    }
}
