//! Profile section view.

use crate::config::ProfileDefaults;
use crate::github::ProfileRecord;
use chrono::Datelike;
use serde::Serialize;

/// Shown when the profile has no public email.
pub const EMAIL_NOT_PUBLIC: &str = "Email not public";

/// Display values for the profile section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub bio: String,
    pub avatar_url: String,
    pub location: String,
    pub email: String,

    /// Year the account was created.
    pub member_since: i32,

    pub profile_url: String,

    /// `mailto:` link, only when the email is public.
    pub email_link: Option<String>,

    /// Paragraph for the about section.
    pub about: String,
}

impl ProfileView {
    /// Fills each field from the profile, or from `defaults` when the
    /// profile leaves it empty.
    #[must_use]
    pub fn new(profile: &ProfileRecord, defaults: &ProfileDefaults) -> Self {
        let bio = non_empty(&profile.biography);
        let email = non_empty(&profile.email);

        Self {
            name: non_empty(&profile.display_name)
                .or(Some(profile.login.as_str()).filter(|l| !l.is_empty()))
                .unwrap_or(&defaults.name)
                .to_string(),
            bio: bio.unwrap_or(&defaults.bio).to_string(),
            avatar_url: non_empty(&profile.avatar_url)
                .unwrap_or(&defaults.avatar_url)
                .to_string(),
            location: non_empty(&profile.location)
                .unwrap_or(&defaults.location)
                .to_string(),
            email: email.unwrap_or(EMAIL_NOT_PUBLIC).to_string(),
            member_since: profile.account_created_at.year(),
            profile_url: profile.profile_url.clone(),
            email_link: email.map(|e| format!("mailto:{e}")),
            about: bio.unwrap_or(&defaults.about).to_string(),
        }
    }
}

/// Final values of the three profile counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterView {
    pub repositories: u64,
    pub followers: u64,
    pub following: u64,
}

impl CounterView {
    #[must_use]
    pub fn new(profile: &ProfileRecord) -> Self {
        Self {
            repositories: profile.public_repo_count,
            followers: profile.follower_count,
            following: profile.following_count,
        }
    }

    /// (label, target) pairs in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, u64); 3] {
        [
            ("Repositories", self.repositories),
            ("Followers", self.followers),
            ("Following", self.following),
        ]
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
