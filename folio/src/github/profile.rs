//! User profile as returned by `GET /users/{username}`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A fetched (or fallback) GitHub user profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileRecord {
    /// Account login.
    pub login: String,

    /// Display name, if the user set one.
    #[serde(rename = "name")]
    pub display_name: Option<String>,

    #[serde(rename = "bio")]
    pub biography: Option<String>,

    pub avatar_url: Option<String>,

    pub location: Option<String>,

    /// Public email address.
    pub email: Option<String>,

    #[serde(rename = "created_at")]
    pub account_created_at: DateTime<Utc>,

    /// Link to the profile page on GitHub.
    #[serde(rename = "html_url")]
    pub profile_url: String,

    #[serde(rename = "public_repos", default)]
    pub public_repo_count: u64,

    #[serde(rename = "followers", default)]
    pub follower_count: u64,

    #[serde(rename = "following", default)]
    pub following_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn deserialize_api_shape() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "bio": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "location": "San Francisco",
            "email": null,
            "created_at": "2011-01-25T18:44:36Z",
            "html_url": "https://github.com/octocat",
            "public_repos": 8,
            "followers": 21000,
            "following": 9
        }"#;

        let profile: ProfileRecord = serde_json::from_str(json).unwrap();

        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.display_name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.biography, None);
        assert_eq!(profile.account_created_at.year(), 2011);
        assert_eq!(profile.public_repo_count, 8);
        assert_eq!(profile.follower_count, 21000);
        assert_eq!(profile.following_count, 9);
    }

    #[test]
    fn deserialize_rejects_missing_login() {
        let result = serde_json::from_str::<ProfileRecord>(r#"{"message": "Not Found"}"#);
        assert!(result.is_err());
    }
}
