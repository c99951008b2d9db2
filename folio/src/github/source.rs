//! Where profile data comes from.

use crate::github::{FetchError, ProfileRecord, RepositoryRecord};
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use tracing::debug;

/// Maximum repositories requested in the single repository page.
pub const REPOSITORIES_PER_PAGE: u8 = 100;

/// Provider of the two records a build needs.
pub trait GitHubSource {
    /// Fetches the user profile.
    fn fetch_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<ProfileRecord, FetchError>> + Send;

    /// Fetches the user's repositories, most recently updated first.
    fn fetch_repositories(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<RepositoryRecord>, FetchError>> + Send;
}

/// Query string for the repository listing.
#[derive(Debug, Serialize)]
struct RepositoryQuery {
    sort: &'static str,
    per_page: u8,
}

/// [`GitHubSource`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct OctocrabSource {
    octocrab: Octocrab,
}

impl OctocrabSource {
    /// Builds a client against `api_base`. The token is optional; the
    /// requests are public and a token only raises the rate limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is rejected or the client cannot
    /// be built.
    pub fn new(api_base: &str, token: Option<&str>) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder().base_uri(api_base)?;
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        Ok(Self {
            octocrab: builder.build()?,
        })
    }

    async fn get_json<T, P>(&self, route: String, query: Option<&P>) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized + Sync,
    {
        debug!(route = %route, "GET");
        let value: serde_json::Value = self.octocrab.get(&route, query).await?;
        serde_json::from_value(value).map_err(|source| FetchError::Malformed { route, source })
    }
}

impl GitHubSource for OctocrabSource {
    fn fetch_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<ProfileRecord, FetchError>> + Send {
        self.get_json(format!("/users/{username}"), None::<&()>)
    }

    fn fetch_repositories(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<RepositoryRecord>, FetchError>> + Send {
        let query = RepositoryQuery {
            sort: "updated",
            per_page: REPOSITORIES_PER_PAGE,
        };
        let route = format!("/users/{username}/repos");
        async move { self.get_json(route, Some(&query)).await }
    }
}
