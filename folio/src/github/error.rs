//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching profile data from GitHub.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or non-success response.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// The response body did not have the expected shape.
    #[error("Malformed response from '{route}': {source}")]
    Malformed {
        route: String,
        #[source]
        source: serde_json::Error,
    },
}
