//! Profile and repository fetching.
//!
//! Both requests share one failure path: if either fails, the build falls
//! back to a fixed profile and an empty repository list.

mod error;
mod profile;
mod repository;
mod source;

pub use error::FetchError;
pub use profile::ProfileRecord;
pub use repository::RepositoryRecord;
pub use source::{GitHubSource, OctocrabSource, REPOSITORIES_PER_PAGE};

use crate::config::SiteConfig;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::{error, info, info_span, Instrument};

/// Where the fetched records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Both requests succeeded.
    Live,
    /// At least one request failed; the fallback profile is in use.
    Fallback,
}

impl DataOrigin {
    /// Returns a short label for logs and summaries.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
        }
    }
}

/// The records one build renders.
#[derive(Debug, Clone)]
pub struct PortfolioData {
    pub profile: ProfileRecord,

    /// Live repositories only; sample projects are added later.
    pub repositories: Vec<RepositoryRecord>,

    pub origin: DataOrigin,
}

/// Fetches the profile and then the repositories for the configured user.
///
/// Any failure abandons both results: the error is logged and the
/// fallback profile is returned with no repositories.
pub async fn fetch_portfolio_data<S: GitHubSource>(
    source: &S,
    config: &SiteConfig,
) -> PortfolioData {
    let span = info_span!("fetch", username = %config.username);

    async {
        match fetch_live(source, &config.username).await {
            Ok((profile, repositories)) => {
                info!(repositories = repositories.len(), "Fetched GitHub data");
                PortfolioData {
                    profile,
                    repositories,
                    origin: DataOrigin::Live,
                }
            }
            Err(e) => {
                error!(error = %e, "Error fetching GitHub data, using fallback profile");
                PortfolioData {
                    profile: fallback_profile(config),
                    repositories: Vec::new(),
                    origin: DataOrigin::Fallback,
                }
            }
        }
    }
    .instrument(span)
    .await
}

async fn fetch_live<S: GitHubSource>(
    source: &S,
    username: &str,
) -> Result<(ProfileRecord, Vec<RepositoryRecord>), FetchError> {
    let profile = source.fetch_profile(username).await?;
    let repositories = source.fetch_repositories(username).await?;
    Ok((profile, repositories))
}

/// Account creation date of the fallback profile.
const FALLBACK_CREATED_AT: DateTime<Utc> = utc(2024, 1, 1, 0, 0);

/// Builds the profile shown when GitHub cannot be reached.
#[must_use]
pub fn fallback_profile(config: &SiteConfig) -> ProfileRecord {
    let defaults = &config.profile;
    ProfileRecord {
        login: config.username.clone(),
        display_name: Some(defaults.name.clone()),
        biography: Some(defaults.bio.clone()),
        avatar_url: Some(defaults.avatar_url.clone()),
        location: Some(defaults.location.clone()),
        email: None,
        account_created_at: FALLBACK_CREATED_AT,
        profile_url: config.profile_url(),
        public_repo_count: 0,
        follower_count: 0,
        following_count: 0,
    }
}

/// Builds a UTC timestamp from fixed calendar values. Used for `const`
/// items, where an out-of-range value fails to compile.
pub(crate) const fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        panic!("invalid calendar date");
    };
    let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
        panic!("invalid time of day");
    };
    date.and_time(time).and_utc()
}
