//! Site configuration deserialization and validation.

use crate::config::{ConfigError, ProfileDefaults, Sections};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Parsed contents of a `folio.toml` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// GitHub account whose profile and repositories are shown.
    pub username: String,

    /// Base URL of the GitHub REST API.
    pub api_base: String,

    /// Directory the generated pages are written to.
    pub output_dir: PathBuf,

    /// Page title. Defaults to "{profile name} | Portfolio".
    pub title: Option<String>,

    /// Directory holding template overrides.
    pub template_dir: Option<PathBuf>,

    /// Sections present on the page.
    pub sections: Sections,

    /// Display defaults and fallback profile values.
    pub profile: ProfileDefaults,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            username: "ZacharyLabor".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            output_dir: PathBuf::from("site"),
            title: None,
            template_dir: None,
            sections: Sections::default(),
            profile: ProfileDefaults::default(),
        }
    }
}

impl SiteConfig {
    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading site config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.trim().is_empty() {
            return Err(invalid("username", "must not be empty"));
        }

        if self.username.contains('/') {
            return Err(invalid("username", "must not contain '/'"));
        }

        if Url::parse(&self.api_base).is_err() {
            return Err(invalid(
                "api-base",
                &format!("is not a valid URL: {}", self.api_base),
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(invalid("output-dir", "must not be empty"));
        }

        Ok(())
    }

    /// Returns the page title.
    #[must_use]
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} | Portfolio", self.profile.name))
    }

    /// Returns the public profile URL for the configured user.
    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.username)
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.to_string(),
    }
}
