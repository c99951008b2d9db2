//! Site configuration loading.
//!
//! Settings come from an optional `folio.toml`, then environment
//! overrides, then validation.

mod error;
mod profile;
mod sections;
mod site;

pub use error::ConfigError;
pub use profile::ProfileDefaults;
pub use sections::Sections;
pub use site::{SiteConfig, DEFAULT_API_BASE};

use std::path::Path;
use tracing::{debug, info};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Overrides the configured username.
pub const USERNAME_ENV: &str = "FOLIO_USERNAME";

/// Overrides the configured API base URL.
pub const API_BASE_ENV: &str = "FOLIO_API_BASE";

/// Loads the site configuration.
///
/// With an explicit `path` the file must exist. Without one,
/// [`DEFAULT_CONFIG_FILE`] is used if present and built-in defaults
/// otherwise. Environment overrides are applied before validation.
///
/// # Errors
///
/// Returns [`ConfigError`] if a requested file is missing, unreadable,
/// malformed, or holds invalid settings.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.display().to_string(),
                });
            }
            SiteConfig::load(path)?
        }
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                SiteConfig::load(default_path)?
            } else {
                debug!("No config file found, using defaults");
                SiteConfig::default()
            }
        }
    };

    apply_env_overrides(&mut config);
    config.validate()?;

    info!(username = %config.username, api_base = %config.api_base, "Loaded site config");
    Ok(config)
}

/// Applies environment overrides. Environment variables take precedence
/// over the config file; empty values are ignored.
fn apply_env_overrides(config: &mut SiteConfig) {
    if let Some(username) = env_value(USERNAME_ENV) {
        config.username = username;
    }
    if let Some(api_base) = env_value(API_BASE_ENV) {
        config.api_base = api_base;
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
