//! Runner configuration.

use std::path::{Path, PathBuf};

/// Per-invocation settings layered over the site config file.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Explicit config file. `None` uses `folio.toml` if present.
    config_path: Option<PathBuf>,
    /// Optional GitHub token; raises the rate limit only.
    token: Option<String>,
    /// Whether to render without writing files.
    dry_run: bool,
    /// Replaces the configured output directory.
    output_dir: Option<PathBuf>,
    /// Replaces the configured username.
    username: Option<String>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    #[must_use]
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Returns the explicit config file path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Returns the GitHub token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the output directory override.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Returns the username override.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}
