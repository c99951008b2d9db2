//! Orchestrates a portfolio build: fetch, curate, render, write.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::{load_config, SiteConfig};
use crate::github::{fetch_portfolio_data, GitHubSource, OctocrabSource};
use crate::render::{RenderContext, RenderedPage, SiteContent, STYLESHEET, STYLESHEET_FILE};
use crate::summary::RunSummary;
use std::fs;
use std::path::Path;
use tracing::{info, info_span, warn, Instrument};

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub summary: RunSummary,
    pub content: SiteContent,
    pub pages: Vec<RenderedPage>,
}

/// Orchestrates a full portfolio build.
pub struct Runner<S = OctocrabSource> {
    config: RunnerConfig,
    site: SiteConfig,
    source: S,
    context: RenderContext,
}

impl Runner<OctocrabSource> {
    /// Builds a runner that fetches from the GitHub REST API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the configuration or templates are
    /// invalid, or the API client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let site = load_site_config(&config)?;
        let source = OctocrabSource::new(&site.api_base, config.token())?;
        Self::from_parts(config, site, source)
    }
}

impl<S: GitHubSource> Runner<S> {
    /// Builds a runner over a custom data source.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the configuration or templates are invalid.
    pub fn with_source(config: RunnerConfig, source: S) -> Result<Self, RunnerError> {
        let site = load_site_config(&config)?;
        Self::from_parts(config, site, source)
    }

    fn from_parts(config: RunnerConfig, site: SiteConfig, source: S) -> Result<Self, RunnerError> {
        let context = RenderContext::new(&site)?;
        Ok(Self {
            config,
            site,
            source,
            context,
        })
    }

    /// Returns the resolved site configuration.
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Executes the full build.
    ///
    /// A failed fetch is not an error: the build continues with fallback
    /// data and the summary records it.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if rendering or writing output fails.
    pub async fn run(&self) -> Result<BuildOutput, RunnerError> {
        let span = info_span!("build", username = %self.site.username, dry_run = self.config.dry_run());

        self.build().instrument(span).await
    }

    async fn build(&self) -> Result<BuildOutput, RunnerError> {
        let data = fetch_portfolio_data(&self.source, &self.site).await;
        let content = SiteContent::build(&data, &self.site);
        let pages = self.context.render_pages(&content)?;

        let mut summary = RunSummary::new(content.origin, self.config.dry_run());
        summary.projects_rendered = content.gallery.cards().len();
        summary.skills_rendered = content.skills.len();

        if self.config.dry_run() {
            info!(pages = pages.len(), "Dry run, skipping output");
        } else {
            summary.pages_written = write_site(&self.site.output_dir, &pages)?;
        }

        if summary.used_fallback() {
            warn!("Built with fallback data");
        }

        Ok(BuildOutput {
            summary,
            content,
            pages,
        })
    }
}

fn load_site_config(config: &RunnerConfig) -> Result<SiteConfig, RunnerError> {
    let mut site = load_config(config.config_path())?;

    if let Some(username) = config.username() {
        site.username = username.to_string();
    }
    if let Some(output_dir) = config.output_dir() {
        site.output_dir = output_dir.to_path_buf();
    }
    site.validate()?;

    Ok(site)
}

/// Writes the pages and stylesheet, creating `output_dir` if needed.
/// Returns the number of files written.
fn write_site(output_dir: &Path, pages: &[RenderedPage]) -> Result<usize, RunnerError> {
    fs::create_dir_all(output_dir).map_err(|source| io_error(output_dir, source))?;

    for page in pages {
        write_file(&output_dir.join(&page.file_name), &page.html)?;
    }
    write_file(&output_dir.join(STYLESHEET_FILE), STYLESHEET)?;

    let written = pages.len() + 1;
    info!(path = %output_dir.display(), files = written, "Wrote site");
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<(), RunnerError> {
    fs::write(path, contents).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> RunnerError {
    RunnerError::Io {
        path: path.display().to_string(),
        source,
    }
}
