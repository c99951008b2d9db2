//! Page rendering.
//!
//! A [`RenderContext`] is built once per run from the site configuration
//! and renders one page per project filter.

mod capabilities;
mod error;
mod page;
mod profile;
mod renderer;

pub use capabilities::Capabilities;
pub use error::TemplateError;
pub use page::{ContactView, FilterButton, PageView, ProjectsView, SkillCardView};
pub use profile::{CounterView, ProfileView, EMAIL_NOT_PUBLIC};
pub use renderer::{
    create_handlebars_registry, PageRenderer, PAGE_TEMPLATE, PROJECT_CARD_PARTIAL,
    SKILL_CARD_PARTIAL,
};

use crate::config::SiteConfig;
use crate::github::{DataOrigin, PortfolioData};
use crate::projects::{curate_projects, ProjectFilter, ProjectGallery, NO_PROJECTS_MESSAGE};
use crate::samples::sample_projects;
use crate::skills::{aggregate_skills, SkillEntry};
use tracing::{debug, info};

/// Stylesheet written next to the pages.
pub const STYLESHEET: &str = include_str!("../../templates/styles.css");

/// File name of [`STYLESHEET`] in the output directory.
pub const STYLESHEET_FILE: &str = "styles.css";

/// Everything derived from one fetch, ready to render.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub profile: ProfileView,
    pub counters: CounterView,
    pub gallery: ProjectGallery,
    pub skills: Vec<SkillEntry>,
    pub origin: DataOrigin,
}

impl SiteContent {
    /// Curates projects and skills from the live repositories plus the
    /// sample projects.
    #[must_use]
    pub fn build(data: &PortfolioData, config: &SiteConfig) -> Self {
        let gallery = curate_projects(&data.repositories);

        let mut all_repositories = data.repositories.clone();
        all_repositories.extend(sample_projects());
        let skills = aggregate_skills(&all_repositories);

        debug!(
            projects = gallery.cards().len(),
            skills = skills.len(),
            "Built site content"
        );

        Self {
            profile: ProfileView::new(&data.profile, &config.profile),
            counters: CounterView::new(&data.profile),
            gallery,
            skills,
            origin: data.origin,
        }
    }
}

/// A rendered HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// File name relative to the output directory.
    pub file_name: String,
    pub html: String,
}

/// Templates, section capabilities and page title for one run.
pub struct RenderContext {
    renderer: PageRenderer,
    capabilities: Capabilities,
    title: String,
}

impl RenderContext {
    /// Builds the context from the site configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if templates cannot be loaded or compiled.
    pub fn new(config: &SiteConfig) -> Result<Self, TemplateError> {
        Ok(Self {
            renderer: PageRenderer::with_overrides(config.template_dir.as_deref())?,
            capabilities: Capabilities::from(&config.sections),
            title: config.title(),
        })
    }

    /// Renders one page per filter the capabilities allow.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if any page fails to render.
    pub fn render_pages(&self, content: &SiteContent) -> Result<Vec<RenderedPage>, TemplateError> {
        let pages = self
            .capabilities
            .page_filters()
            .into_iter()
            .map(|filter| self.render_page(content, filter))
            .collect::<Result<Vec<_>, _>>()?;

        info!(pages = pages.len(), "Rendered pages");
        Ok(pages)
    }

    /// Renders the page for one filter.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if rendering fails.
    pub fn render_page(
        &self,
        content: &SiteContent,
        filter: ProjectFilter,
    ) -> Result<RenderedPage, TemplateError> {
        let view = self.page_view(content, filter);
        Ok(RenderedPage {
            file_name: filter.page_name(),
            html: self.renderer.render_page(&view)?,
        })
    }

    fn page_view<'a>(&'a self, content: &'a SiteContent, filter: ProjectFilter) -> PageView<'a> {
        let caps = self.capabilities;

        PageView {
            title: &self.title,
            active_filter: filter.as_str(),
            profile: caps.profile.then_some(&content.profile),
            counters: caps.counters.then_some(content.counters),
            projects: caps.projects.then(|| projects_view(&content.gallery, filter)),
            skills: caps
                .skills
                .then(|| content.skills.iter().map(SkillCardView::from).collect()),
            contact: caps.contact.then(ContactView::default),
        }
    }
}

fn projects_view(gallery: &ProjectGallery, filter: ProjectFilter) -> ProjectsView<'_> {
    let filters = ProjectFilter::all().into_iter().map(FilterButton::from).collect();

    match gallery {
        ProjectGallery::Cards(cards) => ProjectsView {
            filters,
            cards: filter.select(cards),
            empty_message: None,
        },
        ProjectGallery::Empty => ProjectsView {
            filters,
            cards: Vec::new(),
            empty_message: Some(NO_PROJECTS_MESSAGE),
        },
    }
}
