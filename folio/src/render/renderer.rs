//! Handlebars page renderer.

use crate::render::TemplateError;
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Name of the full-page template.
pub const PAGE_TEMPLATE: &str = "page";

/// Name of the project card partial.
pub const PROJECT_CARD_PARTIAL: &str = "project_card";

/// Name of the skill card partial.
pub const SKILL_CARD_PARTIAL: &str = "skill_card";

const BUILTIN_PAGE: &str = include_str!("../../templates/page.hbs");
const BUILTIN_PROJECT_CARD: &str = include_str!("../../templates/project_card.hbs");
const BUILTIN_SKILL_CARD: &str = include_str!("../../templates/skill_card.hbs");

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - HTML escaping (the default)
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq_helper));
    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq variable "value")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Renders the portfolio page and its card partials.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    /// Creates a renderer with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_overrides(None)
    }

    /// Creates a renderer, replacing built-in templates with
    /// `page.hbs`, `project_card.hbs` or `skill_card.hbs` from
    /// `template_dir` where those files exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be read or any template
    /// fails to compile.
    pub fn with_overrides(template_dir: Option<&Path>) -> Result<Self, TemplateError> {
        let mut handlebars = create_handlebars_registry();

        let page = load_template(template_dir, PAGE_TEMPLATE, BUILTIN_PAGE)?;
        let project_card = load_template(template_dir, PROJECT_CARD_PARTIAL, BUILTIN_PROJECT_CARD)?;
        let skill_card = load_template(template_dir, SKILL_CARD_PARTIAL, BUILTIN_SKILL_CARD)?;

        handlebars.register_template_string(PAGE_TEMPLATE, page)?;
        handlebars.register_partial(PROJECT_CARD_PARTIAL, project_card)?;
        handlebars.register_partial(SKILL_CARD_PARTIAL, skill_card)?;

        Ok(Self { handlebars })
    }

    /// Renders the page template with `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_page<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        Ok(self.handlebars.render(PAGE_TEMPLATE, data)?)
    }
}

/// Reads `{name}.hbs` from `template_dir`, or returns the built-in text.
fn load_template(
    template_dir: Option<&Path>,
    name: &str,
    builtin: &'static str,
) -> Result<String, TemplateError> {
    let Some(dir) = template_dir else {
        return Ok(builtin.to_string());
    };

    let path = dir.join(format!("{name}.hbs"));
    if !path.exists() {
        debug!(template = name, "Using built-in template");
        return Ok(builtin.to_string());
    }

    info!(path = %path.display(), "Using template override");
    std::fs::read_to_string(&path).map_err(|e| TemplateError::IoError {
        path: path.display().to_string(),
        source: e,
    })
}
