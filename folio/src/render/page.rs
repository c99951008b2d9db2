//! Serializable page model handed to the page template.

use crate::contact::{ContactField, CONTACT_FIELDS};
use crate::projects::{ProjectCard, ProjectFilter};
use crate::render::{CounterView, ProfileView};
use crate::skills::SkillEntry;
use serde::Serialize;

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub value: &'static str,
    pub label: &'static str,
    /// Page showing this filter.
    pub href: String,
}

impl From<ProjectFilter> for FilterButton {
    fn from(filter: ProjectFilter) -> Self {
        Self {
            value: filter.as_str(),
            label: filter.label(),
            href: filter.page_name(),
        }
    }
}

/// Project gallery section.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsView<'a> {
    pub filters: Vec<FilterButton>,
    pub cards: Vec<&'a ProjectCard>,
    /// Set when the gallery is empty.
    pub empty_message: Option<&'static str>,
}

/// Data for one skill card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCardView<'a> {
    pub name: &'a str,
    pub icon: &'static str,
    pub level: &'static str,
}

impl<'a> From<&'a SkillEntry> for SkillCardView<'a> {
    fn from(skill: &'a SkillEntry) -> Self {
        Self {
            name: &skill.label,
            icon: skill.icon(),
            level: skill.tier.as_str(),
        }
    }
}

/// Contact form section.
#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
    pub fields: &'static [ContactField],
}

impl Default for ContactView {
    fn default() -> Self {
        Self {
            fields: &CONTACT_FIELDS,
        }
    }
}

/// Everything the page template reads. Absent sections serialize as
/// `null` so strict-mode templates can test for them.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub active_filter: &'static str,
    pub profile: Option<&'a ProfileView>,
    pub counters: Option<CounterView>,
    pub projects: Option<ProjectsView<'a>>,
    pub skills: Option<Vec<SkillCardView<'a>>>,
    pub contact: Option<ContactView>,
}
