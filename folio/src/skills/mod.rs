//! Skill aggregation.
//!
//! Skills are discovered from repository languages and from keyword
//! matches in repository names and descriptions. Languages are counted;
//! keyword-only skills count once.

mod icon;
mod tier;

pub use icon::{skill_icon, DEFAULT_SKILL_ICON};
pub use tier::SkillTier;

use crate::github::RepositoryRecord;
use crate::keywords::{matching_labels, skill_keywords};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Maximum cards in the skills gallery.
pub const MAX_SKILLS: usize = 8;

/// Skills shown when no repository yields any.
pub const DEFAULT_SKILLS: &[&str] = &["JavaScript", "Python", "HTML", "CSS", "React", "Node.js"];

/// A derived skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub label: String,

    /// Repositories using this language; 1 for keyword-only skills.
    pub usage_count: u32,

    pub tier: SkillTier,
}

impl SkillEntry {
    fn new(label: String, usage_count: u32) -> Self {
        Self {
            tier: SkillTier::from_usage(usage_count),
            label,
            usage_count,
        }
    }

    /// Returns the icon class for this skill.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        skill_icon(&self.label)
    }
}

/// Insertion-ordered set of skill labels.
#[derive(Default)]
struct SkillSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl SkillSet {
    fn add(&mut self, label: &str) {
        if self.seen.insert(label.to_string()) {
            self.order.push(label.to_string());
        }
    }
}

/// Derives at most [`MAX_SKILLS`] skills from `repositories`, in
/// discovery order. Forks and undescribed repositories are included.
#[must_use]
pub fn aggregate_skills(repositories: &[RepositoryRecord]) -> Vec<SkillEntry> {
    let mut language_counts: HashMap<&str, u32> = HashMap::new();
    let mut skills = SkillSet::default();

    for repo in repositories {
        if let Some(language) = repo.primary_language.as_deref() {
            *language_counts.entry(language).or_insert(0) += 1;
            skills.add(language);
        }

        let text = repo.search_text();
        for label in matching_labels(skill_keywords(), &text) {
            skills.add(label);
        }
    }

    if skills.order.is_empty() {
        for label in DEFAULT_SKILLS {
            skills.add(label);
        }
    }

    skills
        .order
        .into_iter()
        .take(MAX_SKILLS)
        .map(|label| {
            let count = language_counts.get(label.as_str()).copied().unwrap_or(1);
            SkillEntry::new(label, count)
        })
        .collect()
}
