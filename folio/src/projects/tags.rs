//! Technology tags shown on project cards.

use crate::github::RepositoryRecord;
use crate::keywords::{matching_labels, TECH_KEYWORDS};
use std::collections::HashSet;

/// Maximum tags per card.
pub const MAX_TAGS: usize = 5;

/// Derives the tag list for a repository.
///
/// Order: formatted topics, the primary language, then keyword tags in
/// table order. Duplicates keep their first position; at most
/// [`MAX_TAGS`] are returned.
#[must_use]
pub fn tech_tags(repo: &RepositoryRecord) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    if let Some(topics) = &repo.topics {
        tags.extend(topics.iter().map(|t| format_topic(t)));
    }

    if let Some(language) = &repo.primary_language {
        tags.push(language.clone());
    }

    let text = repo.search_text();
    tags.extend(matching_labels(TECH_KEYWORDS, &text).map(str::to_string));

    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .take(MAX_TAGS)
        .collect()
}

/// Uppercases the first character and replaces the first hyphen after
/// it with a space: `machine-learning` becomes `Machine learning`.
#[must_use]
pub fn format_topic(topic: &str) -> String {
    let mut chars = topic.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().replacen('-', " ", 1);
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}
