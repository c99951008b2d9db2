//! Keyword table shared by tag derivation and skill aggregation.

/// (trigger, label) pairs, checked in order against lowercased
/// "{name} {description}" text.
pub const TECH_KEYWORDS: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("node", "Node.js"),
    ("express", "Express"),
    ("mongodb", "MongoDB"),
    ("mysql", "MySQL"),
    ("api", "API"),
    ("frontend", "Frontend"),
    ("backend", "Backend"),
    ("fullstack", "Full Stack"),
];

/// Leading rows of [`TECH_KEYWORDS`] that count as skills.
pub const SKILL_KEYWORD_COUNT: usize = 7;

/// Returns the labels whose trigger occurs in `text`, in table order.
///
/// `text` must already be lowercase.
pub fn matching_labels<'a>(
    table: &'a [(&'a str, &'a str)],
    text: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    table
        .iter()
        .filter(move |(trigger, _)| text.contains(trigger))
        .map(|(_, label)| *label)
}

/// Rows of [`TECH_KEYWORDS`] used by the skill aggregator.
#[must_use]
pub fn skill_keywords() -> &'static [(&'static str, &'static str)] {
    &TECH_KEYWORDS[..SKILL_KEYWORD_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_follow_table_order() {
        let labels: Vec<_> = matching_labels(TECH_KEYWORDS, "backend api with react").collect();
        assert_eq!(labels, vec!["React", "API", "Backend"]);
    }

    #[test]
    fn substring_triggers_match() {
        // "nodejs" contains "node"; "vuex" contains "vue".
        let labels: Vec<_> = matching_labels(TECH_KEYWORDS, "nodejs vuex").collect();
        assert_eq!(labels, vec!["Vue.js", "Node.js"]);
    }

    #[test]
    fn skill_keywords_stop_before_api() {
        let skills = skill_keywords();

        assert_eq!(skills.len(), 7);
        assert_eq!(skills.last(), Some(&("mysql", "MySQL")));
        assert_eq!(matching_labels(skills, "an api").count(), 0);
    }

    #[test]
    fn fullstack_trigger_has_no_space() {
        let labels: Vec<_> = matching_labels(TECH_KEYWORDS, "a fullstack app").collect();
        assert_eq!(labels, vec!["Full Stack"]);

        assert_eq!(matching_labels(TECH_KEYWORDS, "a full stack app").count(), 0);
    }
}
