//! Font Awesome icon classes for skill cards.

/// Icon used for skills missing from [`SKILL_ICONS`].
pub const DEFAULT_SKILL_ICON: &str = "fas fa-code";

const SKILL_ICONS: &[(&str, &str)] = &[
    ("JavaScript", "fab fa-js-square"),
    ("Python", "fab fa-python"),
    ("HTML", "fab fa-html5"),
    ("CSS", "fab fa-css3-alt"),
    ("React", "fab fa-react"),
    ("Vue.js", "fab fa-vuejs"),
    ("Angular", "fab fa-angular"),
    ("Node.js", "fab fa-node-js"),
    ("PHP", "fab fa-php"),
    ("Java", "fab fa-java"),
    ("C++", "fas fa-code"),
    ("C#", "fas fa-code"),
    ("Go", "fas fa-code"),
    ("Rust", "fas fa-code"),
    ("TypeScript", "fas fa-code"),
    ("Express", "fas fa-server"),
    ("MongoDB", "fas fa-database"),
    ("MySQL", "fas fa-database"),
];

/// Returns the icon class for a skill label.
#[must_use]
pub fn skill_icon(label: &str) -> &'static str {
    SKILL_ICONS
        .iter()
        .find(|(name, _)| *name == label)
        .map_or(DEFAULT_SKILL_ICON, |(_, icon)| *icon)
}
