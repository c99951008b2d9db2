//! Profile display defaults.

use serde::Deserialize;

/// Values shown when the fetched profile leaves a field empty, and the
/// basis of the fallback profile when GitHub cannot be reached.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProfileDefaults {
    /// Display name.
    pub name: String,

    /// Short biography shown in the hero section.
    pub bio: String,

    /// Avatar image URL.
    pub avatar_url: String,

    /// Location text.
    pub location: String,

    /// Longer paragraph for the about section.
    pub about: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            name: "Zachary Labor".to_string(),
            bio: "Full Stack Developer & Problem Solver".to_string(),
            avatar_url: "https://via.placeholder.com/300".to_string(),
            location: "Location not specified".to_string(),
            about: "I'm a passionate developer who loves creating innovative solutions and \
                    learning new technologies. I enjoy working on challenging projects and \
                    collaborating with other developers to build amazing applications."
                .to_string(),
        }
    }
}
