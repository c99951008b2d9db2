//! Proficiency tiers.

use serde::Serialize;
use std::fmt;

/// Proficiency shown on a skill card, derived from usage count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillTier {
    /// Maps a usage count to a tier: 5+ Expert, 3+ Advanced,
    /// 2 Intermediate, anything lower Beginner.
    #[must_use]
    pub const fn from_usage(count: u32) -> Self {
        match count {
            5.. => Self::Expert,
            3.. => Self::Advanced,
            2 => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(SkillTier::from_usage(0), SkillTier::Beginner);
        assert_eq!(SkillTier::from_usage(1), SkillTier::Beginner);
        assert_eq!(SkillTier::from_usage(2), SkillTier::Intermediate);
        assert_eq!(SkillTier::from_usage(3), SkillTier::Advanced);
        assert_eq!(SkillTier::from_usage(4), SkillTier::Advanced);
        assert_eq!(SkillTier::from_usage(5), SkillTier::Expert);
        assert_eq!(SkillTier::from_usage(40), SkillTier::Expert);
    }

    #[test]
    fn display_names() {
        assert_eq!(SkillTier::Intermediate.to_string(), "Intermediate");
    }
}
