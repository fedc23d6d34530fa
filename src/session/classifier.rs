//! Maps a final percentage score to a skill tier.
//!
//! One fixed threshold table (60/70/80, half-open intervals, highest
//! first) is the single source of truth: the results screen, certificate
//! gating, and the skill string sent to the resource recommender all go
//! through it.

use serde::{Deserialize, Serialize};

/// Minimum percentage for the Expert tier; also gates the certificate.
pub const EXPERT_THRESHOLD: u8 = 80;
/// Minimum percentage for the Advanced tier.
pub const ADVANCED_THRESHOLD: u8 = 70;
/// Minimum percentage for the Intermediate tier.
pub const INTERMEDIATE_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= EXPERT_THRESHOLD {
            Self::Expert
        } else if percentage >= ADVANCED_THRESHOLD {
            Self::Advanced
        } else if percentage >= INTERMEDIATE_THRESHOLD {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

/// The classification shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub level: SkillLevel,
    pub congrats_message: &'static str,
    pub result_message: &'static str,
}

/// Classify a final percentage score.
pub fn classify(percentage: u8) -> Assessment {
    let level = SkillLevel::from_percentage(percentage);
    let (congrats_message, result_message) = match level {
        SkillLevel::Expert => (
            "Outstanding work!",
            "Your expertise is impressive. Keep exploring advanced topics to stay sharp.",
        ),
        SkillLevel::Advanced => (
            "Excellent work!",
            "You have a strong command of the subject. Push further to reach expert level.",
        ),
        SkillLevel::Intermediate => (
            "Well done!",
            "You have solid foundations. Keep practicing to consolidate them.",
        ),
        SkillLevel::Beginner => (
            "Good start!",
            "The recommended resources below will help you build a solid base.",
        ),
    };
    Assessment {
        level,
        congrats_message,
        result_message,
    }
}

/// Whether a score is good enough for the certificate. Consistent with
/// the Expert boundary.
pub fn eligible_for_certificate(percentage: u8) -> bool {
    percentage >= EXPERT_THRESHOLD
}

/// `round(100 * score / total)`, round half up, in exact integer
/// arithmetic.
pub fn percentage(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((score * 200 + total) / (total * 2)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify(80).level, SkillLevel::Expert);
        assert_eq!(classify(79).level, SkillLevel::Advanced);
        assert_eq!(classify(70).level, SkillLevel::Advanced);
        assert_eq!(classify(69).level, SkillLevel::Intermediate);
        assert_eq!(classify(60).level, SkillLevel::Intermediate);
        assert_eq!(classify(59).level, SkillLevel::Beginner);
        assert_eq!(classify(100).level, SkillLevel::Expert);
        assert_eq!(classify(0).level, SkillLevel::Beginner);
    }

    #[test]
    fn test_certificate_tracks_expert_boundary() {
        for p in 0..=100u8 {
            assert_eq!(
                eligible_for_certificate(p),
                classify(p).level == SkillLevel::Expert
            );
        }
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(12, 20), 60);
        assert_eq!(percentage(20, 20), 100);
        assert_eq!(percentage(0, 20), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        // exact halves round up
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 200), 1);
    }

    #[test]
    fn test_percentage_of_empty_total_is_zero() {
        assert_eq!(percentage(0, 0), 0);
    }
}
