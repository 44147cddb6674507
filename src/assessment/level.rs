//! Risk level classification
//!
//! Maps accumulated assessment points onto the three risk tiers and carries
//! the follow-up guidance shown with each tier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk tiers for assessment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk (0-4 points)
    Low = 1,
    /// Moderate risk (5-8 points)
    Moderate = 2,
    /// High risk (9 points and up)
    High = 3,
}

impl RiskLevel {
    /// Get the numeric value for this risk level
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get a descriptive name for this risk level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Follow-up guidance shown with a result at this level.
    #[must_use]
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::Low => {
                "Keep it up! Maintain a healthy lifestyle. View jogging paths in your area."
            }
            Self::Moderate => {
                "Visit your Barangay Health Center for a blood pressure check and consultation."
            }
            Self::High => {
                "Consult a doctor immediately. Consider activating your LifeQR for emergency preparedness."
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Classify a total point score into a risk level
#[must_use]
pub const fn classify_points(points: i32) -> RiskLevel {
    if points <= 4 {
        RiskLevel::Low
    } else if points <= 8 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify_points(0), RiskLevel::Low);
        assert_eq!(classify_points(4), RiskLevel::Low);
        assert_eq!(classify_points(5), RiskLevel::Moderate);
        assert_eq!(classify_points(8), RiskLevel::Moderate);
        assert_eq!(classify_points(9), RiskLevel::High);
        assert_eq!(classify_points(40), RiskLevel::High);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert_eq!(RiskLevel::Low.as_i32(), 1);
        assert_eq!(RiskLevel::High.as_i32(), 3);
    }
}
