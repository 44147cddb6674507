//! Assessment categories
//!
//! The focus areas a user can be assessed for. Each category owns a fixed
//! question table in the bank.

use std::fmt;

/// Risk assessment focus areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessmentCategory {
    /// Overall heart health and disease risk
    Cardiovascular,
    /// Stroke risk factors
    Stroke,
    /// Heart attack probability
    HeartAttack,
}

impl AssessmentCategory {
    /// Parses a category identifier. Unrecognized names yield `None`; the
    /// caller decides how to proceed without a selection.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "cardiovascular" | "cvd" => Some(Self::Cardiovascular),
            "stroke" => Some(Self::Stroke),
            "heartattack" | "heart-attack" => Some(Self::HeartAttack),
            _ => None,
        }
    }

    /// Canonical identifier for this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardiovascular => "cardiovascular",
            Self::Stroke => "stroke",
            Self::HeartAttack => "heartattack",
        }
    }

    /// Display title for this category.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Cardiovascular => "Cardiovascular Health",
            Self::Stroke => "Stroke Risk",
            Self::HeartAttack => "Heart Attack",
        }
    }

    /// One-line summary shown on the selection card.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Cardiovascular => "Assess overall heart health and disease risk",
            Self::Stroke => "Evaluate your risk factors for stroke",
            Self::HeartAttack => "Calculate heart attack probability",
        }
    }

    /// All assessment categories, in selection order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Cardiovascular, Self::Stroke, Self::HeartAttack]
    }
}

impl fmt::Display for AssessmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
