//! Blood group classification

use std::fmt;

/// Blood group of a passport holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodType {
    /// A positive
    APositive,
    /// A negative
    ANegative,
    /// B positive
    BPositive,
    /// B negative
    BNegative,
    /// AB positive
    AbPositive,
    /// AB negative
    AbNegative,
    /// O positive
    OPositive,
    /// O negative
    ONegative,
    /// Not set or unrecognized
    Unknown,
}

impl From<&str> for BloodType {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "A+" => Self::APositive,
            "A-" => Self::ANegative,
            "B+" => Self::BPositive,
            "B-" => Self::BNegative,
            "AB+" => Self::AbPositive,
            "AB-" => Self::AbNegative,
            "O+" => Self::OPositive,
            "O-" => Self::ONegative,
            _ => Self::Unknown,
        }
    }
}

impl BloodType {
    /// Stored code for this blood group; the empty string means "not set".
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
            Self::Unknown => "",
        }
    }

    /// All selectable blood groups, in form display order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::APositive,
            Self::ANegative,
            Self::BPositive,
            Self::BNegative,
            Self::AbPositive,
            Self::AbNegative,
            Self::OPositive,
            Self::ONegative,
        ]
    }
}

impl Default for BloodType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            _ => write!(f, "{}", self.code()),
        }
    }
}
