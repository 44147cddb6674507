//! Emergency identification content
//!
//! Fixed reference content for the identify screens: the F.A.S.T. stroke
//! cards, heart attack warning signs, pediatric emergency signs, and the
//! dengue symptom lists, plus the hotline numbers every screen offers.

use std::fmt;

use crate::emergency::FastSign;

/// National emergency hotline.
pub const EMERGENCY_HOTLINE: &str = "911";

/// Naga City Health Office hotline.
pub const CITY_HEALTH_OFFICE_HOTLINE: &str = "(054) 473-2326";

/// Call-to-action shown while the stroke response timer runs.
pub const STROKE_CALL_PROMPT: &str = "Call (054) 473-2326 or 911 immediately!";

/// Emergency identification topics, one per screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifyTopic {
    /// Stroke recognition
    Stroke,
    /// Heart attack recognition
    HeartAttack,
    /// Dengue danger signs
    Dengue,
    /// Pediatric emergencies
    ChildEmergency,
}

impl IdentifyTopic {
    /// Menu title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Stroke => "Stroke",
            Self::HeartAttack => "Heart Attack",
            Self::Dengue => "Dengue",
            Self::ChildEmergency => "Child Emergency",
        }
    }

    /// Menu subtitle.
    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Stroke => "Brain Emergency",
            Self::HeartAttack => "Cardiac Emergency",
            Self::Dengue => "Fever & Warning Signs",
            Self::ChildEmergency => "Pediatric Alerts",
        }
    }

    /// All topics in menu order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Stroke,
            Self::HeartAttack,
            Self::Dengue,
            Self::ChildEmergency,
        ]
    }
}

impl fmt::Display for IdentifyTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One F.A.S.T. instruction card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastCard {
    /// The check this card explains
    pub sign: FastSign,
    /// What to look for
    pub question: &'static str,
    /// How to check it
    pub instruction: &'static str,
}

/// The four F.A.S.T. cards in mnemonic order.
#[must_use]
pub fn fast_cards() -> Vec<FastCard> {
    vec![
        FastCard {
            sign: FastSign::Face,
            question: "Does one side of the face droop?",
            instruction: "Ask the person to smile.",
        },
        FastCard {
            sign: FastSign::Arms,
            question: "Does one arm drift downward?",
            instruction: "Ask them to raise both arms.",
        },
        FastCard {
            sign: FastSign::Speech,
            question: "Is speech slurred or strange?",
            instruction: "Ask them to repeat a simple phrase.",
        },
        FastCard {
            sign: FastSign::Time,
            question: "Call (054) 473-2326 IMMEDIATELY",
            instruction: "Time is brain. Every second counts.",
        },
    ]
}

/// A titled warning sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningSign {
    /// Sign name
    pub title: &'static str,
    /// What it looks like
    pub description: &'static str,
}

/// Heart attack warning signs.
#[must_use]
pub fn heart_attack_signs() -> Vec<WarningSign> {
    vec![
        WarningSign {
            title: "Chest Discomfort",
            description: "Pressure, squeezing, fullness, or pain in the center/left side of \
                          chest lasting more than a few minutes",
        },
        WarningSign {
            title: "Upper Body Pain",
            description: "Pain or discomfort in arms, back, neck, jaw, or stomach",
        },
        WarningSign {
            title: "Shortness of Breath",
            description: "With or without chest pain, may feel like can't catch your breath",
        },
        WarningSign {
            title: "Other Signs",
            description: "Cold sweat, nausea, lightheadedness, or sudden fatigue",
        },
    ]
}

/// Dengue danger signs requiring immediate medical attention.
#[must_use]
pub fn dengue_danger_signs() -> Vec<WarningSign> {
    vec![
        WarningSign {
            title: "Severe Abdominal Pain",
            description: "Persistent vomiting, intense pain in stomach area",
        },
        WarningSign {
            title: "Bleeding",
            description: "Nose bleeds, bleeding gums, vomiting blood, or blood in stool",
        },
        WarningSign {
            title: "Restlessness/Lethargy",
            description: "Sudden behavior changes, extreme tiredness, or confusion",
        },
        WarningSign {
            title: "Fluid Accumulation",
            description: "Swelling in chest, abdomen, or difficulty breathing",
        },
    ]
}

/// Common dengue symptoms, in display order.
#[must_use]
pub fn dengue_symptoms() -> Vec<&'static str> {
    vec![
        "High fever (40°C)",
        "Severe headache",
        "Pain behind the eyes",
        "Joint and muscle pain",
        "Rash (appears 2-5 days after fever)",
        "Mild bleeding (nose, gums)",
    ]
}

/// How quickly a pediatric sign needs care
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Call emergency services or go to the ER now
    Emergency,
    /// Seek medical care the same day
    Urgent,
}

impl Urgency {
    /// Display label for this urgency.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A pediatric emergency sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildEmergencySign {
    /// Sign name
    pub title: &'static str,
    /// Ages it applies to
    pub age_group: &'static str,
    /// What it looks like
    pub description: &'static str,
    /// What to do
    pub action: &'static str,
    /// How fast to act
    pub urgency: Urgency,
}

/// Pediatric signs that call for immediate help.
#[must_use]
pub fn child_emergency_signs() -> Vec<ChildEmergencySign> {
    vec![
        ChildEmergencySign {
            title: "High Fever in Infants",
            age_group: "< 3 months",
            description: "Rectal temp ≥ 38°C",
            action: "Go to ER immediately",
            urgency: Urgency::Emergency,
        },
        ChildEmergencySign {
            title: "Difficulty Breathing",
            age_group: "All ages",
            description: "Fast breathing, gasping, blue lips, chest indrawing",
            action: "Call 911 now",
            urgency: Urgency::Emergency,
        },
        ChildEmergencySign {
            title: "Severe Dehydration",
            age_group: "All ages",
            description: "No tears, dry mouth, no wet diapers for 8+ hours, sunken eyes",
            action: "Seek medical care urgently",
            urgency: Urgency::Urgent,
        },
        ChildEmergencySign {
            title: "Seizures",
            age_group: "All ages",
            description: "Uncontrolled shaking, loss of consciousness",
            action: "Call 911, protect from injury",
            urgency: Urgency::Emergency,
        },
        ChildEmergencySign {
            title: "Lethargy/Unresponsive",
            age_group: "All ages",
            description: "Unusually sleepy, won't wake up, not alert",
            action: "Go to ER immediately",
            urgency: Urgency::Emergency,
        },
        ChildEmergencySign {
            title: "Severe Vomiting/Diarrhea",
            age_group: "< 2 years",
            description: "Persistent vomiting, can't keep fluids down, bloody stool",
            action: "Seek medical attention",
            urgency: Urgency::Urgent,
        },
    ]
}
