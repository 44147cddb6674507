//! Question and scoring-rule definitions
//!
//! Questions are either free numeric entries scored against threshold rules
//! or single-choice entries scored by the selected option. Every option of
//! a choice question carries its point value explicitly, zero included, so
//! the scoring table covers exactly the declared answers.

/// Upper bound applied to numeric answers when a question declares no
/// maximum.
pub const DEFAULT_NUMERIC_MAX: f64 = 120.0;

/// Comparison operator for a threshold rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// The answer must be strictly greater than the threshold
    GreaterThan,
}

/// Points awarded when a numeric answer satisfies a comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRule {
    /// Comparison applied to the answer
    pub op: Comparison,
    /// Value the answer is compared against
    pub threshold: f64,
    /// Points added when the comparison holds
    pub points: i32,
}

impl ThresholdRule {
    /// Whether `value` satisfies this rule. Equality never satisfies
    /// `GreaterThan`.
    #[must_use]
    pub fn matches(&self, value: f64) -> bool {
        match self.op {
            Comparison::GreaterThan => value > self.threshold,
        }
    }
}

/// One selectable answer for a single-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Stored answer value
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
    /// Points contributed when selected
    pub points: i32,
}

/// Numeric input constraints and scoring rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericInput {
    /// Smallest value the form accepts
    pub min: f64,
    /// Largest value accepted for scoring; [`DEFAULT_NUMERIC_MAX`] applies
    /// when unset
    pub max: Option<f64>,
    /// Step hint for form rendering
    pub step: Option<f64>,
    /// Threshold rules; every satisfied rule contributes its points
    pub rules: &'static [ThresholdRule],
}

impl NumericInput {
    /// Largest value this input accepts for scoring.
    #[must_use]
    pub fn effective_max(&self) -> f64 {
        self.max.unwrap_or(DEFAULT_NUMERIC_MAX)
    }
}

/// Fixed option list for a single-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceInput {
    /// Selectable options in display order
    pub options: &'static [ChoiceOption],
}

impl ChoiceInput {
    /// Points for the option stored as `value`; an unmatched value
    /// contributes nothing.
    #[must_use]
    pub fn points_for(&self, value: &str) -> i32 {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map_or(0, |option| option.points)
    }
}

/// How a question is answered and scored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    /// Free numeric entry
    Numeric(NumericInput),
    /// One of a fixed set of options
    SingleChoice(ChoiceInput),
}

/// A single assessment question
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionDefinition {
    /// Identifier, unique within its category
    pub id: &'static str,
    /// Question text shown to the user
    pub label: &'static str,
    /// Input kind with its scoring rules
    pub input: InputKind,
}
