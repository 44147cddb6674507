//! Health risk assessment
//!
//! Point-based risk scoring: each category carries a fixed table of
//! questions whose answers accumulate points, and the total maps onto a
//! low / moderate / high tier. Scoring is pure and synchronous, and it
//! silently excludes anything it cannot interpret, so it never fails.

pub mod bank;
mod category;
mod level;
mod question;
mod score;
mod session;

pub use category::AssessmentCategory;
pub use level::{RiskLevel, classify_points};
pub use question::{
    ChoiceInput, ChoiceOption, Comparison, DEFAULT_NUMERIC_MAX, InputKind, NumericInput,
    QuestionDefinition, ThresholdRule,
};
pub use score::{AnswerSet, ScoreResult, score, score_questions};
pub use session::AssessmentSession;
