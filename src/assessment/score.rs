//! Risk scoring
//!
//! The pure scoring pass over a category's question table. Input that
//! cannot be interpreted is excluded silently: a missing or empty answer,
//! an unparseable or out-of-range number, or an unrecognized option value
//! contributes nothing, and scoring itself never fails.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::bank;
use super::category::AssessmentCategory;
use super::level::{RiskLevel, classify_points};
use super::question::{InputKind, QuestionDefinition};

/// Raw answers keyed by question id. Partial by design; an empty string is
/// treated the same as an absent entry.
pub type AnswerSet = FxHashMap<String, String>;

/// Outcome of scoring one assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Total points accumulated
    pub points: i32,
    /// Risk tier for the point total
    pub risk_level: RiskLevel,
}

/// Scores an answer set against a category's question table.
///
/// Pure and total: the same input always yields the same result, nothing
/// is mutated, and uninterpretable answers are skipped rather than
/// reported.
#[must_use]
pub fn score(category: AssessmentCategory, answers: &AnswerSet) -> ScoreResult {
    let points = score_questions(bank::questions(category), answers);
    let risk_level = classify_points(points);
    log::debug!("Scored {category}: {points} points, {risk_level} risk");
    ScoreResult { points, risk_level }
}

/// Accumulates points for `questions` against `answers`.
///
/// Numeric answers outside `[0, max]` are skipped entirely, even when a
/// threshold rule would otherwise match. Every satisfied threshold rule
/// contributes its points.
#[must_use]
pub fn score_questions(questions: &[QuestionDefinition], answers: &AnswerSet) -> i32 {
    let mut points = 0;
    for question in questions {
        let value = match answers.get(question.id) {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };

        match &question.input {
            InputKind::Numeric(numeric) => {
                let number = match value.trim().parse::<f64>() {
                    Ok(number) => number,
                    Err(_) => continue,
                };
                if number < 0.0 || number > numeric.effective_max() {
                    continue;
                }
                for rule in numeric.rules {
                    if rule.matches(number) {
                        points += rule.points;
                    }
                }
            }
            InputKind::SingleChoice(choice) => {
                points += choice.points_for(value);
            }
        }
    }
    points
}
