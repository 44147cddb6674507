//! Assessment session state
//!
//! An explicit, owned state object for one assessment flow: pick a
//! category, answer its questions, submit. Selecting or clearing a
//! category always discards previously entered answers, and results are
//! never persisted.

use super::bank;
use super::category::AssessmentCategory;
use super::question::QuestionDefinition;
use super::score::{AnswerSet, ScoreResult, score};

/// State of one assessment flow
#[derive(Debug, Clone, Default)]
pub struct AssessmentSession {
    category: Option<AssessmentCategory>,
    answers: AnswerSet,
}

impl AssessmentSession {
    /// Creates a session with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected category, if any.
    #[must_use]
    pub const fn category(&self) -> Option<AssessmentCategory> {
        self.category
    }

    /// Selects a category, discarding any answers entered so far.
    pub fn select_category(&mut self, category: AssessmentCategory) {
        self.category = Some(category);
        self.answers.clear();
    }

    /// Clears the selection and all answers.
    pub fn clear_selection(&mut self) {
        self.category = None;
        self.answers.clear();
    }

    /// Question table for the selected category; empty when nothing is
    /// selected.
    #[must_use]
    pub fn questions(&self) -> &'static [QuestionDefinition] {
        self.category.map_or(&[], bank::questions)
    }

    /// Records a raw answer. Entries whose id is not in the selected
    /// category's table are kept but never scored.
    pub fn set_answer(&mut self, id: &str, value: &str) {
        self.answers.insert(id.to_string(), value.to_string());
    }

    /// Raw answers entered so far.
    #[must_use]
    pub const fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Ids of the selected category's questions that still lack a
    /// non-empty answer.
    #[must_use]
    pub fn unanswered(&self) -> Vec<&'static str> {
        self.questions()
            .iter()
            .filter(|question| {
                self.answers
                    .get(question.id)
                    .is_none_or(String::is_empty)
            })
            .map(|question| question.id)
            .collect()
    }

    /// Whether every question of the selected category has a non-empty
    /// answer. False while nothing is selected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.category.is_some() && self.unanswered().is_empty()
    }

    /// Scores the current answers. Returns `None` until a category is
    /// selected.
    #[must_use]
    pub fn submit(&self) -> Option<ScoreResult> {
        let category = self.category?;
        Some(score(category, &self.answers))
    }
}
