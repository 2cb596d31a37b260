use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::question::Question;

/// Selected option ids per question id. Each id is held at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    selections: BTreeMap<u32, BTreeSet<String>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection. Single-answer questions replace any previous
    /// choice; multi-answer questions toggle the option on or off.
    pub fn select(&mut self, question: &Question, option_id: &str) -> Result<(), QuizError> {
        if question.option(option_id).is_none() {
            return Err(QuizError::InvalidOptionReference {
                question_id: question.id,
                option_id: option_id.to_string(),
            });
        }

        let selected = self.selections.entry(question.id).or_default();
        if !question.allows_multiple_answers {
            selected.clear();
            selected.insert(option_id.to_string());
        } else if !selected.remove(option_id) {
            selected.insert(option_id.to_string());
        }

        if selected.is_empty() {
            self.selections.remove(&question.id);
        }
        Ok(())
    }

    /// Remove a selection. Returns whether it was selected.
    pub fn deselect(&mut self, question: &Question, option_id: &str) -> Result<bool, QuizError> {
        if question.option(option_id).is_none() {
            return Err(QuizError::InvalidOptionReference {
                question_id: question.id,
                option_id: option_id.to_string(),
            });
        }

        let Some(selected) = self.selections.get_mut(&question.id) else {
            return Ok(false);
        };
        let removed = selected.remove(option_id);
        if selected.is_empty() {
            self.selections.remove(&question.id);
        }
        Ok(removed)
    }

    pub fn selected(&self, question_id: u32) -> impl Iterator<Item = &str> {
        self.selections
            .get(&question_id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn is_selected(&self, question_id: u32, option_id: &str) -> bool {
        self.selections
            .get(&question_id)
            .is_some_and(|s| s.contains(option_id))
    }

    pub fn is_answered(&self, question_id: u32) -> bool {
        self.selections
            .get(&question_id)
            .is_some_and(|s| !s.is_empty())
    }

    pub fn first_unanswered<'q>(&self, questions: &'q [Question]) -> Option<&'q Question> {
        questions.iter().find(|q| !self.is_answered(q.id))
    }

    pub fn is_complete(&self, questions: &[Question]) -> bool {
        self.first_unanswered(questions).is_none()
    }

    pub fn entries(&self) -> impl Iterator<Item = (u32, &BTreeSet<String>)> {
        self.selections.iter().map(|(id, s)| (*id, s))
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }
}
