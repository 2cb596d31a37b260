//! Answer collection workflow.
//!
//! Presents one question at a time and refuses to advance past a question
//! with no selection, so the engine only ever sees a complete answer set.

use doctalk_core::models::QuizResult;

use crate::answers::AnswerSet;
use crate::error::QuizError;
use crate::question::Question;
use crate::scoring;

/// Outcome of [`QuizSession::next`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved on to the question at this step.
    Question(usize),
    /// The last question was answered and the quiz was scored.
    Completed(QuizResult),
}

#[derive(Debug, Clone)]
pub struct QuizSession<'q> {
    questions: &'q [Question],
    step: usize,
    answers: AnswerSet,
    result: Option<QuizResult>,
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q [Question]) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionnaire);
        }
        Ok(Self {
            questions,
            step: 0,
            answers: AnswerSet::new(),
            result: None,
        })
    }

    pub fn current_question(&self) -> &'q Question {
        &self.questions[self.step]
    }

    /// Zero-based index of the current question.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 == self.questions.len()
    }

    /// Share of questions already passed, 0–100.
    pub fn progress_percent(&self) -> f64 {
        if self.result.is_some() {
            return 100.0;
        }
        self.step as f64 / self.questions.len() as f64 * 100.0
    }

    /// Select (or for multi-answer questions, toggle) an option of the
    /// current question.
    pub fn select(&mut self, option_id: &str) -> Result<(), QuizError> {
        if self.result.is_some() {
            return Err(QuizError::QuizComplete);
        }
        self.answers.select(self.current_question(), option_id)
    }

    pub fn is_selected(&self, option_id: &str) -> bool {
        self.answers
            .is_selected(self.current_question().id, option_id)
    }

    /// Advance to the next question, or score the quiz when the current
    /// question is the last one.
    pub fn next(&mut self) -> Result<Advance, QuizError> {
        if self.result.is_some() {
            return Err(QuizError::QuizComplete);
        }

        let question = self.current_question();
        if !self.answers.is_answered(question.id) {
            return Err(QuizError::Unanswered {
                question_id: question.id,
            });
        }

        if !self.is_last() {
            self.step += 1;
            return Ok(Advance::Question(self.step));
        }

        let result = scoring::evaluate(self.questions, &self.answers);
        self.result = Some(result.clone());
        Ok(Advance::Completed(result))
    }

    /// Go back one question, keeping its answers. Returns whether the
    /// step moved.
    pub fn back(&mut self) -> bool {
        if self.result.is_some() || self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Discard all answers and any result and start from the first question.
    pub fn restart(&mut self) {
        self.step = 0;
        self.answers.clear();
        self.result = None;
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }
}
