//! doctalk-quiz
//!
//! Symptom quiz definitions and the risk scoring engine. Pure data and
//! pure functions: persistence and presentation belong to the caller.

pub mod answers;
pub mod error;
pub mod question;
pub mod questionnaires;
pub mod recommendations;
pub mod scoring;
pub mod session;

use doctalk_core::models::QuizResult;

use answers::AnswerSet;
use error::QuizError;
use question::Question;

/// Trait implemented by each questionnaire the app can run.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "symptom_quiz").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Questions in presentation order.
    fn questions(&self) -> &[Question];

    fn question(&self, id: u32) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    /// Check an answer set that did not come through [`AnswerSet::select`],
    /// e.g. one deserialized from a client. Completeness is not checked
    /// here; see [`AnswerSet::first_unanswered`].
    fn validate_answers(&self, answers: &AnswerSet) -> Vec<QuizError> {
        let mut errors = Vec::new();
        for (question_id, selected) in answers.entries() {
            let Some(question) = self.question(question_id) else {
                errors.push(QuizError::UnknownQuestion(question_id));
                continue;
            };

            if !question.allows_multiple_answers && selected.len() > 1 {
                errors.push(QuizError::TooManyAnswers {
                    question_id,
                    count: selected.len(),
                });
            }

            for option_id in selected {
                if question.option(option_id).is_none() {
                    errors.push(QuizError::InvalidOptionReference {
                        question_id,
                        option_id: option_id.clone(),
                    });
                }
            }
        }
        errors
    }

    /// Score a fully answered set.
    fn evaluate(&self, answers: &AnswerSet) -> QuizResult {
        scoring::evaluate(self.questions(), answers)
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![Box::new(questionnaires::symptom_quiz::SymptomQuiz)]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
