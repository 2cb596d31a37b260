use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("option '{option_id}' does not belong to question {question_id}")]
    InvalidOptionReference { question_id: u32, option_id: String },

    #[error("unknown question: {0}")]
    UnknownQuestion(u32),

    #[error("question {question_id} allows one answer, got {count}")]
    TooManyAnswers { question_id: u32, count: usize },

    #[error("question {question_id} has no answer selected")]
    Unanswered { question_id: u32 },

    #[error("questionnaire has no questions")]
    EmptyQuestionnaire,

    #[error("quiz is already complete")]
    QuizComplete,
}
