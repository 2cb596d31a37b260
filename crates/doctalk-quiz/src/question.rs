use doctalk_core::models::QuestionCategory;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring;

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    /// Contribution to the category score when selected. 0 means no
    /// elevated risk.
    pub risk_weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub category: QuestionCategory,
    pub options: Vec<AnswerOption>,
    pub allows_multiple_answers: bool,
}

impl Question {
    pub fn option(&self, id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn max_possible_score(&self) -> u32 {
        scoring::compute_max_possible_score(self)
    }
}
