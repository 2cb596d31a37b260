use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Health domain a question is scored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum QuestionCategory {
    General,
    BreastCancer,
    Pcod,
    Pcos,
}

impl QuestionCategory {
    /// Every category, in questionnaire order.
    pub const ALL: [QuestionCategory; 4] = [
        QuestionCategory::General,
        QuestionCategory::BreastCancer,
        QuestionCategory::Pcod,
        QuestionCategory::Pcos,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            QuestionCategory::General => "general",
            QuestionCategory::BreastCancer => "breast-cancer",
            QuestionCategory::Pcod => "pcod",
            QuestionCategory::Pcos => "pcos",
        }
    }

    /// Name shown on a result card.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionCategory::General => "General",
            QuestionCategory::BreastCancer => "Breast Cancer",
            QuestionCategory::Pcod => "PCOD",
            QuestionCategory::Pcos => "PCOS",
        }
    }

    /// Heading shown above a question while the quiz is in progress.
    pub fn section_title(&self) -> &'static str {
        match self {
            QuestionCategory::General => "General Health",
            QuestionCategory::BreastCancer => "Breast Health",
            QuestionCategory::Pcod => "PCOD",
            QuestionCategory::Pcos => "PCOS",
        }
    }

    /// General questions feed the overall tier but get no result card.
    pub fn is_reported(&self) -> bool {
        !matches!(self, QuestionCategory::General)
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for QuestionCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionCategory::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
