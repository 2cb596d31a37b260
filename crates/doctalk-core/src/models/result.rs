use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::QuestionCategory;
use super::risk::RiskTier;

/// Score of one category within a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category: QuestionCategory,
    /// Sum of the weights of every selected option in this category.
    pub raw_score: u32,
    /// Highest score this category's questions can produce.
    pub max_score: u32,
    pub tier: RiskTier,
}

impl CategoryScore {
    /// Share of the maximum reached, 0–100. A category whose maximum is
    /// zero reports 0.
    pub fn percentage(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        f64::from(self.raw_score) / f64::from(self.max_score) * 100.0
    }
}

/// One score per category. A fixed record rather than a map so a
/// category can never be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScores {
    pub general: CategoryScore,
    #[serde(rename = "breast-cancer")]
    pub breast_cancer: CategoryScore,
    pub pcod: CategoryScore,
    pub pcos: CategoryScore,
}

impl CategoryScores {
    /// Build the record by scoring each category in questionnaire order.
    pub fn from_fn(mut score: impl FnMut(QuestionCategory) -> CategoryScore) -> Self {
        Self {
            general: score(QuestionCategory::General),
            breast_cancer: score(QuestionCategory::BreastCancer),
            pcod: score(QuestionCategory::Pcod),
            pcos: score(QuestionCategory::Pcos),
        }
    }

    pub fn get(&self, category: QuestionCategory) -> &CategoryScore {
        match category {
            QuestionCategory::General => &self.general,
            QuestionCategory::BreastCancer => &self.breast_cancer,
            QuestionCategory::Pcod => &self.pcod,
            QuestionCategory::Pcos => &self.pcos,
        }
    }

    pub fn tier(&self, category: QuestionCategory) -> RiskTier {
        self.get(category).tier
    }

    /// Scores in questionnaire order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        QuestionCategory::ALL.into_iter().map(move |c| self.get(c))
    }

    /// Scores that get their own result card.
    pub fn reported(&self) -> impl Iterator<Item = &CategoryScore> {
        self.iter().filter(|s| s.category.is_reported())
    }

    /// The most severe tier across all four categories.
    pub fn highest_tier(&self) -> RiskTier {
        self.iter()
            .map(|s| s.tier)
            .max()
            .unwrap_or(RiskTier::LowRisk)
    }
}

/// Snapshot of a completed quiz run. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizResult {
    pub timestamp: jiff::Timestamp,
    pub overall_tier: RiskTier,
    pub category_scores: CategoryScores,
    pub recommendations: Vec<String>,
}
