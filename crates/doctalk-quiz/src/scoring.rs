use doctalk_core::models::{CategoryScore, CategoryScores, QuestionCategory, QuizResult, RiskTier};

use crate::answers::AnswerSet;
use crate::question::Question;
use crate::recommendations;

/// Lower bounds (inclusive, percent of the category maximum), most severe
/// first. Anything below the last bound is `LowRisk`.
const TIER_THRESHOLDS: [(u64, RiskTier); 3] = [
    (80, RiskTier::NeedsFurtherCheck),
    (60, RiskTier::HighRisk),
    (30, RiskTier::MediumRisk),
];

/// Highest score a single question can contribute.
///
/// Options of a multi-answer question are independently selectable, so
/// every positive weight counts. A single-answer question contributes at
/// most its heaviest option.
pub fn compute_max_possible_score(question: &Question) -> u32 {
    let weights = question.options.iter().map(|o| o.risk_weight);
    if question.allows_multiple_answers {
        weights.filter(|w| *w > 0).sum()
    } else {
        weights.max().unwrap_or(0)
    }
}

pub fn category_max_score(questions: &[Question], category: QuestionCategory) -> u32 {
    questions
        .iter()
        .filter(|q| q.category == category)
        .map(compute_max_possible_score)
        .sum()
}

/// Sum of the weights of every selected option in `category`.
/// Unanswered questions contribute nothing.
pub fn compute_category_score(
    questions: &[Question],
    category: QuestionCategory,
    answers: &AnswerSet,
) -> u32 {
    questions
        .iter()
        .filter(|q| q.category == category)
        .flat_map(|q| {
            answers
                .selected(q.id)
                .filter_map(move |id| q.option(id))
                .map(|o| o.risk_weight)
        })
        .sum()
}

/// Map a score to a tier by its share of the category maximum.
///
/// Compared as `raw * 100 >= bound * max` so that exactly 30%, 60% and
/// 80% land in the higher tier. A zero maximum is 0%.
pub fn classify(raw_score: u32, max_score: u32) -> RiskTier {
    if max_score == 0 {
        return RiskTier::LowRisk;
    }
    let scaled = u64::from(raw_score) * 100;
    let max = u64::from(max_score);
    TIER_THRESHOLDS
        .iter()
        .find(|(bound, _)| scaled >= bound * max)
        .map(|(_, tier)| *tier)
        .unwrap_or(RiskTier::LowRisk)
}

pub fn score_category(
    questions: &[Question],
    category: QuestionCategory,
    answers: &AnswerSet,
) -> CategoryScore {
    let raw_score = compute_category_score(questions, category, answers);
    let max_score = category_max_score(questions, category);
    CategoryScore {
        category,
        raw_score,
        max_score,
        tier: classify(raw_score, max_score),
    }
}

/// Score a completed quiz, stamped with the current time.
///
/// Callers must only pass a fully answered set; a partial set is scored
/// as-is and comes out under-counted.
pub fn evaluate(questions: &[Question], answers: &AnswerSet) -> QuizResult {
    evaluate_at(questions, answers, jiff::Timestamp::now())
}

pub fn evaluate_at(
    questions: &[Question],
    answers: &AnswerSet,
    timestamp: jiff::Timestamp,
) -> QuizResult {
    let category_scores = CategoryScores::from_fn(|c| score_category(questions, c, answers));
    let overall_tier = category_scores.highest_tier();
    let recommendations = recommendations::recommend(&category_scores, overall_tier);

    QuizResult {
        timestamp,
        overall_tier,
        category_scores,
        recommendations,
    }
}
