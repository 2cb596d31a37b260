//! Fixed advice table applied to a scored quiz.
//!
//! Breast and hormonal rules fire independently of each other; within the
//! hormonal rule the medium-risk advice only applies when neither PCOD nor
//! PCOS is elevated.

use doctalk_core::models::{CategoryScores, QuestionCategory, RiskTier};

pub const BREAST_ELEVATED: [&str; 2] = [
    "Schedule a mammogram or breast ultrasound as soon as possible",
    "Consult with a breast specialist for a comprehensive examination",
];

pub const BREAST_MEDIUM: [&str; 2] = [
    "Ensure regular breast self-examinations",
    "Schedule a routine breast screening with your healthcare provider",
];

pub const HORMONAL_ELEVATED: [&str; 2] = [
    "Consult with an endocrinologist or gynecologist for hormone level testing",
    "Consider an ultrasound to check for ovarian cysts",
];

pub const HORMONAL_MEDIUM: [&str; 2] = [
    "Monitor your menstrual cycle and any symptoms",
    "Discuss hormonal health with your doctor at your next check-up",
];

pub const CONNECT_WITH_DOCTOR: &str = "Connect with a doctor on DocTalk for immediate guidance";

pub fn recommend(scores: &CategoryScores, overall: RiskTier) -> Vec<String> {
    let mut out: Vec<&str> = Vec::new();

    match scores.tier(QuestionCategory::BreastCancer) {
        t if t.is_elevated() => out.extend(BREAST_ELEVATED),
        RiskTier::MediumRisk => out.extend(BREAST_MEDIUM),
        _ => {}
    }

    let pcod = scores.tier(QuestionCategory::Pcod);
    let pcos = scores.tier(QuestionCategory::Pcos);
    if pcod.is_elevated() || pcos.is_elevated() {
        out.extend(HORMONAL_ELEVATED);
    } else if pcod == RiskTier::MediumRisk || pcos == RiskTier::MediumRisk {
        out.extend(HORMONAL_MEDIUM);
    }

    if overall == RiskTier::NeedsFurtherCheck {
        out.push(CONNECT_WITH_DOCTOR);
    }

    out.into_iter().map(str::to_string).collect()
}
