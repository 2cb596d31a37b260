use doctalk_core::models::QuestionCategory;

use crate::Questionnaire;
use crate::question::{AnswerOption, Question};

/// Women's health symptom quiz: 15 questions covering general health,
/// breast cancer, PCOD and PCOS. Weights are product decisions and must
/// not be tuned without clinical review.
pub struct SymptomQuiz;

fn question(
    id: u32,
    category: QuestionCategory,
    allows_multiple_answers: bool,
    text: &str,
    options: &[(&str, &str, u32)],
) -> Question {
    Question {
        id,
        text: text.to_string(),
        category,
        options: options
            .iter()
            .map(|(id, text, risk_weight)| AnswerOption {
                id: id.to_string(),
                text: text.to_string(),
                risk_weight: *risk_weight,
            })
            .collect(),
        allows_multiple_answers,
    }
}

impl Questionnaire for SymptomQuiz {
    fn id(&self) -> &str {
        "symptom_quiz"
    }

    fn name(&self) -> &str {
        "Women's Health Symptom Quiz"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            use QuestionCategory::{BreastCancer, General, Pcod, Pcos};

            vec![
                question(1, General, false, "What is your age?", &[
                    ("1a", "Under 30", 1),
                    ("1b", "30-40", 2),
                    ("1c", "41-50", 3),
                    ("1d", "Over 50", 4),
                ]),
                question(
                    2,
                    General,
                    true,
                    "Do you have a family history of breast cancer, PCOD, or PCOS?",
                    &[
                        ("2a", "Family history of breast cancer", 3),
                        ("2b", "Family history of PCOD", 2),
                        ("2c", "Family history of PCOS", 2),
                        ("2d", "No family history of these conditions", 0),
                    ],
                ),
                question(3, General, false, "How would you describe your current weight?", &[
                    ("3a", "Underweight", 1),
                    ("3b", "Normal weight", 0),
                    ("3c", "Slightly overweight", 1),
                    ("3d", "Significantly overweight", 2),
                ]),
                question(
                    4,
                    BreastCancer,
                    true,
                    "Have you noticed any changes in the appearance of your breasts?",
                    &[
                        ("4a", "Dimpling or puckering of the skin", 4),
                        ("4b", "Redness or scaling of nipple or breast skin", 4),
                        ("4c", "Nipple discharge other than breast milk", 3),
                        ("4d", "Change in size or shape of the breast", 3),
                        ("4e", "No changes noticed", 0),
                    ],
                ),
                question(
                    5,
                    BreastCancer,
                    false,
                    "Have you felt any lumps or thickening in your breast or underarm area?",
                    &[
                        ("5a", "Yes, in the breast", 5),
                        ("5b", "Yes, in the underarm area", 4),
                        ("5c", "Yes, in both areas", 5),
                        ("5d", "No", 0),
                    ],
                ),
                question(
                    6,
                    BreastCancer,
                    false,
                    "How frequently do you perform breast self-examinations?",
                    &[
                        ("6a", "Monthly", 0),
                        ("6b", "Every few months", 1),
                        ("6c", "Rarely", 2),
                        ("6d", "Never", 3),
                    ],
                ),
                question(
                    7,
                    BreastCancer,
                    false,
                    "When was your last mammogram or breast ultrasound?",
                    &[
                        ("7a", "Within the last year", 0),
                        ("7b", "1-2 years ago", 1),
                        ("7c", "More than 2 years ago", 2),
                        ("7d", "Never had one", 3),
                    ],
                ),
                question(8, Pcod, false, "How would you describe your menstrual cycle?", &[
                    ("8a", "Regular (every 21-35 days)", 0),
                    ("8b", "Somewhat irregular", 2),
                    ("8c", "Very irregular or unpredictable", 4),
                    ("8d", "Absent for extended periods", 5),
                ]),
                question(
                    9,
                    Pcod,
                    false,
                    "Do you experience unusually heavy bleeding during periods?",
                    &[
                        ("9a", "Yes, regularly", 4),
                        ("9b", "Sometimes", 2),
                        ("9c", "Rarely", 1),
                        ("9d", "No", 0),
                    ],
                ),
                question(
                    10,
                    Pcod,
                    false,
                    "Have you noticed increased hair growth on face, chest, or back?",
                    &[
                        ("10a", "Yes, significant increase", 4),
                        ("10b", "Yes, slight increase", 3),
                        ("10c", "No change", 0),
                        ("10d", "Not applicable", 0),
                    ],
                ),
                question(
                    11,
                    Pcod,
                    false,
                    "Do you experience acne that worsens around your period?",
                    &[
                        ("11a", "Yes, severe acne", 3),
                        ("11b", "Yes, moderate acne", 2),
                        ("11c", "Yes, mild acne", 1),
                        ("11d", "No", 0),
                    ],
                ),
                question(
                    12,
                    Pcos,
                    false,
                    "Have you been diagnosed with or suspect insulin resistance?",
                    &[
                        ("12a", "Yes, diagnosed", 5),
                        ("12b", "Suspect but not diagnosed", 3),
                        ("12c", "No", 0),
                        ("12d", "Don't know", 1),
                    ],
                ),
                question(
                    13,
                    Pcos,
                    false,
                    "Have you experienced rapid weight gain, especially around the abdomen?",
                    &[
                        ("13a", "Yes, significant weight gain", 4),
                        ("13b", "Yes, moderate weight gain", 3),
                        ("13c", "Yes, slight weight gain", 2),
                        ("13d", "No", 0),
                    ],
                ),
                question(
                    14,
                    Pcos,
                    false,
                    "Do you experience skin tags (small growth of skin) or darkening of skin \
                     in neck folds or armpits?",
                    &[
                        ("14a", "Yes, both", 4),
                        ("14b", "Yes, skin tags", 2),
                        ("14c", "Yes, skin darkening", 2),
                        ("14d", "No", 0),
                    ],
                ),
                question(
                    15,
                    Pcos,
                    false,
                    "Have you been trying to conceive without success for more than 12 months?",
                    &[
                        ("15a", "Yes", 4),
                        ("15b", "No, but concerned about fertility", 2),
                        ("15c", "No, not trying to conceive", 0),
                        ("15d", "Prefer not to answer", 0),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }
}
