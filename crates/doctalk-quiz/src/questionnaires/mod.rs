pub mod symptom_quiz;
