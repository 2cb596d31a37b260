use doctalk_core::models::RiskTier;
use doctalk_quiz::Questionnaire;
use doctalk_quiz::error::QuizError;
use doctalk_quiz::questionnaires::symptom_quiz::SymptomQuiz;
use doctalk_quiz::session::{Advance, QuizSession};

/// Pick the first option of every question through the session API.
fn run_to_end(session: &mut QuizSession<'_>) -> Advance {
    loop {
        let first = session.current_question().options[0].id.clone();
        session.select(&first).unwrap();
        match session.next().unwrap() {
            Advance::Question(_) => continue,
            done @ Advance::Completed(_) => return done,
        }
    }
}

#[test]
fn empty_questionnaire_is_rejected() {
    assert_eq!(QuizSession::new(&[]).unwrap_err(), QuizError::EmptyQuestionnaire);
}

#[test]
fn cannot_advance_without_an_answer() {
    let quiz = SymptomQuiz;
    let mut session = QuizSession::new(quiz.questions()).unwrap();
    assert_eq!(
        session.next().unwrap_err(),
        QuizError::Unanswered { question_id: 1 }
    );
    assert_eq!(session.step(), 0);
}

#[test]
fn toggled_off_multi_select_blocks_advance() {
    let quiz = SymptomQuiz;
    let mut session = QuizSession::new(quiz.questions()).unwrap();
    session.select("1b").unwrap();
    assert_eq!(session.next().unwrap(), Advance::Question(1));

    assert!(session.current_question().allows_multiple_answers);
    session.select("2a").unwrap();
    session.select("2a").unwrap();
    assert!(!session.is_selected("2a"));
    assert_eq!(
        session.next().unwrap_err(),
        QuizError::Unanswered { question_id: 2 }
    );
}

#[test]
fn back_keeps_answers_and_stops_at_first_question() {
    let quiz = SymptomQuiz;
    let mut session = QuizSession::new(quiz.questions()).unwrap();
    assert!(!session.back());

    session.select("1c").unwrap();
    session.next().unwrap();
    assert!(session.back());
    assert_eq!(session.step(), 0);
    assert!(session.is_selected("1c"));
}

#[test]
fn progress_tracks_current_step() {
    let quiz = SymptomQuiz;
    let mut session = QuizSession::new(quiz.questions()).unwrap();
    assert_eq!(session.progress_percent(), 0.0);

    session.select("1a").unwrap();
    session.next().unwrap();
    assert!((session.progress_percent() - 100.0 / 15.0).abs() < 1e-9);
}

#[test]
fn last_answer_completes_and_scores() {
    let quiz = SymptomQuiz;
    let mut session = QuizSession::new(quiz.questions()).unwrap();

    let Advance::Completed(result) = run_to_end(&mut session) else {
        panic!("expected completion");
    };
    assert!(session.answers().is_complete(quiz.questions()));
    assert_eq!(session.result(), Some(&result));
    assert_eq!(session.progress_percent(), 100.0);

    // first options: pcod 0+4+4+3 = 11/16, pcos is every heaviest option
    assert_eq!(result.category_scores.pcod.raw_score, 11);
    assert_eq!(result.category_scores.pcod.tier, RiskTier::HighRisk);
    assert_eq!(result.category_scores.pcos.raw_score, 17);
    assert_eq!(result.overall_tier, RiskTier::NeedsFurtherCheck);
}

#[test]
fn completed_session_rejects_changes_until_restart() {
    let quiz = SymptomQuiz;
    let mut session = QuizSession::new(quiz.questions()).unwrap();
    run_to_end(&mut session);

    assert_eq!(session.select("15a").unwrap_err(), QuizError::QuizComplete);
    assert_eq!(session.next().unwrap_err(), QuizError::QuizComplete);
    assert!(!session.back());

    session.restart();
    assert_eq!(session.step(), 0);
    assert!(session.result().is_none());
    assert!(!session.answers().is_answered(1));
}
