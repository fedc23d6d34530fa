//! End-to-end exercises of the session core: timing-free session drive,
//! classification, and history persistence, the way the app wires them
//! together after the last question.

use std::path::PathBuf;

use skillquiz::history::HistoryStore;
use skillquiz::models::{HistoryEntry, Question, QUESTIONS_PER_SESSION};
use skillquiz::session::{classifier, Phase, QuizSession, SkillLevel};

fn questions() -> Vec<Question> {
    (0..QUESTIONS_PER_SESSION)
        .map(|i| Question {
            text: format!("question {i}"),
            options: [
                "option 0".to_string(),
                "option 1".to_string(),
                "option 2".to_string(),
                "option 3".to_string(),
            ],
            correct_option_index: i % 4,
        })
        .collect()
}

fn drive(session: &mut QuizSession, answers: impl Iterator<Item = Option<usize>>) {
    for chosen in answers {
        assert_eq!(session.phase(), Phase::Active);
        assert!(session.submit_answer(chosen));
        session.finish_transition();
    }
}

fn temp_history() -> PathBuf {
    std::env::temp_dir().join(format!("skillquiz-flow-{}.json", uuid::Uuid::new_v4()))
}

#[test]
fn all_correct_run_is_expert_with_certificate() {
    let questions = questions();
    let correct: Vec<Option<usize>> = questions
        .iter()
        .map(|q| Some(q.correct_option_index))
        .collect();
    let mut session = QuizSession::new(questions).unwrap();
    drive(&mut session, correct.into_iter());

    assert!(session.is_complete());
    assert_eq!(session.score(), 20);
    assert_eq!(session.percentage(), 100);
    let assessment = classifier::classify(session.percentage());
    assert_eq!(assessment.level, SkillLevel::Expert);
    assert!(classifier::eligible_for_certificate(session.percentage()));

    let answered = session.into_answers();
    assert_eq!(answered.len(), QUESTIONS_PER_SESSION);
    assert!(answered.iter().all(|a| a.is_correct));
}

#[test]
fn all_timeouts_run_is_beginner_without_certificate() {
    let mut session = QuizSession::new(questions()).unwrap();
    drive(&mut session, std::iter::repeat_n(None, QUESTIONS_PER_SESSION));

    assert!(session.is_complete());
    assert_eq!(session.score(), 0);
    assert_eq!(session.percentage(), 0);
    assert_eq!(
        classifier::classify(session.percentage()).level,
        SkillLevel::Beginner
    );
    assert!(!classifier::eligible_for_certificate(session.percentage()));
    assert!(session
        .answered()
        .iter()
        .all(|a| a.chosen_option_index.is_none() && !a.is_correct));
}

#[test]
fn twelve_of_twenty_lands_on_the_intermediate_boundary() {
    let questions = questions();
    let answers: Vec<Option<usize>> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            if i < 12 {
                Some(q.correct_option_index)
            } else {
                // a deliberately wrong pick
                Some((q.correct_option_index + 1) % 4)
            }
        })
        .collect();
    let mut session = QuizSession::new(questions).unwrap();
    drive(&mut session, answers.into_iter());

    assert_eq!(session.score(), 12);
    assert_eq!(session.percentage(), 60);
    assert_eq!(
        classifier::classify(session.percentage()).level,
        SkillLevel::Intermediate
    );
}

#[test]
fn completed_run_survives_a_reload_through_history() {
    let path = temp_history();
    let mut session = QuizSession::new(questions()).unwrap();
    let correct: Vec<Option<usize>> = (0..QUESTIONS_PER_SESSION).map(|i| Some(i % 4)).collect();
    drive(&mut session, correct.into_iter());

    let level = classifier::classify(session.percentage()).level;
    let entry = HistoryEntry::new(
        "Grace".to_string(),
        "Data Analysis".to_string(),
        None,
        session.score(),
        session.total_questions(),
        level.label(),
    );

    let mut store = HistoryStore::load(&path);
    store.append(entry.clone());

    // simulate an app restart
    let reloaded = HistoryStore::load(&path);
    assert_eq!(reloaded.entries().first(), Some(&entry));
    assert_eq!(reloaded.entries()[0].level, "Expert");

    let mut reloaded = reloaded;
    reloaded.clear();
    assert!(HistoryStore::load(&path).is_empty());
}
