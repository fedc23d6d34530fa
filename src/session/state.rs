use thiserror::Error;

use crate::models::{AnsweredQuestion, Question};

use super::classifier;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a quiz session needs at least one question")]
    NoQuestions,
}

/// Where a session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Awaiting exactly one of: an answer for the current question, or the
    /// question timer's expiry.
    Active,
    /// An answer was just recorded; input for that question is closed
    /// until the transition delay elapses.
    Transitioning,
    /// Terminal. All questions answered or timed out.
    Complete,
}

/// Drives one quiz run from the first question to completion.
///
/// The session owns its question sequence and answer log; it is
/// deliberately clock-free. The caller polls the timers and feeds the
/// session `submit_answer` (an expiry maps to `submit_answer(None)`) and
/// `finish_transition` when the transition delay has elapsed.
///
/// Invariants upheld throughout: `answered().len() == current_index()`,
/// and `score()` equals the number of correct entries in the answer log.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    answered: Vec<AnsweredQuestion>,
    current_index: usize,
    score: usize,
    phase: Phase,
}

impl QuizSession {
    /// Start a session over a fixed question sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoQuestions`] for an empty sequence; a
    /// session must never start without questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        let total = questions.len();
        Ok(Self {
            questions,
            answered: Vec::with_capacity(total),
            current_index: 0,
            score: 0,
            phase: Phase::Active,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions already answered or timed out.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// The question awaiting an answer. `None` once every question has
    /// been recorded.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// The most recently recorded outcome, shown during the transition
    /// window.
    pub fn last_answered(&self) -> Option<&AnsweredQuestion> {
        self.answered.last()
    }

    pub fn answered(&self) -> &[AnsweredQuestion] {
        &self.answered
    }

    /// Consume the session, yielding the full answer log.
    pub fn into_answers(self) -> Vec<AnsweredQuestion> {
        self.answered
    }

    /// Final score as a rounded percentage.
    pub fn percentage(&self) -> u8 {
        classifier::percentage(self.score, self.questions.len())
    }

    /// Record the outcome for the current question.
    ///
    /// `None` means the question timed out and is always scored
    /// incorrect. Valid only in the [`Phase::Active`] phase; a second
    /// submission for the same question is silently ignored and the call
    /// returns `false`.
    pub fn submit_answer(&mut self, chosen: Option<usize>) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        let Some(question) = self.questions.get(self.current_index).cloned() else {
            return false;
        };
        let is_correct = chosen == Some(question.correct_option_index);
        if is_correct {
            self.score += 1;
        }
        self.answered.push(AnsweredQuestion {
            question,
            chosen_option_index: chosen,
            is_correct,
        });
        self.current_index += 1;
        self.phase = Phase::Transitioning;
        true
    }

    /// Leave the transition window: advance to the next question, or
    /// complete the session when the last question has been recorded.
    pub fn finish_transition(&mut self) {
        if self.phase != Phase::Transitioning {
            return;
        }
        self.phase = if self.current_index < self.questions.len() {
            Phase::Active
        } else {
            Phase::Complete
        };
    }
}
