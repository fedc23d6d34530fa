//! The quiz session core: per-question timing, the answer/advance state
//! machine, and skill-tier classification.

pub mod classifier;
mod state;
mod timer;

use std::time::Duration;

pub use classifier::{Assessment, SkillLevel};
pub use state::{Phase, QuizSession, SessionError};
pub use timer::Countdown;

/// How long the user has to answer each question.
pub const ANSWER_TIME_LIMIT: Duration = Duration::from_secs(20);

/// Pause between recording an answer and showing the next question.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(1500);
