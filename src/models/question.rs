use serde::{Deserialize, Serialize};

/// Number of questions a session always contains.
pub const QUESTIONS_PER_SESSION: usize = 20;

/// Number of answer options per question.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_option_index: usize,
}

/// A question together with the outcome recorded for it.
///
/// Created exactly once per question, at the moment it is answered or
/// times out. A timeout is recorded as `chosen_option_index = None` and is
/// always incorrect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub chosen_option_index: Option<usize>,
    pub is_correct: bool,
}
