mod domain;
mod history;
mod question;

pub use domain::{Domain, DOMAINS};
pub use history::HistoryEntry;
pub use question::{AnsweredQuestion, Question, OPTIONS_PER_QUESTION, QUESTIONS_PER_SESSION};
