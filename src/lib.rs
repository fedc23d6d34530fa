//! # skillquiz
//!
//! A terminal skill-assessment quiz. The app asks for a name and a
//! technical domain, has an AI collaborator generate 20 multiple-choice
//! questions, runs them under a 20-second-per-question countdown, scores
//! the run, classifies the result into a skill tier, fetches tailored
//! learning-resource recommendations, and keeps a local history of
//! completed sessions. Expert-tier results can be exported as a
//! certificate.
//!
//! The session core is usable as a library without the terminal UI:
//!
//! ```rust
//! use skillquiz::models::Question;
//! use skillquiz::session::{classifier, QuizSession};
//!
//! let questions = vec![Question {
//!     text: "Which layer does TCP live in?".to_string(),
//!     options: [
//!         "Application".to_string(),
//!         "Transport".to_string(),
//!         "Network".to_string(),
//!         "Link".to_string(),
//!     ],
//!     correct_option_index: 1,
//! }];
//!
//! let mut session = QuizSession::new(questions).unwrap();
//! session.submit_answer(Some(1));
//! session.finish_transition();
//!
//! assert!(session.is_complete());
//! assert_eq!(session.percentage(), 100);
//! assert!(classifier::eligible_for_certificate(session.percentage()));
//! ```

pub mod ai;
mod app;
pub mod certificate;
pub mod history;
pub mod models;
mod runner;
pub mod session;
mod ui;

pub use app::{App, HomeForm, QuizRun, ResourcePanel, ResultsView, Screen};
pub use runner::{run, Collaborators};
