//! External AI collaborators: question generation and learning-resource
//! recommendation.
//!
//! Both are narrow asynchronous interfaces. Responses are validated
//! against a strict schema at the boundary; a schema violation is treated
//! the same as any other generation failure.

mod client;
mod file;
pub mod schema;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Question;

pub use client::{AiClient, AiConfig};
pub use file::FileQuestionSource;
pub use schema::{LearningResource, SchemaError};

/// Language the collaborators should answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    #[value(name = "fr", alias = "french")]
    French,
    #[value(name = "en", alias = "english")]
    English,
}

impl Language {
    /// Name used inside prompts.
    pub fn prompt_name(self) -> &'static str {
        match self {
            Self::French => "French",
            Self::English => "English",
        }
    }
}

/// Input for the question-generation collaborator.
#[derive(Debug, Clone)]
pub struct QuestionRequest {
    pub domain: String,
    pub specialty: Option<String>,
    pub language: Language,
}

/// Input for the resource-recommendation collaborator.
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub domain: String,
    pub specialty: Option<String>,
    pub skill_level: String,
    pub language: Language,
}

/// Transport-level failures shared by both collaborators.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("no AI backend is configured; set SKILLQUIZ_API_KEY or pass --questions")]
    Disabled,
    #[error("AI request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("the AI backend returned an empty response")]
    EmptyResponse,
}

/// Failures while producing the question set. Fatal to quiz start: the
/// session is never entered and no retry is attempted.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Request(#[from] AiError),
    #[error("the generator returned malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("failed to read question file {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Session(#[from] crate::session::SessionError),
}

/// Failures while fetching recommendations. Non-fatal: confined to the
/// resources panel of the results screen.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error(transparent)]
    Request(#[from] AiError),
    #[error("the recommender returned malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Produces the fixed question set a session runs over.
#[async_trait]
pub trait QuestionSource {
    async fn generate(&self, request: &QuestionRequest) -> Result<Vec<Question>, GenerationError>;
}

/// Recommends learning resources for a finished session.
#[async_trait]
pub trait ResourceRecommender {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<LearningResource>, RecommendationError>;
}
