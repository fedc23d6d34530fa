//! HTTP client for an OpenAI-compatible chat-completions backend.

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::models::{Question, QUESTIONS_PER_SESSION};

use super::schema::{self, LearningResource};
use super::{
    AiError, GenerationError, QuestionRequest, QuestionSource, RecommendationError,
    RecommendationRequest, ResourceRecommender,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl AiConfig {
    /// Read the configuration from `SKILLQUIZ_API_KEY`,
    /// `SKILLQUIZ_BASE_URL` and `SKILLQUIZ_MODEL`. Returns `None` without
    /// an API key; the client then reports itself as disabled instead of
    /// failing at startup.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("SKILLQUIZ_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("SKILLQUIZ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("SKILLQUIZ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        self
    }
}

/// Implements both collaborators over one chat-completions endpoint.
#[derive(Clone)]
pub struct AiClient {
    client: Client,
    config: Option<AiConfig>,
}

impl AiClient {
    #[must_use]
    pub fn new(config: Option<AiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn chat(&self, prompt: String) -> Result<String, AiError> {
        let config = self.config.as_ref().ok_or(AiError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AiError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AiError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl QuestionSource for AiClient {
    async fn generate(&self, request: &QuestionRequest) -> Result<Vec<Question>, GenerationError> {
        let content = self.chat(generation_prompt(request)).await?;
        let dtos = serde_json::from_str(strip_code_fence(&content))?;
        Ok(schema::validate_questions(dtos)?)
    }
}

#[async_trait]
impl ResourceRecommender for AiClient {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<LearningResource>, RecommendationError> {
        let content = self.chat(recommendation_prompt(request)).await?;
        let dto = serde_json::from_str(strip_code_fence(&content))?;
        Ok(schema::validate_resources(dto)?)
    }
}

fn generation_prompt(request: &QuestionRequest) -> String {
    let language = request.language.prompt_name();
    let specialty = request
        .specialty
        .as_deref()
        .map(|s| format!("\nThe specialty is: {s}."))
        .unwrap_or_default();
    format!(
        "You are a demanding expert instructor who writes technical quizzes in {language}.\n\
         \n\
         Write a quiz of exactly {count} multiple-choice questions in {language} on the \
         domain: {domain}.{specialty}\n\
         \n\
         Requirements:\n\
         1. Progressive difficulty: questions 1-10 cover beginner and intermediate level; \
         questions 11-{count} must be hard, aimed at advanced and expert users.\n\
         2. Every question must be relevant, precise and unambiguous.\n\
         3. Avoid common or trivial questions; incorrect options must be plausible \
         distractors that test real understanding.\n\
         4. Each question has exactly 4 options, exactly one of which is correct.\n\
         \n\
         Answer with a JSON array of {count} objects and nothing else, each shaped as:\n\
         {{\"question\": \"...\", \"options\": [\"...\", \"...\", \"...\", \"...\"], \
         \"correctAnswerIndex\": 0}}",
        count = QUESTIONS_PER_SESSION,
        domain = request.domain,
    )
}

fn recommendation_prompt(request: &RecommendationRequest) -> String {
    let language = request.language.prompt_name();
    let specialty = request
        .specialty
        .as_deref()
        .map(|s| format!("\nSpecialty: {s}"))
        .unwrap_or_default();
    format!(
        "You recommend learning resources in {language}.\n\
         \n\
         Recommend 3 to 5 freely available learning resources (books, tutorials, \
         websites) tailored to the user's level.\n\
         \n\
         Domain: {domain}{specialty}\n\
         Skill level: {skill_level}\n\
         \n\
         All resources must be in {language}. Answer with a JSON object and nothing \
         else, shaped as:\n\
         {{\"resources\": [{{\"title\": \"...\", \"description\": \"...\", \
         \"url\": \"...\"}}]}}",
        domain = request.domain,
        skill_level = request.skill_level,
    )
}

/// Models often wrap JSON answers in a Markdown code fence; strip it.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Language;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("[1, 2]"), "[1, 2]");
        assert_eq!(strip_code_fence("```json\n[1, 2]\n```"), "[1, 2]");
        assert_eq!(strip_code_fence("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("  [1]  "), "[1]");
    }

    #[test]
    fn test_disabled_client_reports_disabled() {
        let client = AiClient::new(None);
        assert!(!client.enabled());
    }

    #[test]
    fn test_generation_prompt_mentions_domain_and_specialty() {
        let prompt = generation_prompt(&QuestionRequest {
            domain: "Cybersecurity".to_string(),
            specialty: Some("Forensics".to_string()),
            language: Language::English,
        });
        assert!(prompt.contains("Cybersecurity"));
        assert!(prompt.contains("Forensics"));
        assert!(prompt.contains("exactly 20"));
        assert!(prompt.contains("English"));
    }

    #[test]
    fn test_recommendation_prompt_carries_skill_level() {
        let prompt = recommendation_prompt(&RecommendationRequest {
            domain: "Databases".to_string(),
            specialty: None,
            skill_level: "Advanced".to_string(),
            language: Language::French,
        });
        assert!(prompt.contains("Databases"));
        assert!(prompt.contains("Advanced"));
        assert!(prompt.contains("French"));
        assert!(!prompt.contains("Specialty:"));
    }
}
