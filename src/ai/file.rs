use std::path::PathBuf;

use async_trait::async_trait;

use crate::models::Question;

use super::schema;
use super::{GenerationError, QuestionRequest, QuestionSource};

/// Loads a fixed question set from a JSON file instead of calling the AI
/// backend. The file holds the same shape the generator answers with and
/// goes through the same boundary validation.
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn generate(&self, _request: &QuestionRequest) -> Result<Vec<Question>, GenerationError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| GenerationError::File {
                path: self.path.clone(),
                source,
            })?;
        let dtos = serde_json::from_str(&raw)?;
        Ok(schema::validate_questions(dtos)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Language;
    use crate::models::QUESTIONS_PER_SESSION;

    fn request() -> QuestionRequest {
        QuestionRequest {
            domain: "Databases".to_string(),
            specialty: None,
            language: Language::English,
        }
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("skillquiz-questions-{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_loads_and_validates_question_file() {
        let questions: Vec<serde_json::Value> = (0..QUESTIONS_PER_SESSION)
            .map(|i| {
                serde_json::json!({
                    "question": format!("question {i}"),
                    "options": ["a", "b", "c", "d"],
                    "correctAnswerIndex": i % 4,
                })
            })
            .collect();
        let path = temp_path();
        std::fs::write(&path, serde_json::to_string(&questions).unwrap()).unwrap();

        let source = FileQuestionSource::new(&path);
        let loaded = source.generate(&request()).await.unwrap();
        assert_eq!(loaded.len(), QUESTIONS_PER_SESSION);
        assert_eq!(loaded[5].correct_option_index, 1);

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_a_generation_failure() {
        let source = FileQuestionSource::new(temp_path());
        assert!(matches!(
            source.generate(&request()).await,
            Err(GenerationError::File { .. })
        ));
    }

    #[tokio::test]
    async fn test_short_file_is_rejected() {
        let path = temp_path();
        std::fs::write(
            &path,
            r#"[{"question":"q","options":["a","b","c","d"],"correctAnswerIndex":0}]"#,
        )
        .unwrap();
        let source = FileQuestionSource::new(&path);
        assert!(matches!(
            source.generate(&request()).await,
            Err(GenerationError::Schema(_))
        ));
        std::fs::remove_file(&path).ok();
    }
}
