//! Wire shapes of the collaborator responses and their boundary
//! validation: exactly 20 questions, 4 options each, answer index in
//! range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Question, OPTIONS_PER_QUESTION, QUESTIONS_PER_SESSION};

/// Most resources shown on the results screen.
pub const MAX_RECOMMENDED_RESOURCES: usize = 5;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("expected {expected} questions, got {got}")]
    QuestionCount { expected: usize, got: usize },
    #[error("question {index} has {got} options instead of {expected}")]
    OptionCount {
        index: usize,
        expected: usize,
        got: usize,
    },
    #[error("question {index} marks answer {got}, outside 0..{limit}")]
    AnswerIndexOutOfRange {
        index: usize,
        got: usize,
        limit: usize,
    },
    #[error("the recommender returned no resources")]
    NoResources,
}

/// One generated question, as serialized by the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
}

/// A recommended learning resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Envelope the recommender answers with.
#[derive(Debug, Deserialize)]
pub struct ResourceListDto {
    pub resources: Vec<LearningResource>,
}

/// Validate a generated question set and convert it to the session model.
pub fn validate_questions(dtos: Vec<QuestionDto>) -> Result<Vec<Question>, SchemaError> {
    if dtos.len() != QUESTIONS_PER_SESSION {
        return Err(SchemaError::QuestionCount {
            expected: QUESTIONS_PER_SESSION,
            got: dtos.len(),
        });
    }
    dtos.into_iter()
        .enumerate()
        .map(|(index, dto)| {
            if dto.correct_answer_index >= OPTIONS_PER_QUESTION {
                return Err(SchemaError::AnswerIndexOutOfRange {
                    index,
                    got: dto.correct_answer_index,
                    limit: OPTIONS_PER_QUESTION,
                });
            }
            let got = dto.options.len();
            let options: [String; OPTIONS_PER_QUESTION] =
                dto.options.try_into().map_err(|_| SchemaError::OptionCount {
                    index,
                    expected: OPTIONS_PER_QUESTION,
                    got,
                })?;
            Ok(Question {
                text: dto.question,
                options,
                correct_option_index: dto.correct_answer_index,
            })
        })
        .collect()
}

/// Validate a recommendation response. An empty list is an error; an
/// over-long one is truncated.
pub fn validate_resources(dto: ResourceListDto) -> Result<Vec<LearningResource>, SchemaError> {
    if dto.resources.is_empty() {
        return Err(SchemaError::NoResources);
    }
    let mut resources = dto.resources;
    resources.truncate(MAX_RECOMMENDED_RESOURCES);
    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(correct: usize, options: usize) -> QuestionDto {
        QuestionDto {
            question: "what?".to_string(),
            options: (0..options).map(|i| format!("option {i}")).collect(),
            correct_answer_index: correct,
        }
    }

    #[test]
    fn test_accepts_full_set() {
        let questions = validate_questions(vec![dto(2, 4); QUESTIONS_PER_SESSION]).unwrap();
        assert_eq!(questions.len(), QUESTIONS_PER_SESSION);
        assert_eq!(questions[0].correct_option_index, 2);
        assert_eq!(questions[0].options.len(), OPTIONS_PER_QUESTION);
    }

    #[test]
    fn test_rejects_short_set() {
        let err = validate_questions(vec![dto(0, 4); 19]).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::QuestionCount { expected: 20, got: 19 }
        ));
    }

    #[test]
    fn test_rejects_wrong_option_count() {
        let mut dtos = vec![dto(0, 4); QUESTIONS_PER_SESSION];
        dtos[7] = dto(0, 3);
        let err = validate_questions(dtos).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::OptionCount { index: 7, got: 3, .. }
        ));
    }

    #[test]
    fn test_rejects_answer_index_out_of_range() {
        let mut dtos = vec![dto(0, 4); QUESTIONS_PER_SESSION];
        dtos[3] = dto(4, 4);
        let err = validate_questions(dtos).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::AnswerIndexOutOfRange { index: 3, got: 4, .. }
        ));
    }

    #[test]
    fn test_question_dto_parses_camel_case() {
        let json = r#"{"question":"q","options":["a","b","c","d"],"correctAnswerIndex":1}"#;
        let dto: QuestionDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.correct_answer_index, 1);
    }

    #[test]
    fn test_rejects_empty_resource_list() {
        let err = validate_resources(ResourceListDto { resources: vec![] }).unwrap_err();
        assert!(matches!(err, SchemaError::NoResources));
    }

    #[test]
    fn test_truncates_over_long_resource_list() {
        let resource = LearningResource {
            title: "t".to_string(),
            description: "d".to_string(),
            url: "https://example.org".to_string(),
        };
        let resources = validate_resources(ResourceListDto {
            resources: vec![resource; 8],
        })
        .unwrap();
        assert_eq!(resources.len(), MAX_RECOMMENDED_RESOURCES);
    }
}
