use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::Quiz;
use crate::models::dto::request::QuizCandidate;

/// Take-mode projection of a quiz: same shape as the stored document but
/// with every correctness flag stripped, so the network response cannot be
/// inspected for the answers before submitting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuizDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<PublicQuestionDto>,
    pub category: String,
    pub difficulty: String,
    pub times_taken: u32,
    pub highest_score: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestionDto {
    pub question_text: String,
    pub options: Vec<PublicOptionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicOptionDto {
    pub text: String,
}

impl From<Quiz> for PublicQuizDto {
    fn from(quiz: Quiz) -> Self {
        PublicQuizDto {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            questions: quiz
                .questions
                .into_iter()
                .map(|q| PublicQuestionDto {
                    question_text: q.question_text,
                    options: q
                        .options
                        .into_iter()
                        .map(|opt| PublicOptionDto { text: opt.text })
                        .collect(),
                })
                .collect(),
            category: quiz.category,
            difficulty: quiz.difficulty,
            times_taken: quiz.times_taken,
            highest_score: quiz.highest_score,
            created_at: quiz.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationFailure {
    pub topic: String,
    pub reason: String,
}

/// Outcome of a batch generation request. Item failures reduce the result
/// set instead of failing the request.
#[derive(Debug, Serialize)]
pub struct GenerateBatchResponse {
    pub quizzes: Vec<QuizCandidate>,
    pub failures: Vec<GenerationFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::two_question_quiz;

    #[test]
    fn public_projection_strips_correctness_flags() {
        let dto = PublicQuizDto::from(two_question_quiz());

        let json = serde_json::to_string(&dto).expect("projection should serialize");
        assert!(!json.contains("isCorrect"));
        assert!(!json.contains("is_correct"));
    }

    #[test]
    fn public_projection_keeps_question_and_option_order() {
        let quiz = two_question_quiz();
        let dto = PublicQuizDto::from(quiz.clone());

        assert_eq!(dto.questions.len(), quiz.questions.len());
        for (public, stored) in dto.questions.iter().zip(&quiz.questions) {
            assert_eq!(public.question_text, stored.question_text);
            let texts: Vec<&str> = public.options.iter().map(|o| o.text.as_str()).collect();
            let stored_texts: Vec<&str> = stored.options.iter().map(|o| o.text.as_str()).collect();
            assert_eq!(texts, stored_texts);
        }
    }
}
