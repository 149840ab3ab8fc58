use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::errors::QuizValidationError;
use crate::models::domain::{AnswerOption, Question, Quiz, SubmittedAnswers};

/// Pre-validation shape of a quiz, shared by manual creation and the
/// generative importer. [`QuizCandidate::into_quiz`] is the single gate a
/// candidate passes before it may touch the repository.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizCandidate {
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionCandidate>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub times_taken: Option<u32>,
    #[serde(default)]
    pub highest_score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCandidate {
    pub question_text: String,
    pub options: Vec<OptionCandidate>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCandidate {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl QuizCandidate {
    /// Validates the authoring rules and produces the persistable quiz.
    ///
    /// The same rules apply whether the candidate came from a human form or
    /// a generated payload; generated input in particular is untrusted.
    pub fn into_quiz(self, creator_id: &str) -> Result<Quiz, QuizValidationError> {
        let title = non_empty("title", &self.title)?;
        let description = non_empty("description", &self.description)?;

        if self.questions.is_empty() {
            return Err(QuizValidationError::EmptyQuestionList);
        }

        let mut questions = Vec::with_capacity(self.questions.len());
        for (index, question) in self.questions.into_iter().enumerate() {
            questions.push(validate_question(index, question)?);
        }

        Ok(Quiz {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            questions,
            category: self.category.trim().to_string(),
            difficulty: self.difficulty.trim().to_string(),
            creator_id: creator_id.to_string(),
            times_taken: self.times_taken.unwrap_or(0),
            highest_score: self.highest_score.unwrap_or(0.0).clamp(0.0, 100.0),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

fn validate_question(
    index: usize,
    candidate: QuestionCandidate,
) -> Result<Question, QuizValidationError> {
    let question_text = non_empty(&format!("questions[{}].questionText", index), &candidate.question_text)?;

    if candidate.options.len() < 2 {
        return Err(QuizValidationError::InsufficientOptions {
            index,
            found: candidate.options.len(),
        });
    }

    let mut options = Vec::with_capacity(candidate.options.len());
    for (opt_index, option) in candidate.options.into_iter().enumerate() {
        let text = non_empty(
            &format!("questions[{}].options[{}].text", index, opt_index),
            &option.text,
        )?;
        options.push(AnswerOption {
            text,
            is_correct: option.is_correct,
        });
    }

    let correct_count = options.iter().filter(|opt| opt.is_correct).count();
    if correct_count != 1 {
        return Err(QuizValidationError::AmbiguousCorrectAnswer {
            index,
            found: correct_count,
        });
    }

    Ok(Question {
        question_text,
        options,
    })
}

fn non_empty(field: &str, value: &str) -> Result<String, QuizValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(QuizValidationError::EmptyField(field.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 100))]
    pub topic: String,

    #[validate(range(min = 1, max = 50))]
    pub question_count: u32,

    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    /// Accepted for wire compatibility with older clients; the caller
    /// identity is always taken from the verified bearer token instead.
    #[serde(default)]
    pub user_id: Option<String>,

    pub answers: SubmittedAnswers,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}
