use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Authoring-rule violations detected by the quiz validation gate.
///
/// These are user-correctable: the kind code tells the caller which rule
/// was broken and where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizValidationError {
    #[error("field '{0}' must not be empty")]
    EmptyField(String),

    #[error("question {index} must have at least 2 options, got {found}")]
    InsufficientOptions { index: usize, found: usize },

    #[error("question {index} must have exactly one correct option, found {found}")]
    AmbiguousCorrectAnswer { index: usize, found: usize },

    #[error("a quiz must contain at least one question")]
    EmptyQuestionList,
}

impl QuizValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            QuizValidationError::EmptyField(_) => "EMPTY_FIELD",
            QuizValidationError::InsufficientOptions { .. } => "INSUFFICIENT_OPTIONS",
            QuizValidationError::AmbiguousCorrectAnswer { .. } => "AMBIGUOUS_CORRECT_ANSWER",
            QuizValidationError::EmptyQuestionList => "EMPTY_QUESTION_LIST",
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(#[from] QuizValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid quiz document: {0}")]
    InvalidQuiz(String),

    #[error("Quiz generation failed: {0}")]
    ImportFailure(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::Validation(err) => err.kind(),
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InvalidQuiz(_) => "INVALID_QUIZ",
            AppError::ImportFailure(_) => "IMPORT_FAILURE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub status: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ImportFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseError(_) | AppError::InvalidQuiz(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
            status: self.status_code().as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        // A stored document that no longer decodes into the domain model is a
        // server fault distinct from an unreachable database.
        if matches!(*err.kind, mongodb::error::ErrorKind::BsonDeserialization(_)) {
            AppError::InvalidQuiz(err.to_string())
        } else {
            AppError::DatabaseError(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Unauthorized(format!("invalid bearer token: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
