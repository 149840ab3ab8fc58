use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A selectable answer choice. The wire format (and the stored document)
/// uses camelCase field names throughout.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Position of the first option flagged correct.
    ///
    /// Authoring validation guarantees exactly one; if a stored document
    /// violates that, the first match wins rather than failing.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|opt| opt.is_correct)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub category: String,
    pub difficulty: String,
    pub creator_id: String,
    pub times_taken: u32,
    pub highest_score: f64,
    pub created_at: DateTime<Utc>,
}
