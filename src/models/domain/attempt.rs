use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::ScoreResult;

/// Append-only record of one completed attempt.
///
/// The dashboard derives per-quiz statistics (highest score, attempt count)
/// from these rather than trusting the denormalised counters on the quiz
/// document.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub id: String,
    pub quiz_id: String,
    pub user_id: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub submitted_at: DateTime<Utc>,
}

impl AttemptRecord {
    pub fn from_result(quiz_id: &str, user_id: &str, result: &ScoreResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            user_id: user_id.to_string(),
            score: result.score,
            total_questions: result.total_questions,
            percentage: result.percentage,
            submitted_at: Utc::now(),
        }
    }
}
