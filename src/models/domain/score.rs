use serde::{Deserialize, Serialize};

/// Sentinel shown in the review when a question was left unanswered.
pub const UNANSWERED: &str = "Not answered";

/// The learner's selections for one attempt, index-aligned with the quiz's
/// questions. `None` marks an unanswered question; the sequence may be
/// shorter than the question list and may contain out-of-range values, all
/// of which score as incorrect rather than failing.
pub type SubmittedAnswers = Vec<Option<i64>>;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub question_text: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Computed outcome of one attempt. Never persisted as-is; the quiz service
/// derives an [`AttemptRecord`](crate::models::domain::AttemptRecord) from it.
///
/// `percentage` carries full floating-point precision; rounding is a
/// presentation concern.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub review: Vec<ReviewEntry>,
}
