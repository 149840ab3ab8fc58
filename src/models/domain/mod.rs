pub mod attempt;
pub mod quiz;
pub mod score;

pub use attempt::AttemptRecord;
pub use quiz::{AnswerOption, Question, Quiz};
pub use score::{ReviewEntry, ScoreResult, SubmittedAnswers, UNANSWERED};
