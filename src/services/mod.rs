pub mod attempt_session;
pub mod generator_service;
pub mod quiz_service;
pub mod scoring;

pub use attempt_session::{AttemptSession, SessionState};
pub use generator_service::{GeneratorService, OpenAiGenerator, QuizGenerator};
pub use quiz_service::QuizService;
