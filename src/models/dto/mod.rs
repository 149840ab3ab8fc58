pub mod request;
pub mod response;

pub use request::{
    Difficulty, GenerateQuizRequest, OptionCandidate, PaginationParams, QuestionCandidate,
    QuizCandidate, SubmitQuizRequest,
};
pub use response::{GenerateBatchResponse, GenerationFailure, PagedResponse, PublicQuizDto};
