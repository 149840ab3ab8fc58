use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoAttemptRepository, MongoQuizRepository},
    services::{GeneratorService, OpenAiGenerator, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub generator_service: Arc<GeneratorService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;
        let attempt_repository = Arc::new(MongoAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;

        let quiz_service = Arc::new(QuizService::new(quiz_repository, attempt_repository));

        let generator = Arc::new(OpenAiGenerator::new(&config));
        let generator_service = Arc::new(GeneratorService::new(generator));

        Ok(Self::from_parts(
            quiz_service,
            generator_service,
            db,
            Arc::new(config),
        ))
    }

    /// Assembles a state from pre-built services, for callers that wire
    /// their own repositories.
    pub fn from_parts(
        quiz_service: Arc<QuizService>,
        generator_service: Arc<GeneratorService>,
        db: Database,
        config: Arc<Config>,
    ) -> Self {
        Self {
            quiz_service,
            generator_service,
            db,
            config,
        }
    }
}
