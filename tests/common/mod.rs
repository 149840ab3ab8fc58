#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::SecretString;
use tokio::sync::RwLock;

use quizmaster_server::{
    app_state::AppState,
    auth::{Claims, IdentityVerifier},
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    models::{
        domain::{AttemptRecord, Quiz},
        dto::{Difficulty, OptionCandidate, QuestionCandidate, QuizCandidate},
    },
    repositories::{AttemptRepository, QuizRepository},
    services::{GeneratorService, QuizGenerator, QuizService},
};

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes.values().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        let total = items.len() as i64;
        let start = (offset.max(0) as usize).min(items.len());
        let end = (start + limit.max(0) as usize).min(items.len());
        Ok((items[start..end].to_vec(), total))
    }

    async fn list_by_creator(
        &self,
        creator_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Quiz>, i64)> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes
            .values()
            .filter(|q| q.creator_id == creator_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        let total = items.len() as i64;
        let start = (offset.max(0) as usize).min(items.len());
        let end = (start + limit.max(0) as usize).min(items.len());
        Ok((items[start..end].to_vec(), total))
    }

    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate quiz id '{}'",
                quiz.id
            )));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn replace(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        Ok(quizzes.remove(id).is_some())
    }

    async fn record_attempt_stats(&self, id: &str, percentage: f64) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        if let Some(quiz) = quizzes.get_mut(id) {
            quiz.times_taken += 1;
            if percentage > quiz.highest_score {
                quiz.highest_score = percentage;
            }
        }
        Ok(())
    }
}

pub struct InMemoryAttemptRepository {
    attempts: Arc<RwLock<Vec<AttemptRecord>>>,
}

impl InMemoryAttemptRepository {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl AttemptRepository for InMemoryAttemptRepository {
    async fn insert(&self, attempt: AttemptRecord) -> AppResult<AttemptRecord> {
        let mut attempts = self.attempts.write().await;
        attempts.push(attempt.clone());
        Ok(attempt)
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<AttemptRecord>, i64)> {
        let attempts = self.attempts.read().await;
        let mut items: Vec<_> = attempts
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

        let total = items.len() as i64;
        let start = (offset.max(0) as usize).min(items.len());
        let end = (start + limit.max(0) as usize).min(items.len());
        Ok((items[start..end].to_vec(), total))
    }
}

pub fn four_options(correct: usize) -> Vec<OptionCandidate> {
    ["A", "B", "C", "D"]
        .iter()
        .enumerate()
        .map(|(i, text)| OptionCandidate {
            text: text.to_string(),
            is_correct: i == correct,
        })
        .collect()
}

/// Two questions with options A-D; option 1 is correct for Q1 and option 3
/// for Q2.
pub fn candidate(title: &str) -> QuizCandidate {
    QuizCandidate {
        title: title.to_string(),
        description: "A quiz for contract tests".to_string(),
        questions: vec![
            QuestionCandidate {
                question_text: "First question".to_string(),
                options: four_options(1),
            },
            QuestionCandidate {
                question_text: "Second question".to_string(),
                options: four_options(3),
            },
        ],
        category: "General".to_string(),
        difficulty: "Medium".to_string(),
        times_taken: None,
        highest_score: None,
        created_at: None,
    }
}

/// Deterministic stand-in for the model transport: well-formed fenced JSON
/// for any topic except "Unreachable", which fails like a dropped call.
pub struct CannedGenerator;

#[async_trait]
impl QuizGenerator for CannedGenerator {
    async fn generate(
        &self,
        topic: &str,
        _question_count: u32,
        _difficulty: Difficulty,
    ) -> AppResult<String> {
        if topic == "Unreachable" {
            return Err(AppError::ImportFailure("model unavailable".to_string()));
        }

        let payload = serde_json::json!({
            "title": format!("{} Quiz", topic),
            "description": format!("A quiz on {}.", topic),
            "questions": [
                {
                    "questionText": format!("What is {} known for?", topic),
                    "options": [
                        {"text": "First", "isCorrect": false},
                        {"text": "Second", "isCorrect": true},
                        {"text": "Third", "isCorrect": false},
                        {"text": "Fourth", "isCorrect": false}
                    ]
                }
            ]
        });
        Ok(format!("Here you go!\n```json\n{}\n```", payload))
    }
}

pub const TEST_SECRET: &str = "api_test_identity_secret";

pub fn verifier() -> IdentityVerifier {
    IdentityVerifier::new(&SecretString::from(TEST_SECRET.to_string()))
}

pub fn bearer_token(sub: &str) -> String {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: sub.to_string(),
        email: None,
        exp: now + 3600,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("test token should encode")
}

/// Application state over in-memory repositories and the canned generator.
/// The Mongo client is built lazily and never dialled by these tests.
pub async fn app_state() -> AppState {
    let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
        .await
        .expect("client options should parse");
    let db = Database::with_client(client, "quizmaster-test".to_string());

    let quiz_service = Arc::new(QuizService::new(
        Arc::new(InMemoryQuizRepository::new()),
        Arc::new(InMemoryAttemptRepository::new()),
    ));
    let generator_service = Arc::new(GeneratorService::new(Arc::new(CannedGenerator)));

    AppState::from_parts(
        quiz_service,
        generator_service,
        db,
        Arc::new(Config::from_env()),
    )
}
