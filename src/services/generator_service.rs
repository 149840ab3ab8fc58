use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use futures::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    constants::prompts::quiz_generation_prompt,
    errors::{AppError, AppResult},
    models::dto::{
        Difficulty, GenerateBatchResponse, GenerateQuizRequest, GenerationFailure, QuizCandidate,
    },
};

/// Produces raw completion text for one topic request. The output is
/// free-form; extraction and validation happen downstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(
        &self,
        topic: &str,
        question_count: u32,
        difficulty: Difficulty,
    ) -> AppResult<String>;
}

pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(config: &Config) -> Self {
        let openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl QuizGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        topic: &str,
        question_count: u32,
        difficulty: Difficulty,
    ) -> AppResult<String> {
        let prompt = quiz_generation_prompt(topic, question_count, &difficulty.to_string());

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| AppError::InternalError(format!("failed to build prompt: {}", e)))?;
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([message.into()])
            .build()
            .map_err(|e| AppError::InternalError(format!("failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::ImportFailure(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::ImportFailure("model returned no content".to_string()))
    }
}

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("JSON_FENCE is a valid regex pattern")
});

/// Pulls the quiz payload out of a free-form model response: the first
/// ```json fenced block, or failing that the substring between the first
/// `{` and the last `}`.
pub fn extract_json_block(raw: &str) -> Option<&str> {
    if let Some(caps) = JSON_FENCE.captures(raw) {
        return caps.get(1).map(|m| m.as_str());
    }

    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if start <= end {
        Some(raw[start..=end].trim())
    } else {
        None
    }
}

pub struct GeneratorService {
    generator: Arc<dyn QuizGenerator>,
}

impl GeneratorService {
    pub fn new(generator: Arc<dyn QuizGenerator>) -> Self {
        Self { generator }
    }

    /// One outbound call per topic, joined all-settled: a failed item is
    /// excluded from the result set and reported, never fatal to the batch.
    pub async fn generate_batch(
        &self,
        requests: Vec<GenerateQuizRequest>,
        caller_id: &str,
    ) -> GenerateBatchResponse {
        let settled = join_all(
            requests
                .iter()
                .map(|request| self.import_topic(request, caller_id)),
        )
        .await;

        let mut quizzes = Vec::new();
        let mut failures = Vec::new();
        for (request, outcome) in requests.iter().zip(settled) {
            match outcome {
                Ok(candidate) => quizzes.push(candidate),
                Err(err) => {
                    log::warn!("quiz generation for '{}' failed: {}", request.topic, err);
                    failures.push(GenerationFailure {
                        topic: request.topic.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        GenerateBatchResponse { quizzes, failures }
    }

    async fn import_topic(
        &self,
        request: &GenerateQuizRequest,
        caller_id: &str,
    ) -> AppResult<QuizCandidate> {
        let raw = self
            .generator
            .generate(&request.topic, request.question_count, request.difficulty)
            .await?;

        let block = extract_json_block(&raw).ok_or_else(|| {
            AppError::ImportFailure("no JSON object found in model response".to_string())
        })?;

        let mut candidate: QuizCandidate = serde_json::from_str(block)
            .map_err(|e| AppError::ImportFailure(format!("unparsable model response: {}", e)))?;

        candidate.category = request.topic.clone();
        candidate.difficulty = request.difficulty.to_string();

        // Same gate as manual authoring; a candidate that fails it is an
        // item-level failure, not a usable quiz.
        candidate.clone().into_quiz(caller_id)?;

        Ok(candidate)
    }
}
