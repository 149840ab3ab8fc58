use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AttemptRecord, Quiz, ScoreResult, SubmittedAnswers},
        dto::{PublicQuizDto, QuizCandidate},
    },
    repositories::{AttemptRepository, QuizRepository},
    services::scoring,
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn AttemptRepository>,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, attempts: Arc<dyn AttemptRepository>) -> Self {
        Self { quizzes, attempts }
    }

    /// Runs the authoring validation gate and persists the quiz whole;
    /// nothing is written when validation fails.
    pub async fn create_quiz(
        &self,
        candidate: QuizCandidate,
        creator_id: &str,
    ) -> AppResult<Quiz> {
        let quiz = candidate.into_quiz(creator_id)?;
        self.quizzes.insert(quiz).await
    }

    /// Take-mode fetch: correctness flags are stripped before the quiz
    /// leaves the server.
    pub async fn get_public_quiz(&self, id: &str) -> AppResult<PublicQuizDto> {
        let quiz = self.require_quiz(id).await?;
        Ok(PublicQuizDto::from(quiz))
    }

    /// Full document including answers, for the edit flow. Creator only.
    pub async fn get_quiz_for_creator(&self, id: &str, caller_id: &str) -> AppResult<Quiz> {
        let quiz = self.require_quiz(id).await?;
        Self::require_creator(&quiz, caller_id)?;
        Ok(quiz)
    }

    pub async fn update_quiz(
        &self,
        id: &str,
        candidate: QuizCandidate,
        caller_id: &str,
    ) -> AppResult<Quiz> {
        let existing = self.require_quiz(id).await?;
        Self::require_creator(&existing, caller_id)?;

        // Re-validate the replacement, then carry over identity, ownership
        // and usage stats from the stored document.
        let mut replacement = candidate.into_quiz(caller_id)?;
        replacement.id = existing.id;
        replacement.times_taken = existing.times_taken;
        replacement.highest_score = existing.highest_score;
        replacement.created_at = existing.created_at;

        self.quizzes.replace(replacement).await
    }

    pub async fn delete_quiz(&self, id: &str, caller_id: &str) -> AppResult<()> {
        let quiz = self.require_quiz(id).await?;
        Self::require_creator(&quiz, caller_id)?;

        self.quizzes.delete_by_id(id).await?;
        Ok(())
    }

    /// Scores the attempt, then records it: an append-only attempt document
    /// plus the atomic counter/maximum update on the quiz.
    pub async fn submit(
        &self,
        id: &str,
        user_id: &str,
        answers: &SubmittedAnswers,
    ) -> AppResult<ScoreResult> {
        let quiz = self.require_quiz(id).await?;

        let result = scoring::score_quiz(&quiz, answers);

        self.attempts
            .insert(AttemptRecord::from_result(id, user_id, &result))
            .await?;
        self.quizzes
            .record_attempt_stats(id, result.percentage)
            .await?;

        Ok(result)
    }

    pub async fn list_public(
        &self,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<PublicQuizDto>, i64)> {
        let (quizzes, total) = self.quizzes.list(offset, limit).await?;
        Ok((quizzes.into_iter().map(PublicQuizDto::from).collect(), total))
    }

    pub async fn list_by_creator(
        &self,
        creator_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Quiz>, i64)> {
        self.quizzes.list_by_creator(creator_id, offset, limit).await
    }

    pub async fn attempt_history(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<AttemptRecord>, i64)> {
        self.attempts.list_by_user(user_id, offset, limit).await
    }

    async fn require_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    fn require_creator(quiz: &Quiz, caller_id: &str) -> AppResult<()> {
        if quiz.creator_id == caller_id {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "only the quiz creator may do this".to_string(),
            ))
        }
    }
}
