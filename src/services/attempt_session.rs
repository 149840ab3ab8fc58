use thiserror::Error;

use crate::models::domain::{Question, Quiz, ScoreResult, SubmittedAnswers};
use crate::services::scoring;

/// Lifecycle of a single quiz attempt, modelled as an explicit state
/// machine so the flow is testable without any rendering concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Browsing,
    InProgress,
    Completed,
    Reviewing,
}

impl SessionState {
    fn name(self) -> &'static str {
        match self {
            SessionState::Browsing => "Browsing",
            SessionState::InProgress => "InProgress",
            SessionState::Completed => "Completed",
            SessionState::Reviewing => "Reviewing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {action} while {state}")]
pub struct InvalidTransition {
    pub state: &'static str,
    pub action: &'static str,
}

/// One user's run through one quiz.
///
/// Answers live in a fixed-size buffer index-aligned with the questions;
/// re-selecting an answer for the current question overwrites in place.
#[derive(Clone, Debug)]
pub struct AttemptSession {
    quiz: Quiz,
    answers: SubmittedAnswers,
    current: usize,
    state: SessionState,
    result: Option<ScoreResult>,
}

impl AttemptSession {
    pub fn new(quiz: Quiz) -> Self {
        let answers = vec![None; quiz.questions.len()];
        Self {
            quiz,
            answers,
            current: 0,
            state: SessionState::Browsing,
            result: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn answers(&self) -> &SubmittedAnswers {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.current)
    }

    /// Begin the attempt. A quiz with no questions completes immediately.
    pub fn start(&mut self) -> Result<(), InvalidTransition> {
        self.guard(SessionState::Browsing, "start")?;
        if self.quiz.questions.is_empty() {
            self.finish();
        } else {
            self.state = SessionState::InProgress;
            self.current = 0;
        }
        Ok(())
    }

    /// Record (or overwrite) the selection for the current question.
    pub fn select_answer(&mut self, option_index: i64) -> Result<(), InvalidTransition> {
        self.guard(SessionState::InProgress, "select an answer")?;
        self.answers[self.current] = Some(option_index);
        Ok(())
    }

    /// Move to the next question, completing the attempt after the last one.
    pub fn advance(&mut self) -> Result<(), InvalidTransition> {
        self.guard(SessionState::InProgress, "advance")?;
        if self.current + 1 < self.quiz.questions.len() {
            self.current += 1;
        } else {
            self.finish();
        }
        Ok(())
    }

    pub fn begin_review(&mut self) -> Result<(), InvalidTransition> {
        self.guard(SessionState::Completed, "review")?;
        self.state = SessionState::Reviewing;
        Ok(())
    }

    pub fn end_review(&mut self) -> Result<(), InvalidTransition> {
        self.guard(SessionState::Reviewing, "close the review")?;
        self.state = SessionState::Completed;
        Ok(())
    }

    /// Available once the attempt has completed.
    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    fn finish(&mut self) {
        self.result = Some(scoring::score_quiz(&self.quiz, &self.answers));
        self.state = SessionState::Completed;
    }

    fn guard(
        &self,
        expected: SessionState,
        action: &'static str,
    ) -> Result<(), InvalidTransition> {
        if self.state == expected {
            Ok(())
        } else {
            Err(InvalidTransition {
                state: self.state.name(),
                action,
            })
        }
    }
}
