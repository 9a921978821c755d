//! AskCoachHandler - Answers a question about the caller's style profile.
//!
//! The conversation is not stored. Each call rebuilds context from the
//! client-sent history and the current scores.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::coaching::{trim_history, CoachingError, CoachingPrompt, CoachingTurn, TurnRole};
use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::domain::questionnaire::QuestionCatalog;
use crate::domain::session::{SessionError, Stage};
use crate::ports::{AIProvider, CompletionRequest, Message, RequestMetadata, SnapshotStore};

use crate::application::handlers::questionnaire::resume_session;

/// Command to ask the coach a question.
#[derive(Debug, Clone)]
pub struct AskCoachCommand {
    pub user: AuthenticatedUser,
    pub question: String,
    pub history: Vec<CoachingTurn>,
}

/// The coach's reply, as Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachAnswer {
    pub answer_markdown: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AskCoachError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Coaching(#[from] CoachingError),
}

impl From<AskCoachError> for DomainError {
    fn from(err: AskCoachError) -> Self {
        match err {
            AskCoachError::Session(e) => e.into(),
            AskCoachError::Coaching(e) => e.into(),
        }
    }
}

/// Limits applied to each coaching request.
#[derive(Debug, Clone, Copy)]
pub struct CoachingLimits {
    pub max_history_turns: usize,
    pub max_tokens: u32,
}

impl Default for CoachingLimits {
    fn default() -> Self {
        Self {
            max_history_turns: 12,
            max_tokens: 1024,
        }
    }
}

pub struct AskCoachHandler {
    catalog: Arc<QuestionCatalog>,
    store: Arc<dyn SnapshotStore>,
    provider: Option<Arc<dyn AIProvider>>,
    limits: CoachingLimits,
}

impl AskCoachHandler {
    /// `provider` is `None` when no API key is configured; every question
    /// then gets the apology.
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        store: Arc<dyn SnapshotStore>,
        provider: Option<Arc<dyn AIProvider>>,
        limits: CoachingLimits,
    ) -> Self {
        Self {
            catalog,
            store,
            provider,
            limits,
        }
    }

    pub async fn handle(&self, cmd: AskCoachCommand) -> Result<CoachAnswer, AskCoachError> {
        let question = cmd.question.trim();
        if question.is_empty() {
            return Err(CoachingError::EmptyQuestion.into());
        }

        let session = resume_session(&self.catalog, self.store.as_ref(), &cmd.user).await;
        if session.stage() != Stage::Results {
            return Err(SessionError::invalid_transition(session.stage(), "ask the coach").into());
        }

        let Some(provider) = &self.provider else {
            tracing::warn!(user_id = %cmd.user.id, "Coaching requested but no AI provider is configured");
            return Err(CoachingError::unavailable(false).into());
        };

        let prompt = CoachingPrompt::from_scores(session.scores(&self.catalog));
        let request = self.build_request(&cmd.user, &prompt, cmd.history, question);

        let info = provider.provider_info();
        match provider.complete(request).await {
            Ok(response) => {
                tracing::info!(
                    user_id = %cmd.user.id,
                    provider = %info.name,
                    model = %info.model,
                    dominant = %prompt.dominant,
                    tokens = response.usage.total_tokens,
                    "Coach answered"
                );
                Ok(CoachAnswer {
                    answer_markdown: response.content,
                })
            }
            Err(e) => {
                tracing::error!(
                    user_id = %cmd.user.id,
                    provider = %info.name,
                    model = %info.model,
                    retryable = e.is_retryable(),
                    error = %e,
                    "Coach unavailable"
                );
                Err(CoachingError::unavailable(e.is_retryable()).into())
            }
        }
    }

    fn build_request(
        &self,
        user: &AuthenticatedUser,
        prompt: &CoachingPrompt,
        history: Vec<CoachingTurn>,
        question: &str,
    ) -> CompletionRequest {
        // Reserve one slot for the new question.
        let budget = self.limits.max_history_turns.saturating_sub(1);
        let mut turns = trim_history(history, budget);
        // The new question follows; drop a trailing user turn so roles alternate.
        if turns.last().map(|t| t.role) == Some(TurnRole::User) {
            if let Some(dropped) = turns.pop() {
                tracing::debug!(
                    user_id = %user.id,
                    dropped_chars = dropped.content.len(),
                    "Dropped unanswered user turn from coaching history"
                );
            }
        }

        let messages = turns
            .into_iter()
            .map(|turn| match turn.role {
                TurnRole::User => Message::user(turn.content),
                TurnRole::Assistant => Message::assistant(turn.content),
            })
            .chain(std::iter::once(Message::user(question)));

        CompletionRequest::new(RequestMetadata::new(user.id.clone(), Uuid::new_v4().to_string()))
            .with_system_prompt(prompt.system_prompt())
            .with_messages(messages)
            .with_max_tokens(self.limits.max_tokens)
    }
}
