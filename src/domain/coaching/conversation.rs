//! Client-held coaching conversation history.
//!
//! The server keeps no conversation state; each request resends prior
//! turns and the history is rebuilt from them.

use serde::{Deserialize, Serialize};

/// Who spoke a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One prior exchange in the coaching conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingTurn {
    pub role: TurnRole,
    pub content: String,
}

impl CoachingTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Keeps the most recent `max_turns` non-blank turns.
///
/// The result never starts with an assistant turn, since providers expect
/// the conversation to open with the user.
pub fn trim_history(history: Vec<CoachingTurn>, max_turns: usize) -> Vec<CoachingTurn> {
    let mut turns: Vec<CoachingTurn> = history
        .into_iter()
        .filter(|t| !t.content.trim().is_empty())
        .collect();

    if turns.len() > max_turns {
        turns.drain(..turns.len() - max_turns);
    }
    while turns.first().map(|t| t.role) == Some(TurnRole::Assistant) {
        turns.remove(0);
    }
    turns
}
