//! Commands that drive a questionnaire session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::questionnaire::{QuestionId, SliderValue};

/// A single user action against the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionAction {
    Start,
    Answer {
        question_id: QuestionId,
        value: SliderValue,
    },
    Next,
    Prev,
    Edit,
    Reset,
}

impl SessionAction {
    /// Short verb used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SessionAction::Start => "start",
            SessionAction::Answer { .. } => "answer",
            SessionAction::Next => "next",
            SessionAction::Prev => "prev",
            SessionAction::Edit => "edit",
            SessionAction::Reset => "reset",
        }
    }
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
