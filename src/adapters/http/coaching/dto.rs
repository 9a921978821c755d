//! DTOs for coaching endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::coaching::CoachingTurn;

/// Body of `POST /api/coaching`. History is held by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct AskCoachRequest {
    pub question: String,
    #[serde(default)]
    pub history: Vec<CoachingTurn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AskCoachResponse {
    pub answer_markdown: String,
}
