//! Durable copy of a questionnaire session.

use serde::{Deserialize, Serialize};

use super::Stage;
use crate::domain::foundation::Timestamp;
use crate::domain::questionnaire::AnswerMap;

/// Serializable session state written after every change.
///
/// Values are not trusted on load: `QuestionnaireSession::from_snapshot`
/// clamps and filters them against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub stage: Stage,
    pub question_index: usize,
    pub answers: AnswerMap,
    pub saved_at: Timestamp,
}
