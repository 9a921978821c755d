//! Question identifiers and trait-pair questions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AxisGroup, AxisPair};
use crate::domain::foundation::ValidationError;

/// Unique identifier of a catalog question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a question id, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("question_id"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuestionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        QuestionId::new(value)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One slider question between two opposing traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPair {
    pub id: QuestionId,
    /// Display labels for the left (first axis) and right (second axis) ends.
    pub trait_labels: (String, String),
    pub axes: AxisPair,
}

impl QuestionPair {
    pub fn new(
        id: QuestionId,
        first_trait: impl Into<String>,
        second_trait: impl Into<String>,
        axes: AxisPair,
    ) -> Self {
        Self {
            id,
            trait_labels: (first_trait.into(), second_trait.into()),
            axes,
        }
    }

    pub fn group(&self) -> AxisGroup {
        self.axes.group()
    }
}
