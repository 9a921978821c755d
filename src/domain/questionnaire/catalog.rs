//! Question catalog loaded once at startup.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::{AxisGroup, QuestionId, QuestionPair};

const BUNDLED_CATALOG: &str = include_str!("catalog.yaml");

// Parsed on first use. The bundled file is covered by tests, so a parse
// failure here is a build defect rather than a runtime condition.
static BUNDLED: Lazy<QuestionCatalog> = Lazy::new(|| {
    QuestionCatalog::from_yaml_str(BUNDLED_CATALOG).expect("bundled catalog.yaml is valid")
});

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no questions")]
    Empty,

    #[error("duplicate question id: {0}")]
    DuplicateId(String),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Deserialize)]
struct CatalogFile {
    questions: Vec<QuestionPair>,
}

/// Ordered, validated, immutable list of questions.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<QuestionPair>,
    positions: HashMap<QuestionId, usize>,
}

impl QuestionCatalog {
    /// Builds a catalog, rejecting empty lists and duplicate ids.
    pub fn new(questions: Vec<QuestionPair>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut positions = HashMap::with_capacity(questions.len());
        for (index, question) in questions.iter().enumerate() {
            if positions.insert(question.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(question.id.to_string()));
            }
        }

        Ok(Self {
            questions,
            positions,
        })
    }

    /// Parses a catalog from YAML with a top-level `questions` list.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.questions)
    }

    /// Reads and parses a YAML catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// The catalog shipped with the binary: 15 A/B and 15 C/D questions.
    pub fn bundled() -> &'static QuestionCatalog {
        &BUNDLED
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the final question.
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&QuestionPair> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &QuestionId) -> Option<&QuestionPair> {
        self.positions.get(id).map(|&i| &self.questions[i])
    }

    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.positions.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionPair> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[QuestionPair] {
        &self.questions
    }

    /// Number of questions in the given group.
    pub fn count_in(&self, group: AxisGroup) -> usize {
        self.questions.iter().filter(|q| q.group() == group).count()
    }
}
