//! Answer map from question id to slider value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{QuestionCatalog, QuestionId, SliderValue};

/// Answers keyed by question id.
///
/// Missing entries read as the default slider value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<QuestionId, SliderValue>);

impl AnswerMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates a map with every catalog question at the default value.
    pub fn defaulted(catalog: &QuestionCatalog) -> Self {
        let mut map = Self::new();
        map.fill_defaults(catalog);
        map
    }

    /// Returns the stored value, or the default if unanswered.
    pub fn get(&self, id: &QuestionId) -> SliderValue {
        self.0.get(id).copied().unwrap_or_default()
    }

    /// Returns true if an explicit entry exists.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.0.contains_key(id)
    }

    pub fn set(&mut self, id: QuestionId, value: SliderValue) {
        self.0.insert(id, value);
    }

    /// Inserts the default for every catalog question lacking an entry.
    pub fn fill_defaults(&mut self, catalog: &QuestionCatalog) {
        for question in catalog.iter() {
            self.0.entry(question.id.clone()).or_default();
        }
    }

    /// Drops entries whose ids are not in the catalog.
    pub fn retain_known(&mut self, catalog: &QuestionCatalog) {
        self.0.retain(|id, _| catalog.contains(id));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &SliderValue)> {
        self.0.iter()
    }
}

impl FromIterator<(QuestionId, SliderValue)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (QuestionId, SliderValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
