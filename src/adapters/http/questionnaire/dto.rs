//! DTOs for questionnaire endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::ProfileResults;
use crate::domain::foundation::ValidationError;
use crate::domain::questionnaire::{Axis, QuestionCatalog, QuestionId, QuestionPair, SliderValue};
use crate::domain::scoring::{ColorProfile, CompositeScore, Scores};
use crate::domain::session::{QuestionnaireSession, SessionAction, Stage};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/session/actions`.
///
/// The answer value arrives as a plain integer so an out-of-range slider
/// surfaces as a validation error rather than a body rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionRequest {
    Start,
    Answer { question_id: String, value: i64 },
    Next,
    Prev,
    Edit,
    Reset,
}

impl TryFrom<ActionRequest> for SessionAction {
    type Error = ValidationError;

    fn try_from(req: ActionRequest) -> Result<Self, Self::Error> {
        Ok(match req {
            ActionRequest::Start => SessionAction::Start,
            ActionRequest::Answer { question_id, value } => SessionAction::Answer {
                question_id: QuestionId::new(question_id)?,
                value: slider_value(value)?,
            },
            ActionRequest::Next => SessionAction::Next,
            ActionRequest::Prev => SessionAction::Prev,
            ActionRequest::Edit => SessionAction::Edit,
            ActionRequest::Reset => SessionAction::Reset,
        })
    }
}

fn slider_value(raw: i64) -> Result<SliderValue, ValidationError> {
    match u8::try_from(raw) {
        Ok(value) => SliderValue::new(value),
        Err(_) => Err(ValidationError::out_of_range(
            "slider_value",
            SliderValue::MIN as i32,
            SliderValue::MAX as i32,
            raw.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        )),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub id: String,
    pub left_label: String,
    pub right_label: String,
    pub axes: (Axis, Axis),
}

impl QuestionView {
    fn new(index: usize, question: &QuestionPair) -> Self {
        Self {
            index,
            id: question.id.to_string(),
            left_label: question.trait_labels.0.clone(),
            right_label: question.trait_labels.1.clone(),
            axes: (question.axes.first(), question.axes.second()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub total: usize,
    pub questions: Vec<QuestionView>,
}

impl From<&QuestionCatalog> for CatalogResponse {
    fn from(catalog: &QuestionCatalog) -> Self {
        Self {
            total: catalog.len(),
            questions: catalog
                .iter()
                .enumerate()
                .map(|(index, q)| QuestionView::new(index, q))
                .collect(),
        }
    }
}

/// The question currently on screen with its slider position.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentQuestionView {
    #[serde(flatten)]
    pub question: QuestionView,
    pub value: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub stage: Stage,
    pub authenticated: bool,
    pub question_index: usize,
    pub total_questions: usize,
    pub is_last: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<CurrentQuestionView>,
    pub answers: BTreeMap<String, u8>,
}

impl SessionView {
    pub fn new(session: &QuestionnaireSession, catalog: &QuestionCatalog) -> Self {
        let index = session.question_index();
        let current_question = match session.stage() {
            Stage::Questionnaire => session.current_question(catalog).map(|q| CurrentQuestionView {
                question: QuestionView::new(index, q),
                value: session.answers().get(&q.id).value(),
            }),
            _ => None,
        };

        Self {
            stage: session.stage(),
            authenticated: session.is_authenticated(),
            question_index: index,
            total_questions: catalog.len(),
            is_last: index == catalog.last_index(),
            current_question,
            answers: session
                .answers()
                .iter()
                .map(|(id, value)| (id.to_string(), value.value()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuadrantProduct {
    pub profile: ColorProfile,
    pub product: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileDetails {
    pub profile: ColorProfile,
    pub title: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub growth_areas: &'static [&'static str],
}

impl From<ColorProfile> for ProfileDetails {
    fn from(profile: ColorProfile) -> Self {
        Self {
            profile,
            title: profile.title(),
            description: profile.description(),
            strengths: profile.strengths(),
            growth_areas: profile.growth_areas(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompositeView {
    pub profile: ColorProfile,
    pub label: String,
    pub value: u32,
}

impl From<&CompositeScore> for CompositeView {
    fn from(composite: &CompositeScore) -> Self {
        Self {
            profile: composite.profile,
            label: composite.label(),
            value: composite.value,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub scores: Scores,
    pub quadrant_products: Vec<QuadrantProduct>,
    pub dominant: ProfileDetails,
    pub composites: Vec<CompositeView>,
    pub narrative: String,
}

impl From<ProfileResults> for ResultsResponse {
    fn from(results: ProfileResults) -> Self {
        Self {
            scores: results.scores,
            quadrant_products: results
                .quadrant_products
                .iter()
                .map(|&(profile, product)| QuadrantProduct { profile, product })
                .collect(),
            dominant: results.dominant.into(),
            composites: results.composites.iter().map(CompositeView::from).collect(),
            narrative: results.narrative.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ActionRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn answer_request_converts_to_action() {
        let action = SessionAction::try_from(parse(
            r#"{"type":"answer","question_id":"q1","value":2}"#,
        ))
        .unwrap();
        assert_eq!(
            action,
            SessionAction::Answer {
                question_id: QuestionId::new("q1").unwrap(),
                value: SliderValue::new(2).unwrap(),
            }
        );
    }

    #[test]
    fn out_of_range_values_are_validation_errors() {
        for raw in ["0", "7", "-3", "100000"] {
            let json = format!(r#"{{"type":"answer","question_id":"q1","value":{}}}"#, raw);
            let err = SessionAction::try_from(parse(&json)).unwrap_err();
            assert!(matches!(err, ValidationError::OutOfRange { .. }), "value {}", raw);
        }
    }

    #[test]
    fn blank_question_id_is_rejected() {
        let err = SessionAction::try_from(parse(r#"{"type":"answer","question_id":" ","value":3}"#))
            .unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }

    #[test]
    fn session_view_shows_current_question_only_while_answering() {
        let catalog = QuestionCatalog::bundled();
        let mut session = QuestionnaireSession::new(catalog);
        assert!(SessionView::new(&session, catalog).current_question.is_none());

        session.authorize();
        session.start(catalog).unwrap();
        let view = SessionView::new(&session, catalog);
        let current = view.current_question.unwrap();
        assert_eq!(current.question.index, 0);
        assert_eq!(current.value, SliderValue::DEFAULT);
        assert_eq!(view.total_questions, 30);
        assert!(!view.is_last);
    }
}
