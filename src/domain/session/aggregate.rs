//! Questionnaire session aggregate.
//!
//! One session tracks a single questionnaire attempt: the stage, the
//! question cursor, and the answer map. It is created per request from
//! its snapshot and holds no reference to shared state.
//!
//! The catalog is passed into each operation rather than stored, so the
//! aggregate stays a plain value that serializes to a snapshot.

use super::{SessionAction, SessionError, SessionSnapshot, Stage};
use crate::domain::foundation::{StateMachine, Timestamp};
use crate::domain::questionnaire::{AnswerMap, QuestionCatalog, QuestionId, QuestionPair, SliderValue};
use crate::domain::scoring::{classify_dominant, compute_scores, ColorProfile, Scores, StyleNarrative};

/// Questionnaire session state.
///
/// # Invariants
///
/// - `question_index` is within the catalog bounds
/// - `stage` is `Intro` unless `authenticated` is set
/// - in `Questionnaire` and `Results`, every catalog question has an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireSession {
    authenticated: bool,
    stage: Stage,
    question_index: usize,
    answers: AnswerMap,
}

impl QuestionnaireSession {
    /// Fresh session at the intro with every answer defaulted.
    pub fn new(catalog: &QuestionCatalog) -> Self {
        Self {
            authenticated: false,
            stage: Stage::Intro,
            question_index: 0,
            answers: AnswerMap::defaulted(catalog),
        }
    }

    /// Resumes from a snapshot, repairing anything the catalog rejects.
    ///
    /// The index is clamped, answers for unknown ids are dropped, and
    /// missing answers are defaulted. A snapshot past the intro without
    /// the auth flag is sent back to the intro.
    pub fn from_snapshot(catalog: &QuestionCatalog, snapshot: SessionSnapshot) -> Self {
        let mut answers = snapshot.answers;
        answers.retain_known(catalog);
        answers.fill_defaults(catalog);

        let (stage, question_index) = if snapshot.stage == Stage::Intro || !snapshot.authenticated {
            (Stage::Intro, 0)
        } else {
            (snapshot.stage, snapshot.question_index.min(catalog.last_index()))
        };

        Self {
            authenticated: snapshot.authenticated,
            stage,
            question_index,
            answers,
        }
    }

    // === Accessors ===

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    // === Commands ===

    /// Records that the caller passed the authentication gate.
    pub fn authorize(&mut self) {
        self.authenticated = true;
    }

    /// Intro to Questionnaire at the first question.
    pub fn start(&mut self, catalog: &QuestionCatalog) -> Result<(), SessionError> {
        let next = self.guarded_transition(Stage::Questionnaire, "start")?;
        self.answers.fill_defaults(catalog);
        self.stage = next;
        self.question_index = 0;
        Ok(())
    }

    /// Stores an answer for a catalog question.
    pub fn answer(
        &mut self,
        catalog: &QuestionCatalog,
        question_id: QuestionId,
        value: SliderValue,
    ) -> Result<(), SessionError> {
        self.require_stage(Stage::Questionnaire, "answer")?;
        if !catalog.contains(&question_id) {
            return Err(SessionError::UnknownQuestion(question_id));
        }
        self.answers.set(question_id, value);
        Ok(())
    }

    /// Advances the cursor, or moves to results from the last question.
    pub fn next(&mut self, catalog: &QuestionCatalog) -> Result<(), SessionError> {
        self.require_stage(Stage::Questionnaire, "next")?;
        if self.question_index < catalog.last_index() {
            self.question_index += 1;
        } else {
            self.stage = self.guarded_transition(Stage::Results, "next")?;
        }
        Ok(())
    }

    /// Moves the cursor back; no-op on the first question.
    pub fn prev(&mut self) -> Result<(), SessionError> {
        self.require_stage(Stage::Questionnaire, "prev")?;
        self.question_index = self.question_index.saturating_sub(1);
        Ok(())
    }

    /// Results back to the first question with answers kept.
    pub fn edit(&mut self) -> Result<(), SessionError> {
        self.require_stage(Stage::Results, "edit")?;
        self.stage = self.guarded_transition(Stage::Questionnaire, "edit")?;
        self.question_index = 0;
        Ok(())
    }

    /// Back to the intro with defaulted answers. Allowed from any stage.
    ///
    /// The auth flag is kept; clearing the durable snapshot is left to
    /// the caller.
    pub fn reset(&mut self, catalog: &QuestionCatalog) {
        self.stage = Stage::Intro;
        self.question_index = 0;
        self.answers = AnswerMap::defaulted(catalog);
    }

    /// Applies a command, leaving the session untouched on error.
    pub fn apply(
        &mut self,
        catalog: &QuestionCatalog,
        action: SessionAction,
    ) -> Result<(), SessionError> {
        match action {
            SessionAction::Start => self.start(catalog),
            SessionAction::Answer { question_id, value } => {
                self.answer(catalog, question_id, value)
            }
            SessionAction::Next => self.next(catalog),
            SessionAction::Prev => self.prev(),
            SessionAction::Edit => self.edit(),
            SessionAction::Reset => {
                self.reset(catalog);
                Ok(())
            }
        }
    }

    // === Views ===

    /// The question under the cursor, while answering.
    pub fn current_question<'a>(&self, catalog: &'a QuestionCatalog) -> Option<&'a QuestionPair> {
        match self.stage {
            Stage::Questionnaire => catalog.get(self.question_index),
            _ => None,
        }
    }

    pub fn scores(&self, catalog: &QuestionCatalog) -> Scores {
        compute_scores(catalog, &self.answers)
    }

    pub fn dominant(&self, catalog: &QuestionCatalog) -> ColorProfile {
        classify_dominant(&self.scores(catalog))
    }

    pub fn narrative(&self, catalog: &QuestionCatalog) -> StyleNarrative {
        StyleNarrative::from_scores(&self.scores(catalog))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.authenticated,
            stage: self.stage,
            question_index: self.question_index,
            answers: self.answers.clone(),
            saved_at: Timestamp::now(),
        }
    }

    // === Guards ===

    fn require_stage(&self, expected: Stage, action: &str) -> Result<(), SessionError> {
        if self.stage != expected {
            return Err(SessionError::invalid_transition(self.stage, action));
        }
        if !self.authenticated {
            return Err(SessionError::NotAuthenticated);
        }
        Ok(())
    }

    fn guarded_transition(&self, target: Stage, action: &str) -> Result<Stage, SessionError> {
        let next = self
            .stage
            .transition_to(target)
            .map_err(|_| SessionError::invalid_transition(self.stage, action))?;
        if next.requires_auth() && !self.authenticated {
            return Err(SessionError::NotAuthenticated);
        }
        Ok(next)
    }
}
