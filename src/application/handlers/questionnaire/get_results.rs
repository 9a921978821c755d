//! GetResultsHandler - Query handler for the scored profile.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::questionnaire::QuestionCatalog;
use crate::domain::scoring::{
    classify_dominant, quadrant_products, rank_composites, ColorProfile, CompositeScore, Scores,
    StyleNarrative,
};
use crate::domain::session::{SessionError, Stage};
use crate::ports::SnapshotStore;

use super::load_session::resume_session;

#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub user: AuthenticatedUser,
}

/// Everything shown on the results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileResults {
    pub scores: Scores,
    pub quadrant_products: [(ColorProfile, u64); 4],
    pub dominant: ColorProfile,
    pub composites: Vec<CompositeScore>,
    pub narrative: StyleNarrative,
}

impl ProfileResults {
    pub fn from_scores(scores: Scores) -> Self {
        Self {
            quadrant_products: quadrant_products(&scores),
            dominant: classify_dominant(&scores),
            composites: rank_composites(&scores),
            narrative: StyleNarrative::from_scores(&scores),
            scores,
        }
    }
}

/// Returns results only once the session has reached the results stage.
pub struct GetResultsHandler {
    catalog: Arc<QuestionCatalog>,
    store: Arc<dyn SnapshotStore>,
}

impl GetResultsHandler {
    pub fn new(catalog: Arc<QuestionCatalog>, store: Arc<dyn SnapshotStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(&self, query: GetResultsQuery) -> Result<ProfileResults, SessionError> {
        let session = resume_session(&self.catalog, self.store.as_ref(), &query.user).await;
        if session.stage() != Stage::Results {
            return Err(SessionError::invalid_transition(session.stage(), "view results"));
        }
        Ok(ProfileResults::from_scores(session.scores(&self.catalog)))
    }
}
