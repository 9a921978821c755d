//! LoadSessionHandler - Resumes the caller's questionnaire session.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::questionnaire::QuestionCatalog;
use crate::domain::session::QuestionnaireSession;
use crate::ports::{SnapshotStore, SnapshotStoreError};

/// Query for the current session of an authenticated user.
#[derive(Debug, Clone)]
pub struct LoadSessionQuery {
    pub user: AuthenticatedUser,
}

/// Handler that rebuilds a session from its snapshot.
///
/// Any load failure is treated as "no prior session".
pub struct LoadSessionHandler {
    catalog: Arc<QuestionCatalog>,
    store: Arc<dyn SnapshotStore>,
}

impl LoadSessionHandler {
    pub fn new(catalog: Arc<QuestionCatalog>, store: Arc<dyn SnapshotStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(&self, query: LoadSessionQuery) -> QuestionnaireSession {
        resume_session(&self.catalog, self.store.as_ref(), &query.user).await
    }
}

/// Loads the user's snapshot, or starts fresh, and marks it authenticated.
pub(crate) async fn resume_session(
    catalog: &QuestionCatalog,
    store: &dyn SnapshotStore,
    user: &AuthenticatedUser,
) -> QuestionnaireSession {
    let mut session = match store.load(user.id.as_str()).await {
        Ok(Some(snapshot)) => QuestionnaireSession::from_snapshot(catalog, snapshot),
        Ok(None) => QuestionnaireSession::new(catalog),
        Err(e) => {
            tracing::warn!(user_id = %user.id, error = %e, "Snapshot load failed; starting fresh");
            QuestionnaireSession::new(catalog)
        }
    };
    session.authorize();
    session
}

/// Writes the snapshot, bounded by `write_timeout`. Failures are logged.
pub(crate) async fn persist_session(
    store: &dyn SnapshotStore,
    user: &AuthenticatedUser,
    session: &QuestionnaireSession,
    write_timeout: Duration,
) {
    let snapshot = session.snapshot();
    let result = tokio::time::timeout(write_timeout, store.save(user.id.as_str(), &snapshot))
        .await
        .unwrap_or_else(|_| Err(SnapshotStoreError::Timeout(write_timeout.as_millis() as u64)));

    if let Err(e) = result {
        tracing::warn!(
            user_id = %user.id,
            stage = %session.stage(),
            error = %e,
            "Snapshot save failed"
        );
    }
}

/// Deletes the snapshot, bounded by `write_timeout`. Failures are logged.
pub(crate) async fn discard_session(
    store: &dyn SnapshotStore,
    user: &AuthenticatedUser,
    write_timeout: Duration,
) {
    let result = tokio::time::timeout(write_timeout, store.delete(user.id.as_str()))
        .await
        .unwrap_or_else(|_| Err(SnapshotStoreError::Timeout(write_timeout.as_millis() as u64)));

    if let Err(e) = result {
        tracing::warn!(user_id = %user.id, error = %e, "Snapshot delete failed");
    }
}
