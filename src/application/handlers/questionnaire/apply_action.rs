//! ApplyActionHandler - Command handler for questionnaire navigation.
//!
//! Each call resumes the caller's session, applies one action, and writes
//! the snapshot back. The last write wins.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::questionnaire::QuestionCatalog;
use crate::domain::session::{QuestionnaireSession, SessionAction, SessionError, Stage};
use crate::ports::{SnapshotStore, UserDirectory};

use super::load_session::{discard_session, persist_session, resume_session};

/// Command to apply one action to the caller's session.
#[derive(Debug, Clone)]
pub struct ApplyActionCommand {
    pub user: AuthenticatedUser,
    pub action: SessionAction,
}

/// Handler for session actions.
pub struct ApplyActionHandler {
    catalog: Arc<QuestionCatalog>,
    store: Arc<dyn SnapshotStore>,
    directory: Option<Arc<dyn UserDirectory>>,
    write_timeout: Duration,
}

impl ApplyActionHandler {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        store: Arc<dyn SnapshotStore>,
        write_timeout: Duration,
    ) -> Self {
        Self {
            catalog,
            store,
            directory: None,
            write_timeout,
        }
    }

    /// Records scores in the directory whenever a session reaches results.
    pub fn with_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub async fn handle(
        &self,
        cmd: ApplyActionCommand,
    ) -> Result<QuestionnaireSession, SessionError> {
        let mut session = resume_session(&self.catalog, self.store.as_ref(), &cmd.user).await;
        let before = session.stage();
        let action_name = cmd.action.name();
        let is_reset = matches!(cmd.action, SessionAction::Reset);

        if let Err(e) = session.apply(&self.catalog, cmd.action) {
            tracing::debug!(
                user_id = %cmd.user.id,
                stage = %before,
                action = action_name,
                error = %e,
                "Session action rejected"
            );
            return Err(e);
        }

        tracing::info!(
            user_id = %cmd.user.id,
            action = action_name,
            stage = %session.stage(),
            question_index = session.question_index(),
            "Session action applied"
        );

        if is_reset {
            discard_session(self.store.as_ref(), &cmd.user, self.write_timeout).await;
        } else {
            persist_session(self.store.as_ref(), &cmd.user, &session, self.write_timeout).await;
        }

        if before != Stage::Results && session.stage() == Stage::Results {
            self.record_results(&cmd.user, &session).await;
        }

        Ok(session)
    }

    async fn record_results(&self, user: &AuthenticatedUser, session: &QuestionnaireSession) {
        let scores = session.scores(&self.catalog);
        tracing::info!(
            user_id = %user.id,
            dominant = %session.dominant(&self.catalog),
            "Questionnaire completed"
        );

        if let Some(directory) = &self.directory {
            if let Err(e) = directory.record_scores(user, &scores).await {
                tracing::warn!(user_id = %user.id, error = %e, "Recording scores failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::directory::InMemoryUserDirectory;
    use crate::adapters::storage::InMemorySnapshotStore;
    use crate::domain::foundation::UserId;
    use crate::domain::questionnaire::{QuestionId, SliderValue};

    struct Fixture {
        catalog: Arc<QuestionCatalog>,
        store: Arc<InMemorySnapshotStore>,
        directory: Arc<InMemoryUserDirectory>,
        handler: ApplyActionHandler,
    }

    fn fixture() -> Fixture {
        let catalog = Arc::new(QuestionCatalog::bundled().clone());
        let store = Arc::new(InMemorySnapshotStore::new());
        let directory = Arc::new(InMemoryUserDirectory::new());
        let handler =
            ApplyActionHandler::new(catalog.clone(), store.clone(), Duration::from_millis(200))
                .with_directory(directory.clone());
        Fixture {
            catalog,
            store,
            directory,
            handler,
        }
    }

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("apply-user").unwrap())
    }

    async fn run(f: &Fixture, action: SessionAction) -> Result<QuestionnaireSession, SessionError> {
        f.handler
            .handle(ApplyActionCommand {
                user: user(),
                action,
            })
            .await
    }

    #[tokio::test]
    async fn actions_persist_between_calls() {
        let f = fixture();
        run(&f, SessionAction::Start).await.unwrap();
        run(&f, SessionAction::Next).await.unwrap();

        let session = run(&f, SessionAction::Next).await.unwrap();
        assert_eq!(session.stage(), Stage::Questionnaire);
        assert_eq!(session.question_index(), 2);
    }

    #[tokio::test]
    async fn rejected_action_leaves_snapshot_unchanged() {
        let f = fixture();
        let err = run(&f, SessionAction::Next).await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidTransition { from: Stage::Intro, .. }));

        let snapshot = f.store.load("apply-user").await.unwrap();
        assert!(snapshot.is_none());
    }

    #[tokio::test]
    async fn answers_survive_and_unknown_ids_fail() {
        let f = fixture();
        run(&f, SessionAction::Start).await.unwrap();
        let first = f.catalog.get(0).unwrap().id.clone();
        run(
            &f,
            SessionAction::Answer {
                question_id: first.clone(),
                value: SliderValue::new(1).unwrap(),
            },
        )
        .await
        .unwrap();

        let unknown = run(
            &f,
            SessionAction::Answer {
                question_id: QuestionId::new("q99").unwrap(),
                value: SliderValue::new(2).unwrap(),
            },
        )
        .await;
        assert!(matches!(unknown, Err(SessionError::UnknownQuestion(_))));

        let session = run(&f, SessionAction::Prev).await.unwrap();
        assert_eq!(session.answers().get(&first).value(), 1);
    }

    #[tokio::test]
    async fn reaching_results_records_scores() {
        let f = fixture();
        run(&f, SessionAction::Start).await.unwrap();
        for _ in 0..f.catalog.len() {
            run(&f, SessionAction::Next).await.unwrap();
        }

        let recorded = f.directory.scores_of(&user().id).await;
        assert_eq!(recorded, Some(crate::domain::scoring::Scores::new(30, 45, 30, 45)));
    }

    #[tokio::test]
    async fn reset_discards_snapshot() {
        let f = fixture();
        run(&f, SessionAction::Start).await.unwrap();
        assert!(f.store.load("apply-user").await.unwrap().is_some());

        let session = run(&f, SessionAction::Reset).await.unwrap();
        assert_eq!(session.stage(), Stage::Intro);
        assert!(session.is_authenticated());
        assert!(f.store.load("apply-user").await.unwrap().is_none());
    }
}
