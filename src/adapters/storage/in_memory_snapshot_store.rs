//! In-Memory Snapshot Store Adapter
//!
//! Stores session snapshots in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::session::SessionSnapshot;
use crate::ports::{SnapshotStore, SnapshotStoreError};

/// In-memory storage for session snapshots
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    snapshots: Arc<RwLock<HashMap<String, SessionSnapshot>>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored snapshots
    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.snapshots.write().await.clear();
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, key: &str, snapshot: &SessionSnapshot) -> Result<(), SnapshotStoreError> {
        self.snapshots
            .write()
            .await
            .insert(key.to_string(), snapshot.clone());
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<SessionSnapshot>, SnapshotStoreError> {
        Ok(self.snapshots.read().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), SnapshotStoreError> {
        self.snapshots.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::QuestionCatalog;
    use crate::domain::session::QuestionnaireSession;

    #[tokio::test]
    async fn save_load_delete_cycle() {
        let store = InMemorySnapshotStore::new();
        let snapshot = QuestionnaireSession::new(QuestionCatalog::bundled()).snapshot();

        store.save("k", &snapshot).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(store.load("k").await.unwrap(), Some(snapshot));

        store.delete("k").await.unwrap();
        assert!(store.load("k").await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemorySnapshotStore::new();
        let clone = store.clone();
        let snapshot = QuestionnaireSession::new(QuestionCatalog::bundled()).snapshot();

        clone.save("k", &snapshot).await.unwrap();
        assert!(store.load("k").await.unwrap().is_some());
    }
}
