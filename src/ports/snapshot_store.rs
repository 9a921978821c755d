//! Snapshot Store Port - Durable slot for questionnaire session snapshots.
//!
//! One snapshot per key (the authenticated user id). Callers treat every
//! failure as recoverable: a failed load means "no prior session" and a
//! failed save never blocks the transition that triggered it.

use async_trait::async_trait;

use crate::domain::session::SessionSnapshot;

/// Errors that can occur during snapshot storage operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStoreError {
    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize snapshot: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Snapshot write timed out after {0}ms")]
    Timeout(u64),
}

/// Port for persisting and loading session snapshots
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Save (overwrite) the snapshot for a key
    async fn save(&self, key: &str, snapshot: &SessionSnapshot) -> Result<(), SnapshotStoreError>;

    /// Load the snapshot for a key
    ///
    /// # Returns
    /// `Ok(None)` if no snapshot exists. Corrupt data is an error; the
    /// application layer decides to treat it as absence.
    async fn load(&self, key: &str) -> Result<Option<SessionSnapshot>, SnapshotStoreError>;

    /// Delete the snapshot for a key. Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), SnapshotStoreError>;
}
