//! File-based Snapshot Store Adapter
//!
//! Stores each session snapshot as a YAML file under a base directory,
//! one file per key. File names are derived from a hash of the key.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::session::SessionSnapshot;
use crate::ports::{SnapshotStore, SnapshotStoreError};

/// File-based storage for session snapshots
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    base_path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSnapshotStore::new("./data/snapshots");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the snapshot file path for a key
    fn snapshot_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.yaml", key_file_stem(key)))
    }
}

/// Hex SHA-256 of the key. Distinct keys never share a file and the name
/// cannot escape the base dir.
fn key_file_stem(key: &str) -> String {
    hex::encode(Sha256::digest(key.as_bytes()))
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn save(&self, key: &str, snapshot: &SessionSnapshot) -> Result<(), SnapshotStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        let yaml = serde_yaml::to_string(snapshot)
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;

        // Write to a sibling temp file first so a crash never leaves half a snapshot.
        let path = self.snapshot_path(key);
        let tmp = path.with_extension("yaml.tmp");
        fs::write(&tmp, yaml)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<SessionSnapshot>, SnapshotStoreError> {
        let path = self.snapshot_path(key);

        let yaml = match fs::read_to_string(&path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnapshotStoreError::IoError(e.to_string())),
        };

        let snapshot = serde_yaml::from_str(&yaml)
            .map_err(|e| SnapshotStoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(snapshot))
    }

    async fn delete(&self, key: &str) -> Result<(), SnapshotStoreError> {
        match fs::remove_file(self.snapshot_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SnapshotStoreError::IoError(e.to_string())),
        }
    }
}
