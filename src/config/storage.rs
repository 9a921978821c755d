//! Snapshot storage and catalog configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one YAML snapshot per user
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,

    /// Upper bound on a single snapshot write, in milliseconds
    #[serde(default = "default_write_timeout_ms")]
    pub write_timeout_ms: u64,

    /// Optional YAML catalog replacing the bundled question set
    pub catalog_path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.write_timeout_ms == 0 || self.write_timeout_ms > 10_000 {
            return Err(ValidationError::InvalidWriteTimeout);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: default_snapshot_dir(),
            write_timeout_ms: default_write_timeout_ms(),
            catalog_path: None,
        }
    }
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("./data/sessions")
}

fn default_write_timeout_ms() -> u64 {
    500
}
