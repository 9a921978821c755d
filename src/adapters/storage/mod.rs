//! Storage Adapters
//!
//! Implementations of the SnapshotStore port.
//!
//! ## Available Adapters
//!
//! - **FileSnapshotStore** - Stores snapshots as YAML files on disk
//! - **InMemorySnapshotStore** - Stores snapshots in memory (testing/development)

mod file_snapshot_store;
mod in_memory_snapshot_store;

pub use file_snapshot_store::FileSnapshotStore;
pub use in_memory_snapshot_store::InMemorySnapshotStore;
