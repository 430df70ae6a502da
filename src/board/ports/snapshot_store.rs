//! Snapshot store port for durable board persistence.

use crate::board::domain::TaskRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Durable persistence contract for the board snapshot.
///
/// The snapshot is the entire durable state of the board: an ordered list of
/// wire records. Implementations replace the stored snapshot wholesale on
/// every save.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the stored snapshot.
    ///
    /// Returns `None` when no snapshot has ever been stored.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Unavailable`] when the backing storage
    /// cannot be read or [`SnapshotStoreError::Corrupt`] when the stored
    /// payload cannot be decoded.
    async fn load(&self) -> SnapshotStoreResult<Option<Vec<TaskRecord>>>;

    /// Replaces the stored snapshot with the given records.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Unavailable`] when the backing storage
    /// cannot be written.
    async fn save(&self, records: &[TaskRecord]) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// The backing storage could not be reached.
    #[error("snapshot storage unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The stored payload could not be decoded.
    #[error("snapshot payload is corrupt: {0}")]
    Corrupt(String),
}

impl SnapshotStoreError {
    /// Wraps a storage error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
