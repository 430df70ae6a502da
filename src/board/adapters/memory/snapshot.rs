//! In-memory snapshot store for tests and ephemeral boards.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::TaskRecord,
    ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};

/// Thread-safe snapshot store holding the latest snapshot in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    slot: Arc<RwLock<Option<Vec<TaskRecord>>>>,
}

impl InMemorySnapshotStore {
    /// Creates a store with no stored snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with a snapshot.
    #[must_use]
    pub fn with_records(records: Vec<TaskRecord>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(records))),
        }
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Option<Vec<TaskRecord>>> {
        let slot = self.slot.read().map_err(|err| {
            SnapshotStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(slot.clone())
    }

    async fn save(&self, records: &[TaskRecord]) -> SnapshotStoreResult<()> {
        let mut slot = self.slot.write().map_err(|err| {
            SnapshotStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        *slot = Some(records.to_vec());
        Ok(())
    }
}
