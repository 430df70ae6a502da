//! JSON file snapshot store.
//!
//! Persists the board snapshot as a single JSON document inside a directory
//! opened through a capability handle. This is the durable analog of a
//! browser storage slot: one keyed document holding the whole board.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::board::{
    domain::TaskRecord,
    ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};

/// Snapshot store persisting the board as one JSON file.
#[derive(Debug)]
pub struct JsonFileSnapshotStore {
    dir: Dir,
    file_name: String,
}

impl JsonFileSnapshotStore {
    /// Opens a store rooted at the given directory.
    ///
    /// The directory must already exist; the snapshot file is created on the
    /// first save.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Unavailable`] when the directory cannot
    /// be opened.
    pub fn open_ambient(
        dir_path: &Utf8Path,
        file_name: impl Into<String>,
    ) -> SnapshotStoreResult<Self> {
        let dir = Dir::open_ambient_dir(dir_path, ambient_authority())
            .map_err(SnapshotStoreError::unavailable)?;
        Ok(Self {
            dir,
            file_name: file_name.into(),
        })
    }

    /// Returns the snapshot file name within the directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Option<Vec<TaskRecord>>> {
        let contents = match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SnapshotStoreError::unavailable(err)),
        };

        let records: Vec<TaskRecord> = serde_json::from_str(&contents)
            .map_err(|err| SnapshotStoreError::Corrupt(err.to_string()))?;
        Ok(Some(records))
    }

    async fn save(&self, records: &[TaskRecord]) -> SnapshotStoreResult<()> {
        let payload =
            serde_json::to_string(records).map_err(SnapshotStoreError::unavailable)?;
        self.dir
            .write(&self.file_name, payload)
            .map_err(SnapshotStoreError::unavailable)?;
        Ok(())
    }
}
