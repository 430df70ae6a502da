//! Service layer orchestrating board mutations, persistence, and queries.

use crate::board::{
    domain::{
        AreaCompletion, AreaId, AreaRegistry, BoardDomainError, BoardView, ParseTaskStateError,
        Task, TaskId, TaskRecord, TaskState, TaskStore, TaskText, area_complete, board_complete,
        completion_summary, project, starter_records,
    },
    ports::SnapshotStore,
};
use log::{info, warn};
use mockable::Clock;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Request payload for capturing a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    text: String,
    area_id: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the chore description.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            area_id: None,
        }
    }

    /// Links the new task to an area.
    #[must_use]
    pub fn with_area(mut self, area_id: impl Into<String>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }
}

/// Request payload for moving a task to another progress state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTaskStateRequest {
    task_id: String,
    state: String,
}

impl SetTaskStateRequest {
    /// Creates a request from raw gesture payload strings.
    #[must_use]
    pub fn new(task_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            state: state.into(),
        }
    }
}

/// Provenance of the board produced by [`BoardService::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialLoad {
    /// A stored snapshot was restored.
    Restored,
    /// No usable snapshot existed; the starter board was seeded.
    Seeded,
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The requested progress state is not a known state name.
    #[error(transparent)]
    InvalidState(#[from] ParseTaskStateError),
    /// The in-memory board lock was poisoned by a panicking writer.
    #[error("board state lock poisoned")]
    LockPoisoned,
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
///
/// Owns the authoritative in-memory [`TaskStore`]. Every mutation is applied
/// in memory first and then written through the snapshot gateway; a failed
/// write is logged as a warning and the operation still succeeds, so the
/// board a caller sees always reflects the latest gesture even when durable
/// storage lags behind.
pub struct BoardService<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    store: RwLock<TaskStore>,
    registry: AreaRegistry,
    snapshots: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> BoardService<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    /// Creates a board service with an empty board.
    #[must_use]
    pub fn new(registry: AreaRegistry, snapshots: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store: RwLock::new(TaskStore::new()),
            registry,
            snapshots,
            clock,
        }
    }

    /// Loads the stored snapshot, seeding the starter board when none is
    /// usable.
    ///
    /// A missing, empty, unreadable, or invalid snapshot falls back to the
    /// starter board; fallback from a failed load is logged as a warning.
    /// Nothing is persisted here; the first mutation writes the board back.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when even the starter records
    /// cannot be restored, or [`BoardServiceError::LockPoisoned`] when the
    /// board lock is poisoned.
    pub async fn initialize(&self) -> BoardServiceResult<InitialLoad> {
        let loaded = match self.snapshots.load().await {
            Ok(records) => records,
            Err(err) => {
                warn!("failed to load board snapshot, seeding the starter board: {err}");
                None
            }
        };

        let mut restored: Option<TaskStore> = None;
        if let Some(records) = loaded {
            if records.is_empty() {
                info!("stored board snapshot is empty, seeding the starter board");
            } else {
                match TaskStore::from_records(records) {
                    Ok(store) => restored = Some(store),
                    Err(err) => {
                        warn!("stored board snapshot is invalid, seeding the starter board: {err}");
                    }
                }
            }
        }

        let provenance = if restored.is_some() {
            InitialLoad::Restored
        } else {
            InitialLoad::Seeded
        };
        let store = restored.map_or_else(|| TaskStore::from_records(starter_records()), Ok)?;
        let task_count = store.len();

        *self.write_store()? = store;
        match provenance {
            InitialLoad::Restored => {
                info!("board restored from stored snapshot with {task_count} tasks");
            }
            InitialLoad::Seeded => info!("board seeded with {task_count} starter tasks"),
        }
        Ok(provenance)
    }

    /// Captures a new task from gesture payload data.
    ///
    /// The new task always starts uncategorized; an area link supplied here
    /// takes effect immediately but does not change the initial column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the description is empty
    /// after trimming, or [`BoardServiceError::LockPoisoned`] when the board
    /// lock is poisoned. Nothing is captured on failure.
    pub async fn create_task(&self, request: CreateTaskRequest) -> BoardServiceResult<Task> {
        let text = TaskText::new(request.text)?;
        let area_id = request.area_id.map(AreaId::new);

        let (task, records) = {
            let mut store = self.write_store()?;
            let task = store.create_task(text, area_id, &*self.clock);
            let records = store.to_records();
            (task, records)
        };

        self.persist(&records).await;
        Ok(task)
    }

    /// Moves a task to another progress state.
    ///
    /// Reassignment is unrestricted across the four states, and reassigning
    /// the current state succeeds without change.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::InvalidState`] when the state name is
    /// unknown, [`BoardServiceError::Domain`] when the task does not exist,
    /// or [`BoardServiceError::LockPoisoned`] when the board lock is
    /// poisoned. The board is untouched in every failure case.
    pub async fn set_task_state(&self, request: SetTaskStateRequest) -> BoardServiceResult<Task> {
        let state = TaskState::try_from(request.state.as_str())?;
        let task_id = TaskId::new(request.task_id);

        let outcome = {
            let mut store = self.write_store()?;
            store
                .reassign_state(&task_id, state)
                .map(|task| (task, store.to_records()))
        };

        match outcome {
            Ok((task, records)) => {
                self.persist(&records).await;
                Ok(task)
            }
            Err(err) => {
                warn!("task state change rejected: {err}");
                Err(err.into())
            }
        }
    }

    /// Replaces the board from snapshot records without persisting.
    ///
    /// Loading the records returned by [`BoardService::snapshot`] is
    /// observably a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the records cannot be
    /// restored, or [`BoardServiceError::LockPoisoned`] when the board lock
    /// is poisoned. The board is untouched on failure.
    pub fn load_snapshot(&self, records: Vec<TaskRecord>) -> BoardServiceResult<()> {
        let store = TaskStore::from_records(records)?;
        *self.write_store()? = store;
        Ok(())
    }

    /// Returns the current snapshot records in capture order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::LockPoisoned`] when the board lock is
    /// poisoned.
    pub fn snapshot(&self) -> BoardServiceResult<Vec<TaskRecord>> {
        Ok(self.read_store()?.to_records())
    }

    /// Returns every task in capture order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::LockPoisoned`] when the board lock is
    /// poisoned.
    pub fn tasks(&self) -> BoardServiceResult<Vec<Task>> {
        Ok(self.read_store()?.tasks().to_vec())
    }

    /// Looks up a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::LockPoisoned`] when the board lock is
    /// poisoned.
    pub fn find_task(&self, task_id: &TaskId) -> BoardServiceResult<Option<Task>> {
        Ok(self.read_store()?.get(task_id).cloned())
    }

    /// Projects the renderable board shape.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::LockPoisoned`] when the board lock is
    /// poisoned.
    pub fn board_view(&self) -> BoardServiceResult<BoardView> {
        let store = self.read_store()?;
        Ok(project(store.tasks(), &self.registry))
    }

    /// Returns whether the given area is complete.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::LockPoisoned`] when the board lock is
    /// poisoned.
    pub fn is_area_complete(&self, area_id: &AreaId) -> BoardServiceResult<bool> {
        let store = self.read_store()?;
        Ok(area_complete(store.tasks(), area_id))
    }

    /// Returns whether every area-linked task on the board is done.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::LockPoisoned`] when the board lock is
    /// poisoned.
    pub fn is_board_complete(&self) -> BoardServiceResult<bool> {
        let store = self.read_store()?;
        Ok(board_complete(store.tasks()))
    }

    /// Tallies completion for every registered area in registry order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::LockPoisoned`] when the board lock is
    /// poisoned.
    pub fn completion_summary(&self) -> BoardServiceResult<Vec<AreaCompletion>> {
        let store = self.read_store()?;
        Ok(completion_summary(store.tasks(), &self.registry))
    }

    /// Returns the area registry.
    #[must_use]
    pub const fn registry(&self) -> &AreaRegistry {
        &self.registry
    }

    /// Writes the snapshot through the gateway, logging failures.
    ///
    /// The in-memory board has already been updated by the time this runs,
    /// so a failed write never rolls back a gesture.
    async fn persist(&self, records: &[TaskRecord]) {
        if let Err(err) = self.snapshots.save(records).await {
            warn!("failed to persist board snapshot: {err}");
        }
    }

    fn read_store(&self) -> Result<RwLockReadGuard<'_, TaskStore>, BoardServiceError> {
        self.store.read().map_err(|_| BoardServiceError::LockPoisoned)
    }

    fn write_store(&self) -> Result<RwLockWriteGuard<'_, TaskStore>, BoardServiceError> {
        self.store
            .write()
            .map_err(|_| BoardServiceError::LockPoisoned)
    }
}
