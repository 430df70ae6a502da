//! Authoritative in-memory collection of board tasks.

use super::{AreaId, BoardDomainError, Task, TaskId, TaskRecord, TaskState, TaskText};
use mockable::Clock;
use std::collections::HashMap;

/// Ordered, indexed collection owning every task on the board.
///
/// The store is the only mutator of task records. Capture order is
/// preserved across snapshots and drives the board projection.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    index: HashMap<TaskId, usize>,
    mint_serial: u64,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a store from snapshot records, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when two records share an
    /// identifier, or [`BoardDomainError::EmptyTaskText`] when a record
    /// carries an empty description.
    pub fn from_records(records: Vec<TaskRecord>) -> Result<Self, BoardDomainError> {
        let mut store = Self::new();
        for record in records {
            let task = Task::from_record(record)?;
            store.insert(task)?;
        }
        Ok(store)
    }

    fn insert(&mut self, task: Task) -> Result<(), BoardDomainError> {
        if self.index.contains_key(task.id()) {
            return Err(BoardDomainError::DuplicateTask(task.id().clone()));
        }
        self.index.insert(task.id().clone(), self.tasks.len());
        self.tasks.push(task);
        Ok(())
    }

    /// Captures a new task, minting a fresh identifier from the clock.
    ///
    /// Minted identifiers embed the clock's millisecond reading plus a
    /// serial that skips any identifier already present, so an identifier is
    /// never issued twice by the same store. New tasks always start in
    /// [`TaskState::Uncategorized`].
    pub fn create_task(
        &mut self,
        text: TaskText,
        area_id: Option<AreaId>,
        clock: &impl Clock,
    ) -> Task {
        let timestamp_millis = clock.utc().timestamp_millis();
        let id = loop {
            let candidate = TaskId::mint(timestamp_millis, self.mint_serial);
            self.mint_serial = self.mint_serial.wrapping_add(1);
            if !self.index.contains_key(&candidate) {
                break candidate;
            }
        };

        let task = Task::new(id, text, area_id);
        self.index.insert(task.id().clone(), self.tasks.len());
        self.tasks.push(task.clone());
        task
    }

    /// Moves a task to the given progress state.
    ///
    /// Reassignment is unrestricted across all states and reassigning the
    /// current state succeeds without change.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the identifier is not
    /// in the store; the store is untouched in that case.
    pub fn reassign_state(
        &mut self,
        id: &TaskId,
        state: TaskState,
    ) -> Result<Task, BoardDomainError> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(id.clone()))?;
        let task = self
            .tasks
            .get_mut(position)
            .ok_or_else(|| BoardDomainError::TaskNotFound(id.clone()))?;
        task.reassign_state(state);
        Ok(task.clone())
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.index
            .get(id)
            .and_then(|position| self.tasks.get(*position))
    }

    /// Returns every task in capture order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Converts the store into snapshot records in capture order.
    #[must_use]
    pub fn to_records(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(Task::to_record).collect()
    }
}
