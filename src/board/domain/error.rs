//! Error types for board domain validation and parsing.

use super::{AreaId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// An area with the same identifier is already registered.
    #[error("duplicate area identifier: {0}")]
    DuplicateArea(AreaId),
}

/// Error returned while parsing task states from gesture payloads or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);
