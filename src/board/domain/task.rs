//! Task aggregate, progress states, and the wire snapshot record.

use super::{AreaId, BoardDomainError, ParseTaskStateError, TaskId, TaskText};
use serde::{Deserialize, Serialize};

/// Progress state of a chore task, one per board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    /// Task has been captured but not yet sorted into the flow.
    Uncategorized,
    /// Task is queued for work.
    Todo,
    /// Task is actively being worked.
    InProgress,
    /// Task has been finished.
    Done,
}

impl TaskState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uncategorized => "uncategorized",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "uncategorized" => Ok(Self::Uncategorized),
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStateError(value.to_owned())),
        }
    }
}

/// Chore task aggregate.
///
/// A task may carry a link to a physical area. The link is a weak reference:
/// tasks whose area is no longer registered remain valid and are grouped
/// under a fallback label by the board projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    area_id: Option<AreaId>,
    state: TaskState,
}

impl Task {
    /// Creates a freshly captured task.
    ///
    /// New tasks always start in [`TaskState::Uncategorized`], regardless of
    /// any area link supplied at capture time.
    #[must_use]
    pub const fn new(id: TaskId, text: TaskText, area_id: Option<AreaId>) -> Self {
        Self {
            id,
            text,
            area_id,
            state: TaskState::Uncategorized,
        }
    }

    /// Reconstructs a task from a stored snapshot record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskText`] when the stored text is
    /// empty after trimming.
    pub fn from_record(record: TaskRecord) -> Result<Self, BoardDomainError> {
        let text = TaskText::new(record.text)?;
        Ok(Self {
            id: TaskId::new(record.id),
            text,
            area_id: record.area_id.map(AreaId::new),
            state: record.state,
        })
    }

    /// Converts the task into its wire snapshot record.
    #[must_use]
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.as_str().to_owned(),
            text: self.text.as_str().to_owned(),
            area_id: self
                .area_id
                .as_ref()
                .map(|area_id| area_id.as_str().to_owned()),
            state: self.state,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the chore description.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the linked area identifier, if any.
    #[must_use]
    pub const fn area_id(&self) -> Option<&AreaId> {
        self.area_id.as_ref()
    }

    /// Returns the progress state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Moves the task to the given progress state.
    ///
    /// Reassignment is unrestricted: any state may follow any other, and
    /// reassigning the current state succeeds without change.
    pub const fn reassign_state(&mut self, state: TaskState) {
        self.state = state;
    }
}

/// Wire-format record for a single task.
///
/// A stored board snapshot is a JSON array of these records and is the
/// entire durable state of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Unique task identifier.
    pub id: String,
    /// Chore description shown on the card.
    pub text: String,
    /// Linked area identifier, `null` when the task has no area.
    #[serde(default)]
    pub area_id: Option<String>,
    /// Progress state.
    pub state: TaskState,
}
