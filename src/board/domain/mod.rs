//! Domain model for the chore board.
//!
//! The board domain models task capture, area linkage, progress state
//! reassignment, completion arithmetic, and the renderable board projection
//! while keeping all infrastructure concerns outside of the domain boundary.

mod area;
mod completion;
mod error;
mod ids;
mod projection;
mod seed;
mod store;
mod task;

pub use area::{Area, AreaRegistry};
pub use completion::{AreaCompletion, area_complete, board_complete, completion_summary};
pub use error::{BoardDomainError, ParseTaskStateError};
pub use ids::{AreaId, TaskId, TaskText};
pub use projection::{AreaGroup, BoardColumn, BoardView, ColumnEntry, UNKNOWN_AREA_LABEL, project};
pub use seed::starter_records;
pub use store::TaskStore;
pub use task::{Task, TaskRecord, TaskState};
