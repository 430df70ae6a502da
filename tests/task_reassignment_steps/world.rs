//! Shared world state for task reassignment BDD scenarios.

use std::sync::Arc;

use hestia::board::{
    adapters::memory::InMemorySnapshotStore,
    domain::{AreaRegistry, Task},
    services::{BoardService, BoardServiceError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemorySnapshotStore, DefaultClock>;

/// Scenario world for task reassignment behaviour tests.
pub struct TaskReassignmentWorld {
    pub service: TestBoardService,
    pub last_created_task: Option<Task>,
    pub last_move_result: Option<Result<Task, BoardServiceError>>,
}

impl TaskReassignmentWorld {
    /// Creates a world with an empty board and no pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = BoardService::new(
            AreaRegistry::default(),
            Arc::new(InMemorySnapshotStore::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            last_created_task: None,
            last_move_result: None,
        }
    }
}

impl Default for TaskReassignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskReassignmentWorld {
    TaskReassignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
