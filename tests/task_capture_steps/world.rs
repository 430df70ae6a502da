//! Shared world state for task capture BDD scenarios.

use std::sync::Arc;

use hestia::board::{
    adapters::memory::InMemorySnapshotStore,
    domain::Task,
    services::{BoardService, BoardServiceError, InitialLoad},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemorySnapshotStore, DefaultClock>;

/// Scenario world for task capture behaviour tests.
pub struct TaskCaptureWorld {
    pub gateway: InMemorySnapshotStore,
    pub service: TestBoardService,
    pub last_capture_result: Option<Result<Task, BoardServiceError>>,
    pub last_initial_load: Option<InitialLoad>,
}

impl TaskCaptureWorld {
    /// Creates a world with an empty snapshot gateway and no pending state.
    #[must_use]
    pub fn new() -> Self {
        let gateway = InMemorySnapshotStore::new();
        let service = BoardService::new(
            hestia::board::domain::AreaRegistry::default(),
            Arc::new(gateway.clone()),
            Arc::new(DefaultClock),
        );

        Self {
            gateway,
            service,
            last_capture_result: None,
            last_initial_load: None,
        }
    }

    /// Finds a task on the board by its chore description.
    pub fn task_by_text(&self, text: &str) -> Result<Option<Task>, BoardServiceError> {
        Ok(self
            .service
            .tasks()?
            .into_iter()
            .find(|task| task.text().as_str() == text))
    }
}

impl Default for TaskCaptureWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskCaptureWorld {
    TaskCaptureWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
