//! In-memory adapter implementations.

mod snapshot;

pub use snapshot::InMemorySnapshotStore;
