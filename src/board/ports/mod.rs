//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod snapshot_store;

pub use snapshot_store::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
