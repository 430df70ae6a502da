//! Hestia: household chore board engine.
//!
//! This crate provides the data model and state-transition engine behind a
//! single-household chore kanban board: capturing tasks, linking them to
//! physical areas, moving them across progress columns, and deriving area
//! and whole-board completion.
//!
//! # Architecture
//!
//! Hestia follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, JSON files)
//!
//! Rendering and gesture handling live outside this crate: a presentation
//! layer consumes the board projection and drives the service operations.
//!
//! # Modules
//!
//! - [`board`]: Task capture, area grouping, completion, and projection
//! - [`logging`]: File logging bootstrap

pub mod board;
pub mod logging;
