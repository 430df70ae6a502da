//! Household chore board engine.
//!
//! This module models chore tasks grouped by physical household areas and
//! their movement across progress columns: capturing tasks, linking them to
//! areas, reassigning progress states, deriving area and whole-board
//! completion, and projecting the renderable board shape. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
