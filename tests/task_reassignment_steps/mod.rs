//! Step definitions for task reassignment BDD scenarios.

pub mod world;

mod then;
mod when;
