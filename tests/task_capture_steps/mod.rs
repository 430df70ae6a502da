//! Step definitions for task capture BDD scenarios.

pub mod world;

mod then;
