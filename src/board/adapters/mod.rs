//! Adapter implementations of the board ports.

pub mod json_file;
pub mod memory;
