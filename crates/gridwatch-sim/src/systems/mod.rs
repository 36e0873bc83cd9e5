//! Per-tick systems operating on the registry world.

pub mod movement;
pub mod snapshot;
