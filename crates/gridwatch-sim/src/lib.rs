//! Target registry and motion model.
//!
//! `TargetRegistry` owns the hecs ECS world holding all tracked targets and
//! advances their simulated motion each tick. Completely headless (no
//! viewport or selection knowledge), enabling deterministic testing.

pub mod components;
pub mod motion;
pub mod registry;
pub mod systems;
pub mod world_setup;

#[cfg(test)]
mod tests;
