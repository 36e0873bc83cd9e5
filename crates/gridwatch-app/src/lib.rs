//! Interaction and render loop.
//!
//! The single coordination point: translates raw pointer/wheel/search input
//! into viewport, filter, and selection updates, runs the periodic motion
//! tick, and assembles read-only render snapshots for the host shell.

pub mod input;
pub mod session;
pub mod session_loop;
pub mod state;
