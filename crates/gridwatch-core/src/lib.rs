//! Core types and definitions for the GRIDWATCH tracking console.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric types, statuses, operator commands, render snapshots, seeds,
//! and constants. It has no dependency on any runtime machinery.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod seed;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
