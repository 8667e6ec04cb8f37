//! Core types and definitions for the TOUCHDOWN simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! commands, state snapshots, events, and constants.
//! It has no dependency on any terminal or runtime framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
