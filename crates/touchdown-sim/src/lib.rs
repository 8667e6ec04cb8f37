//! Simulation engine for TOUCHDOWN.
//!
//! Owns the shuttle state, advances it one fixed tick at a time, and
//! produces `GameSnapshot`s for a frontend. The engine never draws and
//! never sleeps: it pushes state through the [`platform::Renderer`]
//! contract and asks a [`platform::Scheduler`] for its next tick.

pub mod engine;
pub mod flight;
pub mod platform;
pub mod snapshot;

pub use engine::{ConfigError, GameSession, SessionConfig};
