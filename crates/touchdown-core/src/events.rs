//! Events emitted by the simulation for frontend feedback.

use serde::{Deserialize, Serialize};

use crate::enums::LandingOutcome;

/// One-shot notifications, drained into each tick's snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The shuttle entered the landing band and the flight ended.
    Touchdown {
        outcome: LandingOutcome,
        /// Downward speed at the moment of touchdown.
        speed: f32,
    },
    /// A reset command was accepted and a new flight armed.
    FlightReset,
}
