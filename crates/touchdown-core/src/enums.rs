//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Flight lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Shuttle airborne, ticks advancing.
    #[default]
    Flying,
    /// Flight over. Terminal until a reset command; ticking is stopped.
    Landed,
}

/// Which shuttle image the renderer should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    /// Engine off: falling, parked, or safely down.
    #[default]
    Idle,
    /// Thrust held while airborne.
    Boost,
    /// Wreck after a hard landing.
    Crash,
}

/// Touchdown classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingOutcome {
    /// Downward speed at or below the survivable threshold.
    SafeLanding,
    /// Too fast at the pad.
    Crash,
}
