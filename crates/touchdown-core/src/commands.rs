//! Player commands sent from the frontend to the simulation.
//!
//! Commands are applied synchronously between ticks, never mid-tick.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Engage or release thrust. Repeating the same value is a no-op.
    SetThrust { active: bool },
    /// Start a new flight. Accepted only once landed; ignored mid-air.
    Reset,
}
