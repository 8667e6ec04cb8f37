//! Snapshot types: the complete visible state handed to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{FlightPhase, LandingOutcome, SpriteKind};
use crate::events::GameEvent;
use crate::types::{ShipRect, SimTime};

/// Complete visible state produced after each tick (or on demand between ticks).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: FlightPhase,
    pub ship: ShipView,
    /// Terminal classification, present only once landed.
    pub outcome: Option<LandingOutcome>,
    /// Outcome line for the renderer. `None` clears the line.
    pub outcome_text: Option<String>,
    /// Win-streak line for the renderer.
    pub wins_text: String,
    pub stats: StatsView,
    /// One-shot events since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// Shuttle as the renderer sees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    /// Whole-pixel bounding rect.
    pub rect: ShipRect,
    pub sprite: SpriteKind,
    /// Exact vertical position, before pixel truncation.
    pub y: f32,
    /// Downward speed, positive toward the pad.
    pub velocity: f32,
    pub thrust: bool,
}

/// Win-streak counter view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub consecutive_wins: u32,
}
