//! Snapshot building: converts session state into a `GameSnapshot`.
//!
//! Read-only over the inputs; the engine decides which events ride along.

use touchdown_core::constants::{LOSS_TEXT, WIN_TEXT};
use touchdown_core::enums::{FlightPhase, LandingOutcome, SpriteKind};
use touchdown_core::events::GameEvent;
use touchdown_core::state::{GameSnapshot, ShipView, StatsView};
use touchdown_core::types::{SessionStats, ShipState, SimTime};

/// Assemble the complete visible state.
pub fn build_snapshot(
    ship: &ShipState,
    stats: &SessionStats,
    phase: FlightPhase,
    sprite: SpriteKind,
    outcome: Option<LandingOutcome>,
    time: SimTime,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time,
        phase,
        ship: ShipView {
            rect: ship.rect(),
            sprite,
            y: ship.y,
            velocity: ship.velocity,
            thrust: ship.thrust_active,
        },
        outcome,
        outcome_text: outcome.map(|o| outcome_text(o).to_owned()),
        wins_text: format!("Wins: {}", stats.consecutive_wins),
        stats: StatsView {
            consecutive_wins: stats.consecutive_wins,
        },
        events,
    }
}

/// Outcome line shown once the flight ends.
pub fn outcome_text(outcome: LandingOutcome) -> &'static str {
    match outcome {
        LandingOutcome::SafeLanding => WIN_TEXT,
        LandingOutcome::Crash => LOSS_TEXT,
    }
}
