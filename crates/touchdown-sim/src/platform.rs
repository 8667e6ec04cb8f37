//! Platform collaborator contracts: the rendering surface and the tick
//! scheduler the engine drives itself with.
//!
//! The engine never draws and never sleeps. It hands visible state to a
//! [`Renderer`] and asks a [`Scheduler`] to call it again one tick later;
//! how either happens is the driver's concern.

use std::time::Duration;

use touchdown_core::enums::SpriteKind;
use touchdown_core::state::GameSnapshot;
use touchdown_core::types::ShipRect;

/// Rendering surface the engine pushes visible state into.
///
/// Calls are synchronous and cannot fail. A driver typically buffers them
/// and flushes one frame after each tick.
pub trait Renderer {
    /// Position the shuttle image.
    fn set_ship_rect(&mut self, rect: ShipRect);
    /// Select the shuttle image.
    fn set_sprite(&mut self, sprite: SpriteKind);
    /// Show the outcome line; `None` clears it.
    fn set_outcome_text(&mut self, text: Option<&str>);
    /// Show the win-streak line.
    fn set_win_counter_text(&mut self, text: &str);
}

/// Timer the engine re-arms its own tick loop with.
pub trait Scheduler {
    /// Request one callback after `delay`. Requests do not accumulate:
    /// a new request supersedes any pending one.
    fn schedule_after(&mut self, delay: Duration);
}

/// Fan a snapshot out through the renderer contract.
pub fn present(snapshot: &GameSnapshot, renderer: &mut impl Renderer) {
    renderer.set_ship_rect(snapshot.ship.rect);
    renderer.set_sprite(snapshot.ship.sprite);
    renderer.set_outcome_text(snapshot.outcome_text.as_deref());
    renderer.set_win_counter_text(&snapshot.wins_text);
}
