//! Flight dynamics finite state machine.
//!
//! Pure functions that integrate one tick of vertical motion and decide
//! whether the shuttle has entered the landing band. No engine dependency;
//! operates on plain data.

use touchdown_core::constants::*;
use touchdown_core::enums::{LandingOutcome, SpriteKind};

/// Input to the flight FSM for a single tick.
pub struct FlightContext {
    pub y: f32,
    pub velocity: f32,
    pub thrust_active: bool,
}

/// Output from the flight FSM.
pub struct FlightUpdate {
    pub y: f32,
    pub velocity: f32,
    pub sprite: SpriteKind,
    /// Set when this step carried the shuttle into the landing band.
    pub outcome: Option<LandingOutcome>,
}

/// Integrate one tick of vertical motion.
///
/// Position moves by the current velocity first, then the velocity picks
/// up this tick's acceleration. Thrust only acts below the ceiling
/// (y > 0), gravity only above the floor; at a travel bound with no
/// applicable branch the velocity is zeroed so it cannot accumulate
/// while parked.
pub fn integrate(ctx: &FlightContext) -> FlightUpdate {
    let mut y = ctx.y;
    let mut velocity = ctx.velocity;

    if ctx.thrust_active && y > 0.0 {
        y += velocity;
        velocity -= THRUST_ACCEL;
    } else if !ctx.thrust_active && y < FLOOR_Y {
        y += velocity;
        velocity += GRAVITY;
    } else {
        velocity = 0.0;
    }

    let outcome = if y >= LANDING_Y {
        Some(classify_landing(velocity))
    } else {
        None
    };

    let sprite = match outcome {
        Some(LandingOutcome::Crash) => SpriteKind::Crash,
        Some(LandingOutcome::SafeLanding) => SpriteKind::Idle,
        None if ctx.thrust_active => SpriteKind::Boost,
        None => SpriteKind::Idle,
    };

    FlightUpdate {
        y,
        velocity,
        sprite,
        outcome,
    }
}

/// Classify a touchdown by its downward speed at band entry.
/// The threshold itself is survivable; only strictly faster crashes.
pub fn classify_landing(velocity: f32) -> LandingOutcome {
    if velocity > CRASH_SPEED {
        LandingOutcome::Crash
    } else {
        LandingOutcome::SafeLanding
    }
}
