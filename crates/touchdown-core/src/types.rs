//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{SHIP_H, SHIP_W, TICK_INTERVAL_MS};

/// Vertical flight state of the shuttle.
///
/// y grows downward: 0 is the top of the screen, `FLOOR_Y` the bottom
/// travel bound. Velocity is vertical only, positive = downward. The
/// horizontal position never changes during a flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipState {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    /// Current thrust input. A flag, not a force: the next tick's
    /// integration branch reads it.
    pub thrust_active: bool,
}

/// Integer screen-space rectangle handed to renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Session-scoped scoring. Survives flight resets, dies with the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Sequential safe landings. Any crash zeroes it.
    pub consecutive_wins: u32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl ShipState {
    /// Shuttle at rest with thrust off.
    pub fn at_rest(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            thrust_active: false,
        }
    }

    /// On-screen bounding rect. Fractional position truncates toward zero,
    /// matching integer pixel addressing.
    pub fn rect(&self) -> ShipRect {
        ShipRect {
            x: self.x as i32,
            y: self.y as i32,
            w: SHIP_W,
            h: SHIP_H,
        }
    }
}

impl SimTime {
    /// Seconds per tick at the fixed cadence.
    pub fn dt(&self) -> f32 {
        TICK_INTERVAL_MS as f32 / 1000.0
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
