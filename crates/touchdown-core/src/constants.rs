//! Simulation constants and tuning parameters.
//!
//! The dynamics constants are per-tick deltas, not per-second rates: the
//! simulation is defined in fixed steps and the landing thresholds are
//! only meaningful against that cadence.

/// Milliseconds between simulation ticks (~30 Hz).
pub const TICK_INTERVAL_MS: u64 = 33;

// --- Screen geometry (virtual pixels, y grows downward) ---

/// Virtual screen width.
pub const SCREEN_W: i32 = 144;

/// Virtual screen height.
pub const SCREEN_H: i32 = 168;

/// Shuttle sprite width.
pub const SHIP_W: i32 = 25;

/// Shuttle sprite height.
pub const SHIP_H: i32 = 25;

/// Default horizontal position of the shuttle. Fixed for the whole flight.
pub const SHIP_START_X: f32 = 60.0;

// --- Flight dynamics (per tick) ---

/// Downward velocity gained each tick in free fall.
pub const GRAVITY: f32 = 0.01;

/// Downward velocity shed each tick under thrust.
pub const THRUST_ACCEL: f32 = 0.005;

// --- Landing ---

/// Lowest y the shuttle's top edge can occupy (bottom travel bound).
pub const FLOOR_Y: f32 = (SCREEN_H - SHIP_H) as f32;

/// Height of the landing pad band at the bottom of the screen.
pub const LANDING_BAND_H: f32 = 10.0;

/// Reaching y >= LANDING_Y ends the flight with a classified outcome.
pub const LANDING_Y: f32 = FLOOR_Y - LANDING_BAND_H;

/// Touchdown speeds strictly above this are a crash; exactly this is survivable.
pub const CRASH_SPEED: f32 = 0.2;

// --- Display text ---

/// Outcome line after a gentle landing.
pub const WIN_TEXT: &str = "Touchdown!";

/// Outcome line after a hard landing.
pub const LOSS_TEXT: &str = "Crashed!";
