//! Game session engine, the core of the game.
//!
//! `GameSession` owns all simulation state by value, applies player
//! commands synchronously, advances one fixed tick at a time, and produces
//! `GameSnapshot`s. Completely headless (no terminal dependency), enabling
//! deterministic testing.

use std::time::Duration;

use thiserror::Error;

use touchdown_core::commands::PlayerCommand;
use touchdown_core::constants::{LANDING_Y, SCREEN_W, SHIP_START_X, SHIP_W, TICK_INTERVAL_MS};
use touchdown_core::enums::{FlightPhase, LandingOutcome, SpriteKind};
use touchdown_core::events::GameEvent;
use touchdown_core::state::GameSnapshot;
use touchdown_core::types::{SessionStats, ShipState, SimTime};

use crate::flight::{self, FlightContext};
use crate::platform::Scheduler;
use crate::snapshot;

/// Nominal duration of one tick.
const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Configuration for starting a new session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Fixed horizontal position of the shuttle.
    pub ship_x: f32,
    /// Vertical position each flight starts from (0 = top of screen).
    pub start_y: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ship_x: SHIP_START_X,
            start_y: 0.0,
        }
    }
}

impl SessionConfig {
    /// Reject positions the flight rules cannot handle.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.ship_x < 0.0 || self.ship_x > (SCREEN_W - SHIP_W) as f32 {
            return Err(ConfigError::ShipXOutOfRange(self.ship_x));
        }
        if self.start_y < 0.0 || self.start_y >= LANDING_Y {
            return Err(ConfigError::StartYOutOfRange(self.start_y));
        }
        Ok(())
    }
}

/// Rejected `SessionConfig` values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The full sprite must fit on screen.
    #[error("ship x {0} outside 0..={max}", max = SCREEN_W - SHIP_W)]
    ShipXOutOfRange(f32),
    /// A flight must start above the landing band.
    #[error("start y {0} outside 0..{max}", max = LANDING_Y)]
    StartYOutOfRange(f32),
}

/// The game session engine. Owns all simulation state.
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    ship: ShipState,
    stats: SessionStats,
    phase: FlightPhase,
    sprite: SpriteKind,
    outcome: Option<LandingOutcome>,
    time: SimTime,
    pending_events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session with the shuttle parked at the start position.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ship: ShipState::at_rest(config.ship_x, config.start_y),
            stats: SessionStats::default(),
            phase: FlightPhase::default(),
            sprite: SpriteKind::default(),
            outcome: None,
            time: SimTime::default(),
            pending_events: Vec::new(),
        })
    }

    /// Arm the first tick. Call once before entering the driver loop.
    pub fn start(&mut self, scheduler: &mut impl Scheduler) {
        scheduler.schedule_after(TICK_INTERVAL);
    }

    /// Apply a player command.
    ///
    /// Commands take effect immediately, between ticks. Thrust only flips
    /// the input flag; the next integration step reads it. Reset is
    /// accepted only once landed: it restores the start state, keeps the
    /// win streak, and re-arms the tick loop.
    pub fn handle_command(&mut self, command: PlayerCommand, scheduler: &mut impl Scheduler) {
        match command {
            PlayerCommand::SetThrust { active } => {
                self.ship.thrust_active = active;
            }
            PlayerCommand::Reset => {
                if self.phase == FlightPhase::Landed {
                    self.ship.y = self.config.start_y;
                    self.ship.velocity = 0.0;
                    self.phase = FlightPhase::Flying;
                    self.sprite = SpriteKind::Idle;
                    self.outcome = None;
                    self.time = SimTime::default();
                    self.pending_events.push(GameEvent::FlightReset);
                    log::debug!("flight reset, streak={}", self.stats.consecutive_wins);
                    scheduler.schedule_after(TICK_INTERVAL);
                }
            }
        }
    }

    /// Advance one tick and return the resulting snapshot.
    ///
    /// While flying this integrates one step, checks for touchdown, and
    /// re-arms the scheduler. Once landed it is a no-op that still serves
    /// the current snapshot; only a reset re-arms ticking.
    pub fn tick(&mut self, scheduler: &mut impl Scheduler) -> GameSnapshot {
        if self.phase == FlightPhase::Flying {
            let update = flight::integrate(&FlightContext {
                y: self.ship.y,
                velocity: self.ship.velocity,
                thrust_active: self.ship.thrust_active,
            });
            self.ship.y = update.y;
            self.ship.velocity = update.velocity;
            self.sprite = update.sprite;
            self.time.advance();

            match update.outcome {
                Some(outcome) => self.land(outcome),
                None => scheduler.schedule_after(TICK_INTERVAL),
            }
        }

        let events = std::mem::take(&mut self.pending_events);
        snapshot::build_snapshot(
            &self.ship,
            &self.stats,
            self.phase,
            self.sprite,
            self.outcome,
            self.time,
            events,
        )
    }

    /// Current state without advancing. Pending events stay queued for the
    /// next tick's snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot::build_snapshot(
            &self.ship,
            &self.stats,
            self.phase,
            self.sprite,
            self.outcome,
            self.time,
            Vec::new(),
        )
    }

    /// Get the current flight phase.
    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    /// Whether the flight has ended and only a reset is accepted.
    pub fn game_over(&self) -> bool {
        self.phase == FlightPhase::Landed
    }

    /// Get the current shuttle state.
    pub fn ship(&self) -> &ShipState {
        &self.ship
    }

    /// Get the session scoring state.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the touchdown classification, once landed.
    pub fn outcome(&self) -> Option<LandingOutcome> {
        self.outcome
    }

    /// End the flight with a classified touchdown.
    fn land(&mut self, outcome: LandingOutcome) {
        self.phase = FlightPhase::Landed;
        self.outcome = Some(outcome);
        match outcome {
            LandingOutcome::SafeLanding => self.stats.consecutive_wins += 1,
            LandingOutcome::Crash => self.stats.consecutive_wins = 0,
        }
        self.pending_events.push(GameEvent::Touchdown {
            outcome,
            speed: self.ship.velocity,
        });
        log::debug!(
            "touchdown: outcome={:?} speed={:.3} streak={}",
            outcome,
            self.ship.velocity,
            self.stats.consecutive_wins
        );
    }
}
