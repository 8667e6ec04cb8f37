//! Headless harness: drives a session without a terminal and collects
//! every snapshot, for smoke runs and JSON inspection.

use std::time::Duration;

use touchdown_core::state::GameSnapshot;
use touchdown_sim::platform::Scheduler;
use touchdown_sim::{ConfigError, GameSession, SessionConfig};

/// Scheduler stand-in: remembers only whether the engine still wants
/// a tick, with no real time involved.
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
    armed: bool,
}

impl ImmediateScheduler {
    /// Consume the pending request.
    pub fn take_armed(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

impl Scheduler for ImmediateScheduler {
    fn schedule_after(&mut self, _delay: Duration) {
        self.armed = true;
    }
}

/// Run up to `max_ticks` ticks of an untouched flight, stopping early once
/// the engine stops rescheduling itself. Returns every snapshot in order.
pub fn run(config: SessionConfig, max_ticks: u64) -> Result<Vec<GameSnapshot>, ConfigError> {
    let mut session = GameSession::new(config)?;
    let mut scheduler = ImmediateScheduler::default();
    session.start(&mut scheduler);

    let mut snapshots = Vec::new();
    for _ in 0..max_ticks {
        if !scheduler.take_armed() {
            break;
        }
        snapshots.push(session.tick(&mut scheduler));
    }
    Ok(snapshots)
}
