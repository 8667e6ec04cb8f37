//! Interactive game loop.
//!
//! Single-threaded and cooperative: input polling, tick deadlines, and
//! rendering all run on this thread. The engine decides when it wants the
//! next tick through the `Scheduler` contract; the loop just honors the
//! deadline it was handed.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event;

use touchdown_sim::platform::{present, Scheduler};
use touchdown_sim::GameSession;

use crate::input::{AppEvent, InputMap};
use crate::render::TermRenderer;

/// Poll granularity while no tick is pending (landed, awaiting reset).
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Single-deadline timer backing the engine's `Scheduler` contract.
#[derive(Debug, Default)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl Scheduler for TickTimer {
    fn schedule_after(&mut self, delay: Duration) {
        // A new request supersedes any pending one.
        self.deadline = Some(Instant::now() + delay);
    }
}

impl TickTimer {
    /// Consume the deadline if it has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the pending deadline.
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}

/// Run the interactive game until a quit key.
pub fn run(
    mut session: GameSession,
    renderer: &mut TermRenderer,
    mut input: InputMap,
) -> io::Result<()> {
    let mut timer = TickTimer::default();
    session.start(&mut timer);
    log::info!("game loop started");

    // First frame before any tick has run.
    present(&session.snapshot(), renderer);
    renderer.draw()?;

    loop {
        let wait = timer.time_until(Instant::now()).unwrap_or(IDLE_POLL);

        if event::poll(wait)? {
            match input.map_event(&event::read()?) {
                Some(AppEvent::Command(command)) => {
                    session.handle_command(command, &mut timer);
                    present(&session.snapshot(), renderer);
                    renderer.draw()?;
                }
                Some(AppEvent::Quit) => {
                    log::info!("quit requested");
                    return Ok(());
                }
                None => {}
            }
        }

        if timer.fire_if_due(Instant::now()) {
            let snapshot = session.tick(&mut timer);
            renderer.note_events(&snapshot.events);
            present(&snapshot, renderer);
            renderer.draw()?;
        }
    }
}
