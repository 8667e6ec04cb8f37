//! Tests for input mapping, the tick timer, and the headless harness.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use touchdown_core::commands::PlayerCommand;
use touchdown_core::enums::{FlightPhase, LandingOutcome};
use touchdown_sim::platform::Scheduler;
use touchdown_sim::SessionConfig;

use crate::game_loop::TickTimer;
use crate::headless;
use crate::input::{AppEvent, InputMap};
use crate::render;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        code,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ))
}

fn thrust(active: bool) -> Option<AppEvent> {
    Some(AppEvent::Command(PlayerCommand::SetThrust { active }))
}

// ---- Input mapping ----

#[test]
fn test_hold_to_thrust_with_release_reporting() {
    let mut input = InputMap::new(true);
    assert_eq!(input.map_event(&press(KeyCode::Char(' '))), thrust(true));
    // Key repeats while held carry no information.
    let repeat = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char(' '),
        KeyModifiers::NONE,
        KeyEventKind::Repeat,
    ));
    assert_eq!(input.map_event(&repeat), None);
    assert_eq!(input.map_event(&release(KeyCode::Char(' '))), thrust(false));
}

#[test]
fn test_up_arrow_also_thrusts() {
    let mut input = InputMap::new(true);
    assert_eq!(input.map_event(&press(KeyCode::Up)), thrust(true));
    assert_eq!(input.map_event(&release(KeyCode::Up)), thrust(false));
}

#[test]
fn test_space_toggles_without_release_reporting() {
    let mut input = InputMap::new(false);
    assert_eq!(input.map_event(&press(KeyCode::Char(' '))), thrust(true));
    assert_eq!(input.map_event(&press(KeyCode::Char(' '))), thrust(false));
    // Legacy terminals never deliver releases; nothing to map.
    assert_eq!(input.map_event(&release(KeyCode::Char(' '))), None);
}

#[test]
fn test_reset_and_quit_keys() {
    let mut input = InputMap::new(true);
    assert_eq!(
        input.map_event(&press(KeyCode::Char('r'))),
        Some(AppEvent::Command(PlayerCommand::Reset))
    );
    assert_eq!(
        input.map_event(&press(KeyCode::Enter)),
        Some(AppEvent::Command(PlayerCommand::Reset))
    );
    assert_eq!(
        input.map_event(&press(KeyCode::Char('q'))),
        Some(AppEvent::Quit)
    );
    assert_eq!(input.map_event(&press(KeyCode::Esc)), Some(AppEvent::Quit));

    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(input.map_event(&ctrl_c), Some(AppEvent::Quit));
}

#[test]
fn test_unmapped_events_ignored() {
    let mut input = InputMap::new(true);
    assert_eq!(input.map_event(&press(KeyCode::Char('x'))), None);
    assert_eq!(input.map_event(&release(KeyCode::Char('r'))), None);
    assert_eq!(input.map_event(&Event::Resize(80, 24)), None);
}

#[test]
fn test_help_line_matches_input_mode() {
    assert!(render::help_line(true).contains("hold to thrust"));
    assert!(render::help_line(false).contains("toggle thrust"));
}

// ---- Tick timer ----

#[test]
fn test_tick_timer_fires_once_due() {
    let mut timer = TickTimer::default();
    let now = Instant::now();
    assert!(!timer.fire_if_due(now));
    assert_eq!(timer.time_until(now), None);

    timer.schedule_after(Duration::ZERO);
    assert!(timer.fire_if_due(Instant::now()));
    // Firing consumes the deadline.
    assert!(!timer.fire_if_due(Instant::now()));
}

#[test]
fn test_tick_timer_latest_request_wins() {
    let mut timer = TickTimer::default();
    timer.schedule_after(Duration::from_secs(3600));
    let now = Instant::now();
    assert!(!timer.fire_if_due(now));
    assert!(timer.time_until(now).unwrap() > Duration::from_secs(3000));

    timer.schedule_after(Duration::ZERO);
    assert!(timer.fire_if_due(Instant::now()));
}

// ---- Headless harness ----

#[test]
fn test_headless_free_fall_runs_to_crash() {
    let snapshots = headless::run(SessionConfig::default(), 1000).unwrap();
    // The engine stops rescheduling at touchdown, well before the cap.
    assert!(
        snapshots.len() < 250,
        "run did not stop: {} ticks",
        snapshots.len()
    );

    let last = snapshots.last().unwrap();
    assert_eq!(last.phase, FlightPhase::Landed);
    assert_eq!(last.outcome, Some(LandingOutcome::Crash));
    assert_eq!(snapshots[0].time.tick, 1);

    // Every snapshot serializes for the JSON-lines output.
    for snapshot in &snapshots {
        serde_json::to_string(snapshot).unwrap();
    }
}

#[test]
fn test_headless_respects_tick_cap() {
    let snapshots = headless::run(SessionConfig::default(), 10).unwrap();
    assert_eq!(snapshots.len(), 10);
    assert_eq!(snapshots.last().unwrap().phase, FlightPhase::Flying);
}
