//! Input mapping: terminal key events to player commands.
//!
//! Terminals speaking the kitty keyboard protocol report key releases, so
//! holding space (or Up) gives true hold-to-thrust like the original
//! button. Everywhere else space toggles the thruster instead.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use touchdown_core::commands::PlayerCommand;

/// What the driver loop should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Command(PlayerCommand),
    Quit,
}

/// Stateful key policy. Tracks the toggle state for terminals without
/// release reporting.
#[derive(Debug, Clone, Copy)]
pub struct InputMap {
    release_reporting: bool,
    thrust_held: bool,
}

impl InputMap {
    pub fn new(release_reporting: bool) -> Self {
        Self {
            release_reporting,
            thrust_held: false,
        }
    }

    /// Map one terminal event. `None` means the game ignores it.
    pub fn map_event(&mut self, event: &Event) -> Option<AppEvent> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return pressed(key).then_some(AppEvent::Quit);
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => pressed(key).then_some(AppEvent::Quit),
            KeyCode::Char('r') | KeyCode::Enter => {
                pressed(key).then_some(AppEvent::Command(PlayerCommand::Reset))
            }
            KeyCode::Char(' ') | KeyCode::Up => self.map_thrust(key),
            _ => None,
        }
    }

    fn map_thrust(&mut self, key: &KeyEvent) -> Option<AppEvent> {
        let active = if self.release_reporting {
            match key.kind {
                KeyEventKind::Press => true,
                KeyEventKind::Release => false,
                // The flag is already set; repeats carry no information.
                KeyEventKind::Repeat => return None,
            }
        } else {
            if !pressed(key) {
                return None;
            }
            !self.thrust_held
        };
        self.thrust_held = active;
        Some(AppEvent::Command(PlayerCommand::SetThrust { active }))
    }
}

fn pressed(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}
