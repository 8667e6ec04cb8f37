//! Terminal renderer: draws the virtual 144x168 screen into terminal cells.
//!
//! Implements the engine's `Renderer` contract by buffering the latest
//! rect, sprite, and text values, then flushing them as one frame. The
//! playfield is scaled to whatever size the terminal currently has, so
//! the shuttle's travel always spans the full window height.

use std::io::{self, Stdout, Write};

use crossterm::{cursor, event, execute, queue, style, terminal};

use touchdown_core::constants::{LANDING_BAND_H, SCREEN_H, SCREEN_W};
use touchdown_core::enums::SpriteKind;
use touchdown_core::events::GameEvent;
use touchdown_core::types::ShipRect;
use touchdown_sim::platform::Renderer;

/// Terminal-backed renderer. Owns the terminal session: raw mode and the
/// alternate screen are entered on construction and restored on drop.
pub struct TermRenderer {
    out: Stdout,
    release_reporting: bool,
    rect: ShipRect,
    sprite: SpriteKind,
    outcome_text: Option<String>,
    wins_text: String,
    bell_pending: bool,
}

impl Renderer for TermRenderer {
    fn set_ship_rect(&mut self, rect: ShipRect) {
        self.rect = rect;
    }

    fn set_sprite(&mut self, sprite: SpriteKind) {
        self.sprite = sprite;
    }

    fn set_outcome_text(&mut self, text: Option<&str>) {
        self.outcome_text = text.map(str::to_owned);
    }

    fn set_win_counter_text(&mut self, text: &str) {
        self.wins_text = text.to_owned();
    }
}

impl TermRenderer {
    pub fn new(release_reporting: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        if release_reporting {
            execute!(
                out,
                event::PushKeyboardEnhancementFlags(
                    event::KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
        }
        Ok(Self {
            out,
            release_reporting,
            rect: ShipRect::default(),
            sprite: SpriteKind::Idle,
            outcome_text: None,
            wins_text: String::new(),
            bell_pending: false,
        })
    }

    /// Ring the bell once for a touchdown.
    pub fn note_events(&mut self, events: &[GameEvent]) {
        if events
            .iter()
            .any(|event| matches!(event, GameEvent::Touchdown { .. }))
        {
            self.bell_pending = true;
        }
    }

    /// Flush the buffered state as one frame.
    pub fn draw(&mut self) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let cols = cols.max(10);
        let rows = rows.max(10);

        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;

        // Landing pad: the bottom band of the virtual screen.
        let pad_top = to_row(SCREEN_H - LANDING_BAND_H as i32, rows);
        queue!(self.out, style::SetForegroundColor(style::Color::DarkGreen))?;
        for row in pad_top..rows {
            queue!(
                self.out,
                cursor::MoveTo(0, row),
                style::Print("=".repeat(cols as usize))
            )?;
        }

        // Shuttle, anchored by its bottom edge so touchdown meets the pad.
        let art = sprite_art(self.sprite);
        let col = to_col(self.rect.x, cols);
        let bottom = to_row(self.rect.y + self.rect.h, rows);
        let top = bottom.saturating_sub(art.len() as u16);
        queue!(
            self.out,
            style::SetForegroundColor(sprite_color(self.sprite))
        )?;
        for (i, line) in art.iter().enumerate() {
            let row = top + i as u16;
            if row < rows {
                queue!(self.out, cursor::MoveTo(col, row), style::Print(*line))?;
            }
        }

        // Status lines.
        queue!(
            self.out,
            style::SetForegroundColor(style::Color::White),
            cursor::MoveTo(0, 0),
            style::Print(&self.wins_text),
            style::SetForegroundColor(style::Color::DarkGrey),
            cursor::MoveTo(0, 1),
            style::Print(help_line(self.release_reporting))
        )?;

        if let Some(text) = &self.outcome_text {
            let col = (cols / 2).saturating_sub(text.len() as u16 / 2);
            queue!(
                self.out,
                style::SetForegroundColor(style::Color::Yellow),
                cursor::MoveTo(col, rows / 2),
                style::Print(text)
            )?;
        }

        if self.bell_pending {
            self.bell_pending = false;
            queue!(self.out, style::Print('\x07'))?;
        }

        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        if self.release_reporting {
            let _ = execute!(self.out, event::PopKeyboardEnhancementFlags);
        }
        let _ = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Key help shown in-game. Without release reporting the thrust key works
/// as a toggle, and the text must say so.
pub(crate) fn help_line(release_reporting: bool) -> &'static str {
    if release_reporting {
        "space/up: hold to thrust  r: reset  q: quit"
    } else {
        "space/up: toggle thrust  r: reset  q: quit"
    }
}

fn to_col(x: i32, cols: u16) -> u16 {
    (x * cols as i32 / SCREEN_W).clamp(0, cols as i32 - 1) as u16
}

fn to_row(y: i32, rows: u16) -> u16 {
    (y * rows as i32 / SCREEN_H).clamp(0, rows as i32 - 1) as u16
}

fn sprite_art(sprite: SpriteKind) -> &'static [&'static str] {
    match sprite {
        SpriteKind::Idle => &[" /\\ ", "|__|"],
        SpriteKind::Boost => &[" /\\ ", "|__|", " vv "],
        SpriteKind::Crash => &["\\ , /", "/***\\"],
    }
}

fn sprite_color(sprite: SpriteKind) -> style::Color {
    match sprite {
        SpriteKind::Idle => style::Color::White,
        SpriteKind::Boost => style::Color::Yellow,
        SpriteKind::Crash => style::Color::Red,
    }
}
