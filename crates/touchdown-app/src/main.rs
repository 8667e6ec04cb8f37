//! TOUCHDOWN: land the shuttle softly.
//!
//! Interactive terminal game by default. `--headless [TICKS]` runs the
//! simulation without a UI and prints one JSON snapshot per line.

use std::io::{self, Write};

use anyhow::{Context, Result};

use touchdown_app::game_loop;
use touchdown_app::headless;
use touchdown_app::input::InputMap;
use touchdown_app::render::TermRenderer;
use touchdown_sim::{GameSession, SessionConfig};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => run_interactive(),
        Some("--headless") => {
            let max_ticks = match args.get(1) {
                Some(raw) => raw.parse().context("TICKS must be an integer")?,
                None => 1000,
            };
            run_headless(max_ticks)
        }
        Some("--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some(other) => anyhow::bail!("unknown argument {other:?} (try --help)"),
    }
}

fn run_interactive() -> Result<()> {
    let session = GameSession::new(SessionConfig::default())?;
    let release_reporting = crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false);
    log::info!("starting interactive session, release_reporting={release_reporting}");

    let mut renderer = TermRenderer::new(release_reporting).context("terminal setup failed")?;
    game_loop::run(session, &mut renderer, InputMap::new(release_reporting))
        .context("game loop failed")
    // Dropping the renderer restores the terminal, also on the error path.
}

fn run_headless(max_ticks: u64) -> Result<()> {
    log::info!("headless run, max_ticks={max_ticks}");
    let snapshots = headless::run(SessionConfig::default(), max_ticks)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for snapshot in &snapshots {
        serde_json::to_writer(&mut out, snapshot)?;
        writeln!(out)?;
    }
    log::info!("headless run finished after {} ticks", snapshots.len());
    Ok(())
}

fn print_usage() {
    println!("touchdown - land the shuttle softly");
    println!();
    println!("USAGE:");
    println!("  touchdown                      interactive game");
    println!("  touchdown --headless [TICKS]   run without a UI, print JSON snapshots");
    println!();
    println!("KEYS:");
    println!("  space/up   hold to thrust (toggles in terminals without release reporting)");
    println!("  r/enter    reset after landing");
    println!("  q/esc      quit");
}
