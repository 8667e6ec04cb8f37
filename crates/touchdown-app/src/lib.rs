//! TOUCHDOWN terminal application.
//!
//! Wires the simulation to a crossterm frontend: the game loop drives
//! fixed ticks, the renderer draws the virtual screen into terminal
//! cells, and the input mapper turns key events into player commands.

pub mod game_loop;
pub mod headless;
pub mod input;
pub mod render;

#[cfg(test)]
mod tests;
