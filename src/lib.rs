//! Stone Snake - a terminal Snake game on a wrapping grid
//!
//! This library provides:
//! - Core game logic (game module): grid math, snake, apple, stone, one-tick engine
//! - Board drawing (render module) behind a small `Renderer` trait, with a ratatui implementation
//! - Keyboard input (input module) behind an `InputSource` trait, read from crossterm
//! - Tick pacing (clock module)
//! - The keyboard-driven game loop (modes module)

pub mod clock;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
