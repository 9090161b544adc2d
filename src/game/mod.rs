//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal or rendering dependencies.
//! The snake wraps around the board edges, grows on apples, and starts over when it
//! hits the stone or its own body.

pub mod action;
pub mod config;
pub mod engine;
pub mod entity;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{GameConfig, Palette, Rgb};
pub use engine::{GameEngine, ResetCause, StepInfo};
pub use entity::{Apple, Positioned, Stone};
pub use grid::{Cell, Grid, Occupancy};
pub use state::{GameState, Movement, Snake};
