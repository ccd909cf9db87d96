//! Tile Snake - a 15x15 tile-grid Snake game
//!
//! This library provides:
//! - Core simulation, collision and scoring (game module)
//! - Virtual button input and the terminal key mapping (input module)
//! - The render boundary and a ratatui painter (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal front-end (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
