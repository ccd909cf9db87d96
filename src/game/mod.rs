//! Core game logic module for Snake
//!
//! This module contains all the simulation and collision logic without any
//! I/O or rendering dependencies. The front-end drives it through
//! [`Game`]: `init`, `update`, `draw`, `game_over` and `final_score`.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod objects;
pub mod score;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use engine::Game;
pub use food::Food;
pub use grid::{CELL_COUNT, Color, GRID_SIZE, TileGrid, color_of, color_of_at, is_even_tick};
pub use objects::{ObjectManager, TickResult};
pub use score::Score;
pub use state::{CollisionType, GameState, Position, RoundEnd, Snake};
