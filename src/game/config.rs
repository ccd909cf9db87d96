use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::direction::Direction;
use super::grid::GRID_SIZE;
use super::state::Position;

/// Problems with a game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("start position ({x}, {y}) is outside the 15x15 grid")]
    StartOffBoard { x: i32, y: i32 },

    #[error("initial_snake_length must be at least 1")]
    EmptySnake,

    #[error("a snake of length {length} heading {direction:?} from ({x}, {y}) does not fit on the grid")]
    SnakeDoesNotFit {
        x: i32,
        y: i32,
        length: usize,
        direction: Direction,
    },

    #[error("food_reward must be positive")]
    ZeroReward,

    #[error("tick_ms must be positive")]
    ZeroTick,

    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Head cell of the snake at round start
    pub start: Position,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Heading at round start; the body trails behind the head
    pub initial_direction: Direction,
    /// Points earned per food eaten
    pub food_reward: u32,
    /// Simulation tick period in milliseconds
    pub tick_ms: u64,
    /// Seed for food placement. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Swap the checkerboard shades on every odd tick
    pub animate_tiles: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start: Position::new(7, 7),
            initial_snake_length: 3,
            initial_direction: Direction::Right,
            food_reward: 1,
            tick_ms: 125,
            seed: None,
            animate_tiles: false,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with a fixed food seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Load a JSON configuration; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Check that the configuration describes a playable round
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start.is_on_board() {
            return Err(ConfigError::StartOffBoard {
                x: self.start.x,
                y: self.start.y,
            });
        }

        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }

        let does_not_fit = ConfigError::SnakeDoesNotFit {
            x: self.start.x,
            y: self.start.y,
            length: self.initial_snake_length,
            direction: self.initial_direction,
        };

        // A straight snake can never be longer than one row
        if self.initial_snake_length > GRID_SIZE as usize {
            return Err(does_not_fit);
        }

        // The tail sits (length - 1) cells behind the head
        let (dx, dy) = self.initial_direction.delta();
        let back = self.initial_snake_length as i32 - 1;
        let tail = self.start.moved_by(-dx * back, -dy * back);
        if !tail.is_on_board() {
            return Err(does_not_fit);
        }

        if self.food_reward == 0 {
            return Err(ConfigError::ZeroReward);
        }

        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }

        Ok(())
    }
}
