use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::GRID_SIZE;

/// A position on the game grid.
///
/// Off-board values are representable so a prospective head can be tested
/// against the walls before the snake moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check if the position lies within [0, 15) on both axes
    pub fn is_on_board(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

/// The player-controlled snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
    /// Direction used by the last committed step
    direction: Direction,
    /// Buffered input, applied at the next tick boundary
    pending: Option<Direction>,
}

impl Snake {
    /// Create a new snake with given head position and direction; the
    /// remaining segments trail behind the head.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        assert!(length >= 1, "a snake needs at least one segment");

        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self {
            body,
            direction,
            pending: None,
        }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Self {
            body: segments,
            direction,
            pending: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    /// Direction the next step will use
    pub fn effective_direction(&self) -> Direction {
        self.pending.unwrap_or(self.direction)
    }

    /// Buffer a direction change for the next tick.
    ///
    /// A request to reverse onto the current direction is ignored. Returns
    /// whether the request was kept.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Where the head will be after the next step
    pub fn next_head(&self) -> Position {
        self.head().moved_in_direction(self.effective_direction())
    }

    /// Check if position collides with a segment that is still occupied
    /// after the next step. The tail is excluded unless the snake grows,
    /// since it moves off its cell in the same tick.
    pub fn blocks_next_step(&self, pos: Position, grow: bool) -> bool {
        let occupied = if grow {
            &self.body[..]
        } else {
            &self.body[..self.body.len() - 1]
        };
        occupied.contains(&pos)
    }

    /// Commit the pending direction and advance one cell, growing if asked
    pub fn step(&mut self, grow: bool) {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }

        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Check if a position is occupied by any segment
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never true, length is at least one)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnd {
    Collision(CollisionType),
    /// No free cell left for food
    BoardCleared,
}

impl RoundEnd {
    pub fn is_win(&self) -> bool {
        matches!(self, RoundEnd::BoardCleared)
    }
}

/// Top-level phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Init,
    Playing,
    GameOver,
}
