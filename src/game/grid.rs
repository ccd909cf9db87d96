//! Background tile colors for the fixed 15x15 board
//!
//! The grid carries no game state. It is consulted only when a frame is
//! built for the renderer.

use serde::{Deserialize, Serialize};

use super::state::Position;

/// Number of tiles along each axis of the board
pub const GRID_SIZE: i32 = 15;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// A 24-bit RGB color, `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const LIGHT_GREEN: Color = Color(0x007a21);
    pub const SLIGHTLY_DARK_GREEN: Color = Color(0x00b515);
    pub const DARK_GREEN: Color = Color(0x0f3814);
    pub const DARKER_GREEN: Color = Color(0x003900);
    pub const DARKEST_GREEN: Color = Color(0x002000);
    pub const SNAKE_BLUE: Color = Color(0x262afd);
    pub const APPLE_RED: Color = Color(0xfc0140);

    /// Split into (r, g, b) components
    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

/// Checkerboard shade of the tile at (x, y).
///
/// Panics if (x, y) lies outside the board.
pub fn color_of(x: i32, y: i32) -> Color {
    assert!(
        (0..GRID_SIZE).contains(&x) && (0..GRID_SIZE).contains(&y),
        "tile ({x}, {y}) is outside the {GRID_SIZE}x{GRID_SIZE} grid"
    );

    if (x + y) % 2 == 0 {
        Color::LIGHT_GREEN
    } else {
        Color::SLIGHTLY_DARK_GREEN
    }
}

/// Whether `tick` is an even tick; animations swap phase on every tick
pub fn is_even_tick(tick: u64) -> bool {
    tick % 2 == 0
}

/// Tile shade at (x, y) on animation tick `tick`.
///
/// Even ticks match [`color_of`]; odd ticks swap the two shades.
pub fn color_of_at(x: i32, y: i32, tick: u64) -> Color {
    let base = color_of(x, y);
    if is_even_tick(tick) {
        base
    } else if base == Color::LIGHT_GREEN {
        Color::SLIGHTLY_DARK_GREEN
    } else {
        Color::LIGHT_GREEN
    }
}

/// Snapshot of every tile color, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    colors: Vec<Color>,
}

impl TileGrid {
    pub fn new() -> Self {
        Self::at_tick(0)
    }

    /// Tile colors for animation tick `tick`
    pub fn at_tick(tick: u64) -> Self {
        let colors = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| color_of_at(x, y, tick)))
            .collect();

        Self { colors }
    }

    pub fn get(&self, pos: Position) -> Color {
        assert!(pos.is_on_board(), "tile {pos:?} is outside the grid");
        self.colors[(pos.y * GRID_SIZE + pos.x) as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.colors.chunks(GRID_SIZE as usize)
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new()
    }
}
