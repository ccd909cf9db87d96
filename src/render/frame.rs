//! Render boundary: everything a painter needs for one frame
//!
//! The game builds a [`RenderFrame`] on every draw request and hands it to a
//! [`FrameSink`]. Sinks own the actual output surface.

use crate::game::{Direction, GameState, Position, RoundEnd, TileGrid};

/// Opaque identifier of the surface a sink paints on.
///
/// The game stores it and passes it back to the sink; it never interprets
/// the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(u64);

impl SurfaceHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Borrowed view of the game for a single frame
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub state: GameState,
    /// Snake cells, head first
    pub body: &'a [Position],
    pub direction: Direction,
    pub food: Option<Position>,
    pub tiles: &'a TileGrid,
    /// Live score
    pub score: u32,
    /// Set once the round is over
    pub final_score: Option<u32>,
    pub round_end: Option<RoundEnd>,
    pub ticks: u64,
}

impl RenderFrame<'_> {
    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}

/// Something that can paint a frame
pub trait FrameSink {
    type Error;

    fn present(
        &mut self,
        surface: Option<SurfaceHandle>,
        frame: &RenderFrame<'_>,
    ) -> Result<(), Self::Error>;
}
