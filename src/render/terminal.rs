use anyhow::{Context, Result};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Stderr;
use tracing::trace;

use super::frame::{FrameSink, RenderFrame, SurfaceHandle};
use super::renderer::Renderer;
use crate::metrics::GameMetrics;

/// The terminal draws on stderr; its descriptor doubles as the surface id
pub const TERMINAL_SURFACE: SurfaceHandle = SurfaceHandle::new(2);

/// Paints frames onto a crossterm-backed ratatui terminal
pub struct TerminalSink<'a> {
    terminal: &'a mut Terminal<CrosstermBackend<Stderr>>,
    renderer: &'a Renderer,
    metrics: &'a GameMetrics,
}

impl<'a> TerminalSink<'a> {
    pub fn new(
        terminal: &'a mut Terminal<CrosstermBackend<Stderr>>,
        renderer: &'a Renderer,
        metrics: &'a GameMetrics,
    ) -> Self {
        Self {
            terminal,
            renderer,
            metrics,
        }
    }
}

impl FrameSink for TerminalSink<'_> {
    type Error = anyhow::Error;

    fn present(&mut self, surface: Option<SurfaceHandle>, frame: &RenderFrame<'_>) -> Result<()> {
        trace!(surface = ?surface.map(|s| s.raw()), ticks = frame.ticks, "presenting frame");

        let (renderer, metrics) = (self.renderer, self.metrics);
        self.terminal
            .draw(|f| renderer.render(f, frame, metrics))
            .context("Failed to draw frame")?;
        Ok(())
    }
}
