pub mod frame;
pub mod renderer;
pub mod terminal;

pub use frame::{FrameSink, RenderFrame, SurfaceHandle};
pub use renderer::Renderer;
pub use terminal::{TERMINAL_SURFACE, TerminalSink};
