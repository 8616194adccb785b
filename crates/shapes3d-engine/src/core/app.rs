use super::ctx::{FrameCtx, SurfaceSize};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by the runtime loop.
pub trait App {
    /// Called once, after the rendering context is ready and before the first frame.
    fn on_start(&mut self, size: SurfaceSize) {
        let _ = size;
    }

    /// Called once per frame to fill the draw list.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
