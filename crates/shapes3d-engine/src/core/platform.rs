use crate::device::GpuInit;
use crate::error::InitError;
use crate::render::RasterState;
use crate::scene::DrawList;
use crate::window::WindowConfig;

use super::app::AppControl;
use super::ctx::SurfaceSize;

/// Platform-agnostic window event.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// The user or the system asked the application to close.
    Quit,
}

/// Windowing backend: subsystem lifetime, window creation, context creation,
/// event polling.
///
/// Each creation step is fail-fast and reports an [`InitError`] tagged with
/// the failing stage. Releasing a context is dropping it.
pub trait Platform {
    type Window;
    type Context: RenderContext;

    /// Brings up the windowing subsystem.
    fn init(&mut self) -> Result<(), InitError>;

    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window, InitError>;

    fn create_context(
        &mut self,
        window: &Self::Window,
        gpu: &GpuInit,
        raster: &RasterState,
    ) -> Result<Self::Context, InitError>;

    /// Appends all pending events to `events` without blocking.
    fn poll_events(&mut self, window: &Self::Window, events: &mut Vec<PlatformEvent>);

    /// Tears down process-wide windowing state. Called once, after every
    /// window and context has been dropped.
    fn shutdown(&mut self);
}

/// Rendering context bound to one window.
pub trait RenderContext {
    fn size(&self) -> SurfaceSize;

    /// Clears, draws `draw_list`, and presents (buffer swap).
    ///
    /// Returns [`AppControl::Exit`] only on an unrecoverable device/surface error.
    fn present(&mut self, draw_list: &DrawList) -> AppControl;
}
