use crate::core::{App, AppControl, FrameCtx, Platform, PlatformEvent, RenderContext};
use crate::device::GpuInit;
use crate::error::InitError;
use crate::render::RasterState;
use crate::scene::DrawList;

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Inner size in physical pixels.
    pub width: u32,
    pub height: u32,
    /// Outer position; `None` lets the platform choose.
    pub position: Option<(i32, i32)>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "shapes3d".to_string(),
            width: 800,
            height: 600,
            position: None,
        }
    }
}

/// Everything the runtime needs to bring up a window and render into it.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub window: WindowConfig,
    pub gpu: GpuInit,
    pub raster: RasterState,
}

/// Summary of a completed run.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RunStats {
    /// Frames handed to the context for presentation.
    pub frames: u64,
}

/// Entry point for the render loop.
pub struct Runtime;

impl Runtime {
    /// Initializes the platform, opens one window with a rendering context,
    /// and drives `app` until a quit event (or an app/context exit request).
    ///
    /// Initialization failures are returned as-is; nothing is drawn in that
    /// case. `platform.shutdown()` runs whenever `platform.init()` succeeded.
    pub fn run<P, A>(
        platform: &mut P,
        config: &RuntimeConfig,
        app: &mut A,
    ) -> Result<RunStats, InitError>
    where
        P: Platform,
        A: App,
    {
        platform.init()?;
        let result = Self::run_window(platform, config, app);
        platform.shutdown();
        log::debug!("windowing subsystem shut down");
        result
    }

    fn run_window<P, A>(
        platform: &mut P,
        config: &RuntimeConfig,
        app: &mut A,
    ) -> Result<RunStats, InitError>
    where
        P: Platform,
        A: App,
    {
        let window = platform.create_window(&config.window)?;
        log::info!(
            "window '{}' created ({}x{})",
            config.window.title,
            config.window.width,
            config.window.height
        );

        let mut context = platform.create_context(&window, &config.gpu, &config.raster)?;
        let size = context.size();
        app.on_start(size);

        let mut events = Vec::new();
        let mut draw_list = DrawList::new();
        let mut stats = RunStats::default();

        loop {
            let mut running = true;
            platform.poll_events(&window, &mut events);
            for event in events.drain(..) {
                match event {
                    PlatformEvent::Quit => {
                        log::info!("quit requested after {} frames", stats.frames);
                        running = false;
                    }
                }
            }
            if !running {
                break;
            }

            draw_list.clear();
            let control = {
                let mut ctx = FrameCtx {
                    size,
                    frame_index: stats.frames,
                    draw_list: &mut draw_list,
                };
                app.on_frame(&mut ctx)
            };
            if control == AppControl::Exit {
                log::info!("app requested exit after {} frames", stats.frames);
                break;
            }

            if context.present(&draw_list) == AppControl::Exit {
                log::error!("rendering context failed; stopping after {} frames", stats.frames);
                break;
            }
            stats.frames += 1;
        }

        // Context goes before the window it renders into.
        drop(context);
        drop(window);

        Ok(stats)
    }
}
