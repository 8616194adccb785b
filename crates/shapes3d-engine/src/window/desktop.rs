use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::error::OsError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::core::{Platform, PlatformEvent};
use crate::device::GpuInit;
use crate::error::{InitError, InitStage};
use crate::render::RasterState;

use super::context::WgpuContext;
use super::runtime::WindowConfig;

/// Pump timeout while waiting for the window to appear.
const WINDOW_CREATE_POLL: Duration = Duration::from_millis(10);
const WINDOW_CREATE_ATTEMPTS: u32 = 500;

/// Desktop platform over winit.
///
/// The event loop is pumped manually (`pump_app_events` with a zero timeout)
/// so the runtime owns the frame loop and event draining never blocks.
#[derive(Default)]
pub struct WinitPlatform {
    event_loop: Option<EventLoop<()>>,
    handler: EventCollector,
}

impl WinitPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Receives winit callbacks during a pump and buffers what the runtime needs.
#[derive(Default)]
struct EventCollector {
    pending_window: Option<WindowAttributes>,
    created_window: Option<Result<Window, OsError>>,
    events: Vec<PlatformEvent>,
}

impl EventCollector {
    fn create_pending(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(attrs) = self.pending_window.take() {
            self.created_window = Some(event_loop.create_window(attrs));
        }
    }
}

impl ApplicationHandler for EventCollector {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending(event_loop);
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                self.events.push(PlatformEvent::Quit);
            }
            _ => {}
        }
    }
}

fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = Window::default_attributes()
        .with_title(config.title.as_str())
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false);

    match config.position {
        Some((x, y)) => attrs.with_position(PhysicalPosition::new(x, y)),
        None => attrs,
    }
}

impl Platform for WinitPlatform {
    type Window = Arc<Window>;
    type Context = WgpuContext;

    fn init(&mut self) -> Result<(), InitError> {
        let event_loop = EventLoop::new()
            .context("failed to create winit EventLoop")
            .map_err(|e| InitError::new(InitStage::Subsystem, e))?;
        self.event_loop = Some(event_loop);
        Ok(())
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<Arc<Window>, InitError> {
        let event_loop = self.event_loop.as_mut().ok_or_else(|| {
            InitError::new(InitStage::Window, anyhow!("windowing subsystem not initialized"))
        })?;

        self.handler.pending_window = Some(window_attributes(config));

        // The window can only be created from inside a callback; pump until one runs.
        for _ in 0..WINDOW_CREATE_ATTEMPTS {
            let status = event_loop.pump_app_events(Some(WINDOW_CREATE_POLL), &mut self.handler);
            if let Some(created) = self.handler.created_window.take() {
                let window = created
                    .context("failed to create window")
                    .map_err(|e| InitError::new(InitStage::Window, e))?;
                return Ok(Arc::new(window));
            }
            if let PumpStatus::Exit(code) = status {
                return Err(InitError::new(
                    InitStage::Window,
                    anyhow!("event loop exited with code {code} before the window was created"),
                ));
            }
        }

        self.handler.pending_window = None;
        Err(InitError::new(
            InitStage::Window,
            anyhow!("window was not created after {WINDOW_CREATE_ATTEMPTS} event pumps"),
        ))
    }

    fn create_context(
        &mut self,
        window: &Arc<Window>,
        gpu: &GpuInit,
        raster: &RasterState,
    ) -> Result<WgpuContext, InitError> {
        pollster::block_on(WgpuContext::new(Arc::clone(window), gpu.clone(), *raster))
    }

    fn poll_events(&mut self, _window: &Arc<Window>, events: &mut Vec<PlatformEvent>) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            events.push(PlatformEvent::Quit);
            return;
        };

        let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut self.handler);
        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited with code {code}");
            self.handler.events.push(PlatformEvent::Quit);
        }

        events.append(&mut self.handler.events);
    }

    fn shutdown(&mut self) {
        self.handler = EventCollector::default();
        self.event_loop = None;
    }
}
