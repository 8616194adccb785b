use std::sync::Arc;

use winit::window::Window;

use crate::core::{AppControl, RenderContext, SurfaceSize};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::error::InitError;
use crate::render::{MeshRenderer, RasterState, RenderCtx, RenderTarget};
use crate::scene::DrawList;

/// wgpu rendering context for one window.
///
/// Dropping it releases the surface, device, and GPU buffers.
pub struct WgpuContext {
    window: Arc<Window>,
    gpu: Gpu,
    renderer: MeshRenderer,
    raster: RasterState,
}

impl WgpuContext {
    pub async fn new(
        window: Arc<Window>,
        init: GpuInit,
        raster: RasterState,
    ) -> Result<Self, InitError> {
        let gpu = Gpu::new(Arc::clone(&window), init).await?;
        Ok(Self {
            window,
            gpu,
            renderer: MeshRenderer::new(),
            raster,
        })
    }
}

impl RenderContext for WgpuContext {
    fn size(&self) -> SurfaceSize {
        let size = self.gpu.size();
        SurfaceSize::new(size.width, size.height)
    }

    fn present(&mut self, draw_list: &DrawList) -> AppControl {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::warn!("failed to acquire surface texture: {err}");
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.gpu.depth_format(),
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target =
                RenderTarget::new(&mut frame.encoder, &frame.view, self.gpu.depth_view());
            self.renderer.render(&rctx, &mut target, &self.raster, draw_list);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

impl Drop for WgpuContext {
    fn drop(&mut self) {
        log::info!("releasing rendering context");
    }
}
