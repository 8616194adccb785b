//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw lists and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in object space; the app supplies model-view + projection.
//! - Depth is cleared and tested every frame according to [`RasterState`].

mod ctx;
mod mesh;
mod raster;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use raster::{DepthCompare, RasterState, ShadeModel};
