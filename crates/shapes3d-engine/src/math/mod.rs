//! Projection and model-view transforms.
//!
//! Matrices follow the OpenGL conventions (right-handed eye space, camera
//! looking down -Z, column vectors). [`Projection::clip_matrix`] remaps depth to
//! the `[0, 1]` range wgpu expects.

mod projection;
mod transform;

pub use projection::Projection;
pub use transform::ModelView;
