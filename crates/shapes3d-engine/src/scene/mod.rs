//! CPU-side scene description consumed by the mesh renderer.
//!
//! Geometry is static literal data (`&'static [Vertex]`). Each frame the app
//! fills a [`DrawList`] with the meshes to draw and their model-view
//! transforms; the renderer turns that into GPU work.

mod list;
mod mesh;

pub use list::{DrawItem, DrawList};
pub use mesh::{Mesh, Primitive, Vertex};
