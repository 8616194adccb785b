use cgmath::{Matrix4, SquareMatrix};

use super::Mesh;

/// One mesh draw with its model-view transform.
#[derive(Debug, Copy, Clone)]
pub struct DrawItem {
    pub mesh: &'static Mesh,
    pub model_view: Matrix4<f32>,
}

/// Ordered list of draws for one frame.
///
/// Items are drawn in push order. The projection applies to every item and is
/// expected in wgpu clip convention (see `Projection::clip_matrix`).
#[derive(Debug)]
pub struct DrawList {
    projection: Matrix4<f32>,
    items: Vec<DrawItem>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            projection: Matrix4::identity(),
            items: Vec::new(),
        }
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_projection(&mut self, projection: Matrix4<f32>) {
        self.projection = projection;
    }

    pub fn projection(&self) -> Matrix4<f32> {
        self.projection
    }

    pub fn push(&mut self, mesh: &'static Mesh, model_view: Matrix4<f32>) {
        self.items.push(DrawItem { mesh, model_view });
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops all items. Projection and capacity are kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
