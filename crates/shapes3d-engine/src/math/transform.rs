use cgmath::{Deg, InnerSpace, Matrix4, SquareMatrix, Vector3};

/// Model-view matrix builder mirroring the fixed-function matrix stack.
///
/// Each operation post-multiplies the current matrix, so transforms apply to
/// vertices in reverse call order (`translate` then `rotate` rotates the object
/// about its own origin, then moves it).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelView {
    matrix: Matrix4<f32>,
}

impl Default for ModelView {
    fn default() -> Self {
        Self::identity()
    }
}

impl ModelView {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    pub fn translate(mut self, x: f32, y: f32, z: f32) -> Self {
        self.matrix = self.matrix * Matrix4::from_translation(Vector3::new(x, y, z));
        self
    }

    /// Rotates by `angle` about `axis`. The axis is normalized; a zero axis
    /// leaves the matrix unchanged.
    pub fn rotate(mut self, angle: Deg<f32>, axis: Vector3<f32>) -> Self {
        if axis.magnitude2() == 0.0 {
            return self;
        }
        self.matrix = self.matrix * Matrix4::from_axis_angle(axis.normalize(), angle);
        self
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        self.matrix
    }
}

impl From<ModelView> for Matrix4<f32> {
    fn from(mv: ModelView) -> Self {
        mv.matrix
    }
}
