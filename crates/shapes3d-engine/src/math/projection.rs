use cgmath::{perspective, Deg, Matrix4};

/// Converts OpenGL clip space (z in `[-w, w]`) to wgpu clip space (z in `[0, w]`).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Symmetric perspective frustum.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    /// Vertical field of view.
    pub fov_y: Deg<f32>,
    /// Width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// Builds a projection for a `width` x `height` drawable.
    pub fn perspective(fov_y: Deg<f32>, width: u32, height: u32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            aspect: Self::aspect_ratio(width, height),
            near,
            far,
        }
    }

    /// `width / height`. A zero height is treated as 1.
    pub fn aspect_ratio(width: u32, height: u32) -> f32 {
        width as f32 / height.max(1) as f32
    }

    /// Projection matrix in OpenGL clip convention.
    pub fn matrix(&self) -> Matrix4<f32> {
        perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Projection matrix in wgpu clip convention.
    pub fn clip_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * self.matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    const EPS: f32 = 1e-5;

    fn project(m: Matrix4<f32>, z: f32) -> f32 {
        let clip = m * Vector4::new(0.0, 0.0, z, 1.0);
        clip.z / clip.w
    }

    #[test]
    fn aspect_is_width_over_height() {
        let p = Projection::perspective(Deg(45.0), 800, 600, 0.1, 100.0);
        assert!((p.aspect - 800.0 / 600.0).abs() < EPS);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        assert_eq!(Projection::aspect_ratio(640, 0), 640.0);
    }

    #[test]
    fn gl_matrix_maps_near_far_to_unit_cube() {
        let p = Projection::perspective(Deg(45.0), 800, 600, 0.1, 100.0);
        assert!((project(p.matrix(), -0.1) + 1.0).abs() < EPS);
        assert!((project(p.matrix(), -100.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn clip_matrix_maps_near_far_to_zero_one() {
        let p = Projection::perspective(Deg(45.0), 800, 600, 0.1, 100.0);
        assert!(project(p.clip_matrix(), -0.1).abs() < EPS);
        assert!((project(p.clip_matrix(), -100.0) - 1.0).abs() < 1e-4);
    }
}
