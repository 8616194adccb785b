use crate::config::{CUBE_STEP, PYRAMID_STEP};

/// Rotation angles in degrees.
///
/// Advanced once per frame by a fixed step, so animation speed follows the
/// frame rate. Angles are never wrapped.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AnimationState {
    pub pyramid_angle: f32,
    pub cube_angle: f32,
}

impl AnimationState {
    pub fn advance(&mut self) {
        self.pyramid_angle += PYRAMID_STEP;
        self.cube_angle -= CUBE_STEP;
    }
}
