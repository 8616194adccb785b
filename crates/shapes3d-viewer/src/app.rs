use cgmath::Deg;
use shapes3d_engine::core::{App, AppControl, FrameCtx, SurfaceSize};
use shapes3d_engine::math::{ModelView, Projection};

use crate::animation::AnimationState;
use crate::config::{
    CUBE_AXIS, CUBE_POSITION, FOV_Y, PYRAMID_AXIS, PYRAMID_POSITION, Z_FAR, Z_NEAR,
};
use crate::shapes::{CUBE, PYRAMID};

/// The rotating cube + pyramid scene.
#[derive(Debug, Default)]
pub struct ShapesApp {
    animation: AnimationState,
    projection: Option<Projection>,
}

impl ShapesApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cube_transform(&self) -> ModelView {
        let [x, y, z] = CUBE_POSITION;
        ModelView::identity()
            .translate(x, y, z)
            .rotate(Deg(self.animation.cube_angle), CUBE_AXIS)
    }

    pub fn pyramid_transform(&self) -> ModelView {
        let [x, y, z] = PYRAMID_POSITION;
        ModelView::identity()
            .translate(x, y, z)
            .rotate(Deg(self.animation.pyramid_angle), PYRAMID_AXIS)
    }
}

impl App for ShapesApp {
    fn on_start(&mut self, size: SurfaceSize) {
        let projection = Projection::perspective(FOV_Y, size.width, size.height, Z_NEAR, Z_FAR);
        log::debug!(
            "projection: fov {:?}, aspect {:.4}, near {}, far {}",
            projection.fov_y,
            projection.aspect,
            projection.near,
            projection.far
        );
        self.projection = Some(projection);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let projection = *self.projection.get_or_insert_with(|| {
            Projection::perspective(FOV_Y, ctx.size.width, ctx.size.height, Z_NEAR, Z_FAR)
        });

        self.animation.advance();

        ctx.draw_list.set_projection(projection.clip_matrix());
        ctx.draw_list.push(&CUBE, self.cube_transform().matrix());
        ctx.draw_list.push(&PYRAMID, self.pyramid_transform().matrix());

        AppControl::Continue
    }
}
