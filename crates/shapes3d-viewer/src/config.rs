//! Fixed scene and window parameters.

use cgmath::{Deg, Vector3};
use shapes3d_engine::device::GpuInit;
use shapes3d_engine::paint::Color;
use shapes3d_engine::render::{DepthCompare, RasterState, ShadeModel};
use shapes3d_engine::window::{RuntimeConfig, WindowConfig};

pub const WINDOW_TITLE: &str = "SDL2 OpenGL 3D Shapes";
pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;

pub const FOV_Y: Deg<f32> = Deg(45.0);
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

pub const CUBE_POSITION: [f32; 3] = [1.5, 0.0, -7.0];
pub const CUBE_AXIS: Vector3<f32> = Vector3::new(1.0, 1.0, 1.0);
/// Degrees subtracted from the cube angle every frame.
pub const CUBE_STEP: f32 = 0.15;

pub const PYRAMID_POSITION: [f32; 3] = [-1.5, 0.0, -6.0];
pub const PYRAMID_AXIS: Vector3<f32> = Vector3::new(1.0, 1.0, 0.0);
/// Degrees added to the pyramid angle every frame.
pub const PYRAMID_STEP: f32 = 0.2;

pub fn raster_state() -> RasterState {
    RasterState {
        clear_color: Color::new(0.0, 0.0, 0.0, 1.0),
        clear_depth: 1.0,
        depth_test: true,
        depth_compare: DepthCompare::LessEqual,
        shading: ShadeModel::Smooth,
    }
}

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        window: WindowConfig {
            title: WINDOW_TITLE.to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            position: None,
        },
        gpu: GpuInit::default(),
        raster: raster_state(),
    }
}
