//! shapes3d engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer:
//! window and event pump, wgpu device/surface, a depth-tested mesh renderer,
//! and the render loop that drives an [`crate::core::App`].

pub mod core;
pub mod device;
pub mod error;
pub mod window;

pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod scene;
