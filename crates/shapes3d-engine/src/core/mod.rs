//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime loop, the platform
//! backend (window + events + GPU context), and the application. The loop in
//! [`crate::window::Runtime`] is written only against these traits.

mod app;
mod ctx;
mod platform;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, SurfaceSize};
pub use platform::{Platform, PlatformEvent, RenderContext};
