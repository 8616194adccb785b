//! Window + runtime loop.
//!
//! [`Runtime`] drives any [`crate::core::Platform`]; [`WinitPlatform`] is the
//! desktop implementation over winit + wgpu.

mod context;
mod desktop;
mod runtime;

pub use context::WgpuContext;
pub use desktop::WinitPlatform;
pub use runtime::{RunStats, Runtime, RuntimeConfig, WindowConfig};
