use crate::scene::DrawList;

/// Drawable size in physical pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// The draw list arrives empty; whatever the app pushes is presented once the
/// callback returns.
pub struct FrameCtx<'a> {
    pub size: SurfaceSize,
    /// Zero-based index of the frame being built.
    pub frame_index: u64,
    pub draw_list: &'a mut DrawList,
}
