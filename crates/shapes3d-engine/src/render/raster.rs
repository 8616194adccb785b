use crate::paint::Color;

/// Depth comparison function.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DepthCompare {
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

impl DepthCompare {
    pub fn to_wgpu(self) -> wgpu::CompareFunction {
        match self {
            DepthCompare::Never => wgpu::CompareFunction::Never,
            DepthCompare::Less => wgpu::CompareFunction::Less,
            DepthCompare::Equal => wgpu::CompareFunction::Equal,
            DepthCompare::LessEqual => wgpu::CompareFunction::LessEqual,
            DepthCompare::Greater => wgpu::CompareFunction::Greater,
            DepthCompare::NotEqual => wgpu::CompareFunction::NotEqual,
            DepthCompare::GreaterEqual => wgpu::CompareFunction::GreaterEqual,
            DepthCompare::Always => wgpu::CompareFunction::Always,
        }
    }
}

/// Color interpolation across a primitive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShadeModel {
    /// Vertex colors are interpolated.
    Smooth,
    /// One color per primitive (first vertex).
    Flat,
}

impl ShadeModel {
    pub(crate) fn entry_points(self) -> (&'static str, &'static str) {
        match self {
            ShadeModel::Smooth => ("vs_smooth", "fs_smooth"),
            ShadeModel::Flat => ("vs_flat", "fs_flat"),
        }
    }
}

/// Frame-invariant rasterization state, set once at startup.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterState {
    pub clear_color: Color,
    /// Depth clear value in `[0, 1]`.
    pub clear_depth: f32,
    pub depth_test: bool,
    pub depth_compare: DepthCompare,
    pub shading: ShadeModel,
}

impl Default for RasterState {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            clear_depth: 1.0,
            depth_test: true,
            depth_compare: DepthCompare::LessEqual,
            shading: ShadeModel::Smooth,
        }
    }
}

impl RasterState {
    /// Depth state for the pipeline. With depth testing off the attachment is
    /// still cleared but never tested or written.
    pub fn depth_stencil(&self, format: wgpu::TextureFormat) -> wgpu::DepthStencilState {
        let (write, compare) = if self.depth_test {
            (true, self.depth_compare.to_wgpu())
        } else {
            (false, wgpu::CompareFunction::Always)
        };

        wgpu::DepthStencilState {
            format,
            depth_write_enabled: write,
            depth_compare: compare,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }
    }

    /// Clear depth clamped into the valid range.
    pub fn clear_depth_clamped(&self) -> f32 {
        self.clear_depth.clamp(0.0, 1.0)
    }

    pub(crate) fn pipeline_key(&self) -> (bool, DepthCompare, ShadeModel) {
        (self.depth_test, self.depth_compare, self.shading)
    }
}
