/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Colors are written to the framebuffer as-is; the surface is configured
/// without sRGB encoding so literal values match what a fixed-function
/// pipeline would output.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);
    pub const ORANGE: Self = Self::rgb(1.0, 0.5, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// RGB channels as an array (vertex attribute layout).
    #[inline]
    pub const fn to_rgb_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts to a wgpu clear color.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(0.2, 0.4, 0.6).a, 1.0);
        assert_eq!(Color::BLACK, Color::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn orange_matches_literal() {
        assert_eq!(Color::ORANGE.to_rgb_array(), [1.0, 0.5, 0.0]);
    }

    #[test]
    fn to_wgpu_widens_channels() {
        let c = Color::new(1.0, 0.5, 0.25, 1.0).to_wgpu();
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.5, 0.25, 1.0));
    }
}
