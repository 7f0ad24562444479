//! 8-bit RGBA color with the interpolation helpers the rasterizer needs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from floating channels.
    ///
    /// Each channel is clamped into [0, 1] and mapped to 8 bits by
    /// truncation, never rounding.
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: (r.clamp(0.0, 1.0) * 255.0) as u8,
            g: (g.clamp(0.0, 1.0) * 255.0) as u8,
            b: (b.clamp(0.0, 1.0) * 255.0) as u8,
            a: 255,
        }
    }

    /// Linear interpolation between two colors at parameter `t`.
    ///
    /// Every channel, alpha included, interpolates independently and
    /// truncates back to 8 bits.
    pub fn lerp(c1: Color, c2: Color, t: f32) -> Color {
        Color {
            r: (c1.r as f32 + (c2.r as f32 - c1.r as f32) * t) as u8,
            g: (c1.g as f32 + (c2.g as f32 - c1.g as f32) * t) as u8,
            b: (c1.b as f32 + (c2.b as f32 - c1.b as f32) * t) as u8,
            a: (c1.a as f32 + (c2.a as f32 - c1.a as f32) * t) as u8,
        }
    }

    /// Barycentric blend of three colors with weights `u`, `v`, `w`.
    pub fn from_barycentric(c1: Color, c2: Color, c3: Color, u: f32, v: f32, w: f32) -> Color {
        Color {
            r: (c1.r as f32 * u + c2.r as f32 * v + c3.r as f32 * w) as u8,
            g: (c1.g as f32 * u + c2.g as f32 * v + c3.g as f32 * w) as u8,
            b: (c1.b as f32 * u + c2.b as f32 * v + c3.b as f32 * w) as u8,
            a: (c1.a as f32 * u + c2.a as f32 * v + c3.a as f32 * w) as u8,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_f32_clamps_out_of_range_channels() {
        let color = Color::from_f32(-0.5, 1.7, 0.5);
        assert_eq!(color.r, 0);
        assert_eq!(color.g, 255);
        assert_eq!(color.b, 127);
        assert_eq!(color.a, 255);
    }

    #[test]
    fn from_f32_truncates_instead_of_rounding() {
        // 0.999 * 255 = 254.745, truncation keeps 254
        let color = Color::from_f32(0.999, 0.0, 0.0);
        assert_eq!(color.r, 254);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Color::rgb(0, 100, 200);
        let b = Color::rgb(100, 200, 250);
        assert_eq!(Color::lerp(a, b, 0.0), a);
        assert_eq!(Color::lerp(a, b, 1.0), b);
        let mid = Color::lerp(a, b, 0.5);
        assert_eq!(mid, Color::rgb(50, 150, 225));
    }

    #[test]
    fn barycentric_corner_weights_recover_vertices() {
        let a = Color::rgb(255, 0, 0);
        let b = Color::rgb(0, 255, 0);
        let c = Color::rgb(0, 0, 255);
        assert_eq!(Color::from_barycentric(a, b, c, 1.0, 0.0, 0.0), a);
        assert_eq!(Color::from_barycentric(a, b, c, 0.0, 1.0, 0.0), b);
        assert_eq!(Color::from_barycentric(a, b, c, 0.0, 0.0, 1.0), c);
    }

    #[test]
    fn barycentric_blend_is_channelwise() {
        let a = Color::rgb(100, 0, 60);
        let b = Color::rgb(0, 200, 60);
        let c = Color::rgb(0, 0, 60);
        let blended = Color::from_barycentric(a, b, c, 0.5, 0.25, 0.25);
        assert_eq!(blended, Color::rgb(50, 50, 60));
    }
}
