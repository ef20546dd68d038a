//! Structured colors with an opacity channel.

use ratatui::style::Color;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an opacity to this color.
    pub fn with_opacity(self, opacity: f32) -> Rgba {
        Rgba::new(self, opacity)
    }

    /// Linear interpolation between two colors, `t` in 0.0-1.0.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Perceived brightness (0.0-1.0), used to pick the stronger of two glyphs.
    pub fn luminance(self) -> f32 {
        (0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32) / 255.0
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// A color plus an opacity scalar, resolved against a backdrop at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub rgb: Rgb,
    /// Opacity (0.0-1.0).
    pub opacity: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        rgb: Rgb::BLACK,
        opacity: 0.0,
    };

    pub fn new(rgb: Rgb, opacity: f32) -> Self {
        Self {
            rgb,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Same channels, different opacity.
    pub fn with_opacity(self, opacity: f32) -> Rgba {
        Rgba::new(self.rgb, opacity)
    }

    /// Alpha-composite this color over an opaque backdrop.
    pub fn over(self, backdrop: Rgb) -> Rgb {
        backdrop.lerp(self.rgb, self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(0, 10, 20);
        let b = Rgb::new(100, 110, 120);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(50, 60, 70));
    }

    #[test]
    fn test_opacity_is_clamped() {
        assert_eq!(Rgb::WHITE.with_opacity(1.5).opacity, 1.0);
        assert_eq!(Rgb::WHITE.with_opacity(-0.2).opacity, 0.0);
    }

    #[test]
    fn test_over_backdrop() {
        let backdrop = Rgb::new(2, 2, 2);
        assert_eq!(Rgba::TRANSPARENT.over(backdrop), backdrop);
        assert_eq!(Rgb::WHITE.with_opacity(1.0).over(backdrop), Rgb::WHITE);
    }

    #[test]
    fn test_luminance_range() {
        assert_eq!(Rgb::BLACK.luminance(), 0.0);
        assert!((Rgb::WHITE.luminance() - 1.0).abs() < 1e-4);
    }
}
