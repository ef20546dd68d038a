//! Night sky backdrop (stateless).

use starfield_core::{GradientStop, Rgb, Surface};

/// Near-black vertical gradient, darkest at the top.
pub const SKY_GRADIENT: [GradientStop; 3] = [
    GradientStop::new(0.0, Rgb::new(2, 2, 2)),
    GradientStop::new(0.5, Rgb::new(5, 5, 5)),
    GradientStop::new(1.0, Rgb::new(8, 8, 8)),
];

/// Paint the backdrop over the whole surface, replacing the previous frame.
pub fn draw<S: Surface + ?Sized>(surface: &mut S) {
    surface.fill_vertical_gradient(&SKY_GRADIENT);
}
