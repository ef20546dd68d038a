//! The 2D drawing context the animation paints onto.

use crate::{Dimensions, Point, Rgb, Rgba};

/// A color stop in a gradient, `offset` in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgb) -> Self {
        Self { offset, color }
    }

    /// Sample a sorted list of stops at `t`. Returns black for an empty list.
    pub fn sample(stops: &[GradientStop], t: f32) -> Rgb {
        let Some(first) = stops.first() else {
            return Rgb::BLACK;
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = (b.offset - a.offset).max(f32::EPSILON);
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        stops[stops.len() - 1].color
    }
}

/// Drawing operations needed by the starfield.
///
/// Coordinates and lengths are in surface pixels.
pub trait Surface {
    /// Current size of the surface.
    fn dimensions(&self) -> Dimensions;

    /// Paint the whole surface with a top-to-bottom gradient.
    fn fill_vertical_gradient(&mut self, stops: &[GradientStop]);

    /// Fill a solid circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Fill a circle whose opacity falls from `color` at the centre to
    /// transparent at `radius`.
    fn fill_radial_glow(&mut self, center: Point, radius: f32, color: Rgba);

    /// Stroke a line whose color runs from `from` to `to` along its length.
    fn stroke_line(&mut self, start: Point, end: Point, width: f32, from: Rgba, to: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOPS: [GradientStop; 3] = [
        GradientStop::new(0.0, Rgb::new(2, 2, 2)),
        GradientStop::new(0.5, Rgb::new(6, 6, 6)),
        GradientStop::new(1.0, Rgb::new(8, 8, 8)),
    ];

    #[test]
    fn test_sample_at_stops() {
        assert_eq!(GradientStop::sample(&STOPS, 0.0), Rgb::new(2, 2, 2));
        assert_eq!(GradientStop::sample(&STOPS, 0.5), Rgb::new(6, 6, 6));
        assert_eq!(GradientStop::sample(&STOPS, 1.0), Rgb::new(8, 8, 8));
    }

    #[test]
    fn test_sample_between_stops() {
        assert_eq!(GradientStop::sample(&STOPS, 0.25), Rgb::new(4, 4, 4));
        assert_eq!(GradientStop::sample(&STOPS, 0.75), Rgb::new(7, 7, 7));
    }

    #[test]
    fn test_sample_out_of_range() {
        assert_eq!(GradientStop::sample(&STOPS, -1.0), Rgb::new(2, 2, 2));
        assert_eq!(GradientStop::sample(&STOPS, 2.0), Rgb::new(8, 8, 8));
        assert_eq!(GradientStop::sample(&[], 0.5), Rgb::BLACK);
    }
}
