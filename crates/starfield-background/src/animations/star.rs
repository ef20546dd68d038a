//! Twinkling background stars (stateful).

use std::ops::Range;

use rand::Rng;
use starfield_core::{Dimensions, Point, Rgb, Rgba, Surface};

/// Lowest opacity a star fades to before brightening again.
pub const OPACITY_FLOOR: f32 = 0.1;

/// Stars larger than this get a radial glow.
pub const GLOW_THRESHOLD: f32 = 1.7;

/// Glow radius as a multiple of the star size.
const GLOW_SCALE: f32 = 3.0;

/// Chance per frame of a tiny positional jitter.
const SHIMMER_CHANCE: f64 = 0.001;

/// Maximum jitter per axis, in surface pixels.
const SHIMMER_AMOUNT: f32 = 0.1;

/// Size boost at the pointer position (+30%).
const POINTER_SIZE_BOOST: f32 = 0.3;

/// Max-opacity boost at the pointer position (+80%).
const POINTER_OPACITY_BOOST: f32 = 0.8;

const STAR_COLOR: Rgb = Rgb::WHITE;

/// Brightness class a star is generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Dim,
    Medium,
    Bright,
}

impl SizeTier {
    /// Pick a tier: 80% dim, 15% medium, 5% bright.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll: f32 = rng.gen_range(0.0..1.0);
        if roll < 0.8 {
            SizeTier::Dim
        } else if roll < 0.95 {
            SizeTier::Medium
        } else {
            SizeTier::Bright
        }
    }

    /// Radius range for stars of this tier.
    pub fn size_range(self) -> Range<f32> {
        match self {
            SizeTier::Dim => 0.2..0.6,
            SizeTier::Medium => 0.6..0.9,
            SizeTier::Bright => 0.9..1.1,
        }
    }
}

/// State for a single star.
#[derive(Debug, Clone)]
pub struct Star {
    /// Position in surface pixels.
    pub position: Point,
    /// Tier the size was drawn from.
    pub tier: SizeTier,
    /// Radius without pointer influence.
    pub original_size: f32,
    /// Radius used for drawing this frame.
    pub size: f32,
    /// Opacity ceiling without pointer influence.
    pub original_max_opacity: f32,
    /// Opacity ceiling this frame.
    pub max_opacity: f32,
    /// Current opacity.
    pub opacity: f32,
    /// +1.0 while brightening, -1.0 while fading.
    pub fade_direction: f32,
    /// Opacity change per frame.
    pub fade_speed: f32,
    /// Generated alongside the fade speed but not used by the twinkle.
    pub twinkle_speed: f32,
    /// Color with the current opacity applied.
    pub color: Rgba,
}

impl Star {
    /// Generate a random star somewhere within `dimensions`.
    pub fn random<R: Rng + ?Sized>(dimensions: Dimensions, rng: &mut R) -> Self {
        let position = Point::new(
            rng.gen_range(0.0..1.0_f32) * dimensions.width,
            rng.gen_range(0.0..1.0_f32) * dimensions.height,
        );
        let tier = SizeTier::roll(rng);
        let size = rng.gen_range(tier.size_range());
        let max_opacity: f32 = rng.gen_range(0.5..1.0);
        let opacity = rng.gen_range(0.0..1.0_f32) * max_opacity;

        Self {
            position,
            tier,
            original_size: size,
            size,
            original_max_opacity: max_opacity,
            max_opacity,
            opacity,
            fade_direction: if rng.gen_bool(0.5) { -1.0 } else { 1.0 },
            fade_speed: rng.gen_range(0.001..0.006),
            twinkle_speed: rng.gen_range(0.001..0.003),
            color: STAR_COLOR.with_opacity(opacity),
        }
    }
}

/// Advance one star by a frame.
pub fn update<R: Rng + ?Sized>(star: &mut Star, pointer: Point, influence_radius: f32, rng: &mut R) {
    if rng.gen_bool(SHIMMER_CHANCE) {
        star.position.x += rng.gen_range(-SHIMMER_AMOUNT..SHIMMER_AMOUNT);
        star.position.y += rng.gen_range(-SHIMMER_AMOUNT..SHIMMER_AMOUNT);
    }

    let distance = star.position.distance(pointer);
    if distance < influence_radius {
        let influence = 1.0 - distance / influence_radius;
        star.size = star.original_size * (1.0 + influence * POINTER_SIZE_BOOST);
        star.max_opacity =
            (star.original_max_opacity * (1.0 + influence * POINTER_OPACITY_BOOST)).min(1.0);
    } else {
        star.size = star.original_size;
        star.max_opacity = star.original_max_opacity;
    }

    star.opacity += star.fade_direction * star.fade_speed;
    if star.opacity <= OPACITY_FLOOR {
        star.opacity = OPACITY_FLOOR;
        star.fade_direction = 1.0;
    } else if star.opacity >= star.max_opacity {
        star.opacity = star.max_opacity;
        star.fade_direction = -1.0;
    }

    star.color = star.color.with_opacity(star.opacity);
}

/// Paint one star.
pub fn draw<S: Surface + ?Sized>(star: &Star, surface: &mut S) {
    surface.fill_circle(star.position, star.size, star.color);

    if star.size > GLOW_THRESHOLD {
        surface.fill_radial_glow(star.position, star.size * GLOW_SCALE, star.color);
    }
}
