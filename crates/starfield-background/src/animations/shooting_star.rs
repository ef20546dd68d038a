//! Shooting stars with fading trails (stateful).

use std::collections::VecDeque;
use std::f32::consts::{FRAC_PI_2, PI};

use rand::Rng;
use starfield_core::{Dimensions, Point, Rgb, Surface};

/// How far past the surface edge a shooting star travels before it dies.
pub const DEATH_MARGIN: f32 = 100.0;

/// Random spread applied to the inward angle, in radians (about 14 degrees).
const ANGLE_JITTER: f32 = 0.25;

/// Stroke width of the trail at the head.
const TRAIL_WIDTH: f32 = 0.5;

const HEAD_RADIUS: f32 = 0.5;
const HEAD_GLOW_RADIUS: f32 = 3.0;

const STREAK_COLOR: Rgb = Rgb::WHITE;

/// Surface edge a shooting star enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Direction pointing straight into the surface from this edge.
    pub fn inward_angle(self) -> f32 {
        match self {
            Edge::Top => FRAC_PI_2,
            Edge::Right => PI,
            Edge::Bottom => -FRAC_PI_2,
            Edge::Left => 0.0,
        }
    }
}

/// A recorded position on a shooting star's trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub position: Point,
    pub opacity: f32,
}

/// State for a single shooting star.
#[derive(Debug, Clone)]
pub struct ShootingStar {
    /// Current head position.
    pub position: Point,
    /// Edge it entered from.
    pub edge: Edge,
    /// Direction of travel in radians.
    pub angle: f32,
    /// Distance travelled per frame.
    pub speed: f32,
    /// Past positions, newest first.
    pub trail: VecDeque<TrailPoint>,
    /// Maximum number of trail points.
    pub length: f32,
    /// Opacity of the head.
    pub opacity: f32,
    pub is_dead: bool,
}

impl ShootingStar {
    /// Spawn from a random edge.
    pub fn random<R: Rng + ?Sized>(dimensions: Dimensions, rng: &mut R) -> Self {
        let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
        Self::from_edge(edge, dimensions, rng)
    }

    /// Spawn on `edge` at a random point along it.
    pub fn from_edge<R: Rng + ?Sized>(edge: Edge, dimensions: Dimensions, rng: &mut R) -> Self {
        let along_x = rng.gen_range(0.0..1.0_f32) * dimensions.width;
        let along_y = rng.gen_range(0.0..1.0_f32) * dimensions.height;
        let position = match edge {
            Edge::Top => Point::new(along_x, 0.0),
            Edge::Right => Point::new(dimensions.width, along_y),
            Edge::Bottom => Point::new(along_x, dimensions.height),
            Edge::Left => Point::new(0.0, along_y),
        };
        let angle = edge.inward_angle() + rng.gen_range(-ANGLE_JITTER..ANGLE_JITTER);

        Self {
            position,
            edge,
            angle,
            speed: rng.gen_range(15.0..20.0),
            trail: VecDeque::new(),
            length: rng.gen_range(20.0..60.0),
            opacity: rng.gen_range(0.15..0.40),
            is_dead: false,
        }
    }

    /// The newest trail point, if the star has moved at least once.
    pub fn head(&self) -> Option<&TrailPoint> {
        self.trail.front()
    }
}

/// Advance one shooting star by a frame.
pub fn update(star: &mut ShootingStar, dimensions: Dimensions) {
    star.position.x += star.angle.cos() * star.speed;
    star.position.y += star.angle.sin() * star.speed;

    star.trail.push_front(TrailPoint {
        position: star.position,
        opacity: star.opacity,
    });
    while star.trail.len() as f32 > star.length {
        star.trail.pop_back();
    }

    let count = star.trail.len() as f32;
    for (i, point) in star.trail.iter_mut().enumerate() {
        point.opacity = star.opacity * (1.0 - i as f32 / count);
    }

    if dimensions.is_beyond(star.position, DEATH_MARGIN) {
        star.is_dead = true;
    }
}

/// Paint the trail and head of one shooting star.
pub fn draw<S: Surface + ?Sized>(star: &ShootingStar, surface: &mut S) {
    let count = star.trail.len() as f32;
    for (i, (point, next)) in star.trail.iter().zip(star.trail.iter().skip(1)).enumerate() {
        let width = TRAIL_WIDTH * (1.0 - i as f32 / count);
        surface.stroke_line(
            point.position,
            next.position,
            width,
            STREAK_COLOR.with_opacity(point.opacity),
            STREAK_COLOR.with_opacity(next.opacity),
        );
    }

    if let Some(head) = star.head() {
        let color = STREAK_COLOR.with_opacity(star.opacity);
        surface.fill_circle(head.position, HEAD_RADIUS, color);
        surface.fill_radial_glow(head.position, HEAD_GLOW_RADIUS, color);
    }
}
