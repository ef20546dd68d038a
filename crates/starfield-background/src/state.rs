//! Starfield animation state management.

use rand::rngs::StdRng;
use starfield_core::{Dimensions, Point, PointerState, Surface};

use crate::animations::shooting_star::{self, ShootingStar};
use crate::animations::sky;
use crate::animations::star::{self, Star};
use crate::spawn::SpawnTimer;

/// Initialization-time parameters for an [`Animator`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorSettings {
    /// Number of stars allocated at startup.
    pub star_count: usize,
    /// Distance within which the pointer boosts stars.
    pub influence_radius: f32,
    /// Shortest delay between spawn timer firings.
    pub spawn_interval_min_ms: u64,
    /// Longest delay between spawn timer firings.
    pub spawn_interval_max_ms: u64,
    /// Chance that a firing creates a shooting star.
    pub spawn_probability: f64,
    /// Shooting stars created at startup.
    pub initial_burst: usize,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            star_count: 3000,
            influence_radius: 150.0,
            spawn_interval_min_ms: 2000,
            spawn_interval_max_ms: 5000,
            spawn_probability: 0.25,
            initial_burst: 3,
        }
    }
}

/// The starfield: a fixed pool of stars and a changing pool of shooting stars.
#[derive(Debug)]
pub struct Animator {
    settings: AnimatorSettings,
    /// Star states, in creation order.
    stars: Vec<Star>,
    /// Live shooting stars.
    shooting_stars: Vec<ShootingStar>,
    /// Last pointer position seen.
    pointer: PointerState,
    /// Current surface size.
    dimensions: Dimensions,
    spawner: SpawnTimer,
    rng: StdRng,
    /// Cleared by [`Animator::teardown`].
    active: bool,
}

impl Animator {
    /// Create a starfield for a surface of `dimensions`.
    ///
    /// Returns `None` when the surface has no area; the background is then
    /// simply not drawn.
    pub fn new(settings: AnimatorSettings, dimensions: Dimensions, mut rng: StdRng) -> Option<Self> {
        if dimensions.is_empty() {
            log::warn!(
                "surface is {}x{}, starfield disabled",
                dimensions.width,
                dimensions.height
            );
            return None;
        }

        let stars = (0..settings.star_count)
            .map(|_| Star::random(dimensions, &mut rng))
            .collect();
        let shooting_stars = (0..settings.initial_burst)
            .map(|_| ShootingStar::random(dimensions, &mut rng))
            .collect();
        let spawner = SpawnTimer::new(
            settings.spawn_interval_min_ms,
            settings.spawn_interval_max_ms,
            settings.spawn_probability,
        );

        log::info!(
            "starfield initialized: {} stars, {} shooting stars, surface {}x{}",
            settings.star_count,
            settings.initial_burst,
            dimensions.width,
            dimensions.height
        );

        Some(Self {
            settings,
            stars,
            shooting_stars,
            pointer: PointerState::default(),
            dimensions,
            spawner,
            rng,
            active: true,
        })
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }

    pub fn pointer(&self) -> Point {
        self.pointer.position
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Add a shooting star directly, bypassing the spawn timer.
    pub fn launch(&mut self, shooting_star: ShootingStar) {
        if self.active {
            self.shooting_stars.push(shooting_star);
        }
    }

    /// Record a pointer move, in surface coordinates.
    pub fn on_pointer_move(&mut self, position: Point) {
        if self.active {
            self.pointer.position = position;
        }
    }

    /// Record a new surface size. Existing stars keep their positions.
    pub fn on_resize(&mut self, dimensions: Dimensions) {
        if !self.active {
            return;
        }
        log::debug!(
            "surface resized {}x{} -> {}x{}",
            self.dimensions.width,
            self.dimensions.height,
            dimensions.width,
            dimensions.height
        );
        self.dimensions = dimensions;
    }

    /// Advance the animation by one frame and paint it onto `surface`.
    ///
    /// `now_ms` is the time since the animation started, used to pace the
    /// spawn timer.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: u64) {
        if !self.active {
            return;
        }

        if self.spawner.poll(now_ms, &mut self.rng) {
            let spawned = ShootingStar::random(self.dimensions, &mut self.rng);
            log::debug!(
                "shooting star from {:?} at ({:.0}, {:.0})",
                spawned.edge,
                spawned.position.x,
                spawned.position.y
            );
            self.shooting_stars.push(spawned);
        }

        sky::draw(surface);

        let pointer = self.pointer.position;
        for s in &mut self.stars {
            star::update(s, pointer, self.settings.influence_radius, &mut self.rng);
            star::draw(s, surface);
        }

        // Reverse order so removals don't shift the stars still to visit.
        for i in (0..self.shooting_stars.len()).rev() {
            let s = &mut self.shooting_stars[i];
            shooting_star::update(s, self.dimensions);
            shooting_star::draw(s, surface);
            if s.is_dead {
                self.shooting_stars.remove(i);
            }
        }
    }

    /// Stop the animation. Later ticks, pointer moves and resizes are ignored
    /// and the spawn timer never fires again.
    pub fn teardown(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.spawner.cancel();
        log::info!("starfield torn down");
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.teardown();
    }
}
