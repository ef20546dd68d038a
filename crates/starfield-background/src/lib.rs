//! Starfield background animation.
//!
//! This crate owns the particle simulation (twinkling stars and shooting
//! stars), the spawn timer that paces new shooting stars, and a terminal
//! canvas that implements [`Surface`](starfield_core::Surface) so the
//! animation can be composited into a ratatui frame.

mod animations;
mod canvas;
mod chars;
mod spawn;
mod state;

pub use animations::shooting_star::{self, Edge, ShootingStar, TrailPoint};
pub use animations::sky;
pub use animations::star::{self, SizeTier, Star};
pub use canvas::{Cell, Glyph, SkyCanvas};
pub use spawn::SpawnTimer;
pub use state::{Animator, AnimatorSettings};
