//! Core types shared by the starfield crates.
//!
//! Colors, geometry and the [`Surface`] drawing trait live here so the
//! animation and the terminal canvas can agree on them without depending on
//! each other.

mod color;
mod geometry;
mod surface;

pub use color::{Rgb, Rgba};
pub use geometry::{Dimensions, Point, PointerState};
pub use surface::{GradientStop, Surface};
