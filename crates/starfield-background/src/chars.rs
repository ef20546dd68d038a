//! Character constants for the terminal canvas.

/// Star glyphs from smallest to largest.
pub const STAR_CHARS: &[char] = &['·', '•', '*', '✦'];

/// Upper radius bound (exclusive) for each glyph in [`STAR_CHARS`] except the last.
pub const STAR_RADIUS_STEPS: &[f32] = &[0.5, 0.9, 1.2];

/// Trail glyph for mostly horizontal movement.
pub const TRAIL_HORIZONTAL: char = '─';
/// Trail glyph for mostly vertical movement.
pub const TRAIL_VERTICAL: char = '│';
/// Trail glyph for movement towards the bottom right or top left.
pub const TRAIL_FALLING: char = '╲';
/// Trail glyph for movement towards the top right or bottom left.
pub const TRAIL_RISING: char = '╱';
