use bevy::color::Color;

/// Number of stars generated at startup
pub const STAR_COUNT: usize = 10_000;

/// Stars are sampled uniformly inside a cube of this half extent
pub const STAR_FIELD_HALF_EXTENT: f32 = 50.0;

/// Radians added to the star field's X and Y rotation every frame
pub const STAR_SPIN_PER_FRAME: f32 = 0.0001;

pub const STAR_COLOUR: Color = Color::srgba(1.0, 1.0, 1.0, 0.9);
