use bevy::color::Color;

pub const ROCKET_SCALE: f32 = 0.5;

/// Resting tilt around Z, applied on load and kept as the pointer offset baseline.
pub const ROCKET_BASE_TILT: f32 = std::f32::consts::FRAC_PI_6;

/// Radians added to the rocket's yaw every frame.
pub const ROCKET_SPIN_PER_FRAME: f32 = 0.001;

/// Scales normalised pointer coordinates into rotation offsets.
pub const POINTER_GAIN: f32 = 0.2;

/// Edge length of the cube shown when the rocket model fails to load.
pub const FALLBACK_CUBE_SIZE: f32 = 1.0;

/// #00aaff
pub const FALLBACK_CUBE_COLOUR: Color = Color::srgb(0.0, 0.6667, 1.0);
