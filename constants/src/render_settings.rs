use bevy::color::Color;
use bevy::math::Vec3;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

pub const AMBIENT_LIGHT_COLOUR: Color = Color::WHITE;
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 400.0;

pub const DIRECTIONAL_LIGHT_COLOUR: Color = Color::WHITE;
pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 6_000.0;
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
