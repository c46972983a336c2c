//! Compile-time settings shared by the rocket scene.

pub mod paths;
pub mod progress;
pub mod render_settings;
pub mod rocket;
pub mod starfield;
