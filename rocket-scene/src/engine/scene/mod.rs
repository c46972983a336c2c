//! Scene contents and their per-frame animation.
//!
//! Provides the lights, the procedurally generated star field and the
//! rocket (or its fallback cube) along with the systems that spin them.

/// Ambient and directional lighting.
pub mod lighting;

/// Rocket and fallback cube spawning plus pointer-driven rocket attitude.
pub mod rocket;

/// Star point cloud generation and slow rotation.
pub mod starfield;
