//! Asset loading for the rocket model and campaign figures.
//!
//! Each load is requested once at startup and polled every frame until it
//! resolves, either to the loaded asset or to its fallback.

/// Campaign figures loading with validation and default fallback.
pub mod campaign_loader;

/// Loading progress tracking resource.
///
/// Records which loads have resolved and reports once all of them have.
pub mod progress;

/// Rocket glTF loading and fallback handling.
///
/// Turns the asset server's load state into a single outcome event, then
/// attaches the rocket or the fallback cube.
pub mod rocket_loader;
