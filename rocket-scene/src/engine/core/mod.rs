//! Core application setup.
//!
//! Handles plugin initialisation, logging and window configuration for both
//! native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the scene loop, asset loading systems and the
/// progress bar.
pub mod app_setup;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
