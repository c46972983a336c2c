//! Asset type definitions loaded through the asset server.

/// Campaign figures driving the progress bar.
///
/// Deserialised from JSON, validated, and defaulted when unusable.
pub mod campaign;
