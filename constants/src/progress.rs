use bevy::color::Color;

/// Fundraising goal used when no campaign file is available
pub const DEFAULT_CAMPAIGN_GOAL: f64 = 1550.0;

/// Placeholder amount raised. Edit `campaign.json` rather than this value.
pub const DEFAULT_CAMPAIGN_RAISED: f64 = 420.0;

/// Wait after startup before the bar starts filling
pub const PROGRESS_START_DELAY_MS: u64 = 500;

/// Interval between counter increments
pub const PROGRESS_TICK_MS: u64 = 10;

/// The counter reaches the raised amount after this many ticks
pub const PROGRESS_TICK_COUNT: f64 = 100.0;

/// Native overlay track behind the fill
pub const PROGRESS_TRACK_COLOUR: Color = Color::srgba(1.0, 1.0, 1.0, 0.15);

/// Native overlay fill
pub const PROGRESS_FILL_COLOUR: Color = Color::srgb(0.0, 0.6667, 1.0);

pub const PROGRESS_TEXT_SIZE: f32 = 20.0;
