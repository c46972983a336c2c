/// Binary glTF holding the rocket model, relative to the asset root.
pub const ROCKET_MODEL_PATH: &str = "rocket.glb";

/// Optional campaign figures consumed by the progress bar.
pub const CAMPAIGN_FIGURES_PATH: &str = "campaign.json";

/// Canvas the renderer binds to on the web. Lives inside the page's render container.
pub const CANVAS_SELECTOR: &str = "#canvas-container canvas";

/// Element whose `style.width` is driven by the progress animator.
pub const PROGRESS_BAR_ID: &str = "progressBar";

/// Element whose text shows the animated amount raised.
pub const PROGRESS_AMOUNT_ID: &str = "progressAmount";
