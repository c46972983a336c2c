//! Cosmetic fundraising progress bar.
//!
//! The animator is platform independent and emits a `ProgressFrame` whenever
//! the display changes. On the web the frames drive the page's DOM elements,
//! natively they drive a Bevy UI overlay.

use bevy::prelude::*;

pub mod animator;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(not(target_arch = "wasm32"))]
pub mod overlay;

use animator::{ProgressAnimator, ProgressFrame, animate_progress};

pub struct ProgressBarPlugin;

impl Plugin for ProgressBarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProgressAnimator>()
            .add_event::<ProgressFrame>()
            .add_systems(Update, animate_progress);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Update, dom::apply_progress_to_dom.after(animate_progress));

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(Startup, overlay::spawn_progress_overlay)
            .add_systems(
                Update,
                overlay::apply_progress_to_overlay.after(animate_progress),
            );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::engine::assets::campaign::CampaignFigures;
    use bevy::time::TimeUpdateStrategy;
    use constants::paths::{PROGRESS_AMOUNT_ID, PROGRESS_BAR_ID};
    use super::overlay::{ProgressAmountText, ProgressFill};
    use std::time::Duration;

    fn progress_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(20)))
            .add_plugins(ProgressBarPlugin);
        app
    }

    fn overlay_state(app: &mut App) -> (String, Val) {
        let mut texts = app
            .world_mut()
            .query_filtered::<&Text, With<ProgressAmountText>>();
        let text = texts.single(app.world()).unwrap().0.clone();
        let mut fills = app.world_mut().query_filtered::<&Node, With<ProgressFill>>();
        let width = fills.single(app.world()).unwrap().width;
        (text, width)
    }

    #[test]
    fn overlay_fills_to_campaign_percentage() {
        let mut app = progress_app();
        app.insert_resource(CampaignFigures::default());

        for _ in 0..200 {
            app.update();
        }

        assert!(app.world().resource::<ProgressAnimator>().is_finished());
        let (text, width) = overlay_state(&mut app);
        assert_eq!(text, "$420");
        let Val::Percent(percent) = width else {
            panic!("fill width should be a percentage, got {width:?}");
        };
        assert!((percent - 27.096_775).abs() < 1e-3);
    }

    #[test]
    fn overlay_waits_without_figures() {
        let mut app = progress_app();

        for _ in 0..100 {
            app.update();
        }

        let (text, width) = overlay_state(&mut app);
        assert_eq!(text, "$0");
        assert_eq!(width, Val::Percent(0.0));
        assert!(!app.world().resource::<ProgressAnimator>().is_finished());
    }

    const PAGE: &str = include_str!("../../index.html");

    #[test]
    fn page_markup_provides_progress_elements() {
        assert!(PAGE.contains(&format!("id=\"{PROGRESS_BAR_ID}\"")));
        assert!(PAGE.contains(&format!("id=\"{PROGRESS_AMOUNT_ID}\"")));
        assert!(PAGE.contains("<div id=\"canvas-container\"><canvas></canvas></div>"));
    }

    #[test]
    fn progress_markup_lets_the_pointer_through_to_the_canvas() {
        let rule = PAGE
            .lines()
            .find(|line| line.trim_start().starts_with(".progress {"))
            .expect("page styles the progress block");
        assert!(rule.contains("pointer-events: none"), "{rule}");
    }
}
