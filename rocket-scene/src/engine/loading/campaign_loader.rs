use bevy::asset::LoadState;
use bevy::prelude::*;

use constants::paths::CAMPAIGN_FIGURES_PATH;

use crate::engine::assets::campaign::CampaignFigures;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct CampaignLoader {
    handle: Option<Handle<CampaignFigures>>,
}

pub fn start_campaign_load(
    mut campaign_loader: ResMut<CampaignLoader>,
    asset_server: Res<AssetServer>,
) {
    info!("Loading campaign figures from: {}", CAMPAIGN_FIGURES_PATH);
    campaign_loader.handle = Some(asset_server.load(CAMPAIGN_FIGURES_PATH));
}

/// Inserts the `CampaignFigures` resource once the file loads or fails.
pub fn resolve_campaign_figures(
    mut commands: Commands,
    campaign_loader: Res<CampaignLoader>,
    asset_server: Res<AssetServer>,
    campaigns: Res<Assets<CampaignFigures>>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    if loading_progress.campaign_resolved {
        return;
    }
    let Some(handle) = &campaign_loader.handle else {
        return;
    };

    let figures = match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            let Some(loaded) = campaigns.get(handle) else {
                return;
            };
            settle_figures(*loaded)
        }
        Some(LoadState::Failed(error)) => {
            warn!("Campaign figures unavailable ({error}), using built-in defaults");
            CampaignFigures::default()
        }
        _ => return,
    };

    info!(
        "Campaign: {:.0} raised of {:.0} goal ({:.2}%)",
        figures.raised,
        figures.goal,
        figures.percentage()
    );
    commands.insert_resource(figures);
    loading_progress.campaign_resolved = true;
}

fn settle_figures(loaded: CampaignFigures) -> CampaignFigures {
    loaded.validated().unwrap_or_else(|error| {
        warn!("Ignoring {}: {error}", CAMPAIGN_FIGURES_PATH);
        CampaignFigures::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetMetaCheck;
    use bevy_common_assets::json::JsonAssetPlugin;
    use std::time::Duration;

    #[test]
    fn valid_figures_are_kept() {
        let figures = CampaignFigures {
            goal: 5000.0,
            raised: 1250.0,
        };
        assert_eq!(settle_figures(figures), figures);
    }

    #[test]
    fn invalid_figures_fall_back_to_defaults() {
        let figures = CampaignFigures {
            goal: -3.0,
            raised: 1250.0,
        };
        assert_eq!(settle_figures(figures), CampaignFigures::default());
    }

    #[test]
    fn missing_campaign_file_resolves_to_defaults() {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin {
                file_path: "missing-assets".into(),
                meta_check: AssetMetaCheck::Never,
                ..default()
            },
            JsonAssetPlugin::<CampaignFigures>::new(&["json"]),
        ))
        .init_resource::<LoadingProgress>()
        .init_resource::<CampaignLoader>()
        .add_systems(Startup, start_campaign_load)
        .add_systems(Update, resolve_campaign_figures);

        for _ in 0..1_000 {
            app.update();
            if app.world().resource::<LoadingProgress>().campaign_resolved {
                break;
            }
            std::thread::sleep(Duration::from_millis(2));
        }

        assert!(app.world().resource::<LoadingProgress>().campaign_resolved);
        assert_eq!(
            *app.world().resource::<CampaignFigures>(),
            CampaignFigures::default()
        );
    }
}
