use bevy::asset::AssetMetaCheck;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::campaign::CampaignFigures;
use crate::engine::camera::scene_camera::{resize_viewport, spawn_scene_camera};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::pointer::{PointerState, track_pointer};
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::rocket::spin_rocket;
use crate::engine::scene::starfield::{spawn_star_field, spin_stars};
// Loading
use crate::engine::loading::campaign_loader::{
    CampaignLoader, resolve_campaign_figures, start_campaign_load,
};
use crate::engine::loading::progress::{LoadingProgress, report_loading_complete};
use crate::engine::loading::rocket_loader::{
    RocketLoadOutcome, RocketLoader, attach_rocket, poll_rocket_load, start_rocket_load,
};
// Progress bar
use crate::progress::ProgressBarPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        // Registers CampaignFigures as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<CampaignFigures>::new(&["json"]))
        .add_plugins(ProgressBarPlugin)
        .insert_resource(ClearColor(Color::NONE));

    app.init_resource::<PointerState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<RocketLoader>()
        .init_resource::<CampaignLoader>()
        .add_event::<RocketLoadOutcome>();

    app.add_systems(
        Startup,
        (setup, (start_rocket_load, start_campaign_load)).chain(),
    )
    .add_systems(
        Update,
        (
            // Loading systems, each resolves once
            (poll_rocket_load, attach_rocket).chain(),
            resolve_campaign_figures,
            report_loading_complete,
        )
            .chain(),
    )
    .add_systems(
        Update,
        (
            // Frame loop
            (track_pointer, spin_rocket).chain(),
            spin_stars,
            resize_viewport,
        ),
    );

    app
}

// Startup system that builds the static part of the scene
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("=== ROCKET SCENE ===");

    spawn_lighting(&mut commands);
    spawn_scene_camera(&mut commands);
    spawn_star_field(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut rand::thread_rng(),
    );
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        level: Level::INFO,
        filter: "wgpu=error,naga=warn".into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
