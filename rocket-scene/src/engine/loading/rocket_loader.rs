use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use thiserror::Error;

use constants::paths::ROCKET_MODEL_PATH;

use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::rocket::{spawn_fallback_cube, spawn_rocket};

#[derive(Resource, Default)]
pub struct RocketLoader {
    handle: Option<Handle<Gltf>>,
    resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RocketLoadError {
    #[error("failed to load {path}: {reason}")]
    Asset { path: String, reason: String },
    #[error("{0} contains no scenes")]
    NoScene(String),
}

/// Emitted exactly once, when the rocket load either succeeds or fails.
#[derive(Event, Debug)]
pub struct RocketLoadOutcome(pub Result<Handle<Scene>, RocketLoadError>);

pub fn start_rocket_load(mut rocket_loader: ResMut<RocketLoader>, asset_server: Res<AssetServer>) {
    info!("Loading rocket model from: {}", ROCKET_MODEL_PATH);
    rocket_loader.handle = Some(asset_server.load(ROCKET_MODEL_PATH));
}

pub fn poll_rocket_load(
    mut rocket_loader: ResMut<RocketLoader>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut outcomes: EventWriter<RocketLoadOutcome>,
) {
    if rocket_loader.resolved {
        return;
    }
    let Some(handle) = rocket_loader.handle.as_ref() else {
        return;
    };

    let outcome = match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            let Some(gltf) = gltfs.get(handle) else {
                return;
            };
            select_scene(gltf)
        }
        Some(LoadState::Failed(error)) => Err(RocketLoadError::Asset {
            path: ROCKET_MODEL_PATH.to_string(),
            reason: error.to_string(),
        }),
        _ => return,
    };

    rocket_loader.resolved = true;
    outcomes.write(RocketLoadOutcome(outcome));
}

/// Prefer the file's default scene, otherwise its first one.
fn select_scene(gltf: &Gltf) -> Result<Handle<Scene>, RocketLoadError> {
    gltf.default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
        .ok_or_else(|| RocketLoadError::NoScene(ROCKET_MODEL_PATH.to_string()))
}

pub fn attach_rocket(
    mut commands: Commands,
    mut outcomes: EventReader<RocketLoadOutcome>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    for outcome in outcomes.read() {
        if loading_progress.rocket_resolved {
            continue;
        }

        match &outcome.0 {
            Ok(scene) => {
                spawn_rocket(&mut commands, scene.clone());
                info!("✓ Rocket model attached");
            }
            Err(error) => {
                error!("Error loading the rocket model: {error}");
                spawn_fallback_cube(&mut commands, &mut meshes, &mut materials);
                info!("Fallback cube attached");
            }
        }
        loading_progress.rocket_resolved = true;
    }
}
