use bevy::prelude::*;
use bevy::window::WindowResized;

use constants::render_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_POSITION};

#[derive(Component)]
pub struct SceneCamera;

pub fn scene_projection() -> PerspectiveProjection {
    PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    }
}

pub fn spawn_scene_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(scene_projection()),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        SceneCamera,
    ));
}

/// Width over height, or `None` for a collapsed surface.
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    (width > 0.0 && height > 0.0).then(|| width / height)
}

/// Keeps the projection in step with the render surface after a resize.
pub fn resize_viewport(
    mut resize_events: EventReader<WindowResized>,
    mut cameras: Query<&mut Projection, With<SceneCamera>>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };
    let Some(aspect) = aspect_ratio(resized.width, resized.height) else {
        return;
    };

    for mut projection in &mut cameras {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }
    debug!(
        "Viewport resized to {}x{}, aspect {:.3}",
        resized.width, resized.height, aspect
    );
}
