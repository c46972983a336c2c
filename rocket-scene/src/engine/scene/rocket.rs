use bevy::prelude::*;

use constants::rocket::{
    FALLBACK_CUBE_COLOUR, FALLBACK_CUBE_SIZE, POINTER_GAIN, ROCKET_BASE_TILT, ROCKET_SCALE,
    ROCKET_SPIN_PER_FRAME,
};

use crate::engine::input::pointer::PointerState;

/// Loaded rocket model. `yaw` accumulates the slow base spin.
#[derive(Component, Default)]
pub struct Rocket {
    pub yaw: f32,
}

/// Stand-in shown when the rocket model cannot be loaded. Does not animate.
#[derive(Component)]
pub struct FallbackCube;

/// Rotation around Z: resting tilt plus the vertical pointer offset.
pub fn rocket_tilt(pointer: Vec2) -> f32 {
    pointer.y * POINTER_GAIN + ROCKET_BASE_TILT
}

/// Rotation around X, following the horizontal pointer offset.
pub fn rocket_lean(pointer: Vec2) -> f32 {
    pointer.x * POINTER_GAIN
}

pub fn rocket_attitude(yaw: f32, pointer: Vec2) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rocket_lean(pointer),
        yaw,
        rocket_tilt(pointer),
    )
}

pub fn spawn_rocket(commands: &mut Commands, scene: Handle<Scene>) {
    commands.spawn((
        SceneRoot(scene),
        Transform::from_scale(Vec3::splat(ROCKET_SCALE))
            .with_rotation(Quat::from_rotation_z(ROCKET_BASE_TILT)),
        Rocket::default(),
    ));
}

pub fn spawn_fallback_cube(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: FALLBACK_CUBE_COLOUR,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_length(FALLBACK_CUBE_SIZE))),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        FallbackCube,
    ));
}

pub fn spin_rocket(
    pointer: Res<PointerState>,
    mut rockets: Query<(&mut Rocket, &mut Transform)>,
) {
    for (mut rocket, mut transform) in &mut rockets {
        rocket.yaw += ROCKET_SPIN_PER_FRAME;
        transform.rotation = rocket_attitude(rocket.yaw, pointer.position);
    }
}
