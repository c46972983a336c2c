use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;
use rand::Rng;

use constants::starfield::{
    STAR_COLOUR, STAR_COUNT, STAR_FIELD_HALF_EXTENT, STAR_SPIN_PER_FRAME,
};

/// Star point cloud. The positions never change, only the accumulated rotation.
#[derive(Component, Default)]
pub struct StarField {
    pub pitch: f32,
    pub yaw: f32,
}

/// Uniformly samples `count` positions inside the cube `[-half_extent, half_extent]^3`.
pub fn generate_star_positions<R: Rng>(
    rng: &mut R,
    count: usize,
    half_extent: f32,
) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-half_extent..=half_extent),
                rng.gen_range(-half_extent..=half_extent),
                rng.gen_range(-half_extent..=half_extent),
            ]
        })
        .collect()
}

pub fn create_star_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

pub fn spawn_star_field<R: Rng>(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    rng: &mut R,
) {
    let positions = generate_star_positions(rng, STAR_COUNT, STAR_FIELD_HALF_EXTENT);

    let star_material = materials.add(StandardMaterial {
        base_color: STAR_COLOUR,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(create_star_mesh(positions))),
        MeshMaterial3d(star_material),
        Transform::IDENTITY,
        Visibility::Visible,
        // The field surrounds the camera, culling by its bounds gains nothing.
        NoFrustumCulling,
        StarField::default(),
    ));

    info!("Star field spawned with {} points", STAR_COUNT);
}

pub fn spin_stars(mut stars: Query<(&mut StarField, &mut Transform)>) {
    for (mut field, mut transform) in &mut stars {
        field.pitch += STAR_SPIN_PER_FRAME;
        field.yaw += STAR_SPIN_PER_FRAME;
        transform.rotation = Quat::from_euler(EulerRot::XYZ, field.pitch, field.yaw, 0.0);
    }
}
