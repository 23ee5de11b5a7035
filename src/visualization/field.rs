//! Static field geometry: ground, home plate and strike zone

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::core::coordinates::{
    HOME_PLATE_LIFT, HOME_PLATE_OUTLINE, PLATE_DEPTH, STRIKE_ZONE_CENTER, STRIKE_ZONE_SIZE,
};
use crate::visualization::config::FieldConfig;

/// Marker for the ground plane
#[derive(Component)]
pub struct Ground;

/// Marker for home plate
#[derive(Component)]
pub struct HomePlate;

/// Flat pentagon in the XZ plane, point facing the camera (-Z), normal +Y.
pub fn home_plate_mesh() -> Mesh {
    let positions: Vec<[f32; 3]> = HOME_PLATE_OUTLINE
        .iter()
        .map(|&(x, back)| [x, 0.0, -back])
        .collect();
    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];
    let uvs: Vec<[f32; 2]> = HOME_PLATE_OUTLINE
        .iter()
        .map(|&(x, back)| [(x + 0.85) / 1.7, back])
        .collect();

    // Convex outline: fan from the first corner.
    let indices: Vec<u32> = (1..positions.len() as u32 - 1)
        .flat_map(|i| [0, i, i + 1])
        .collect();

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_indices(Indices::U32(indices));
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh
}

/// Spawn ground and home plate
pub fn spawn_field(
    config: Res<FieldConfig>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(
            Plane3d::default()
                .mesh()
                .size(config.ground_size, config.ground_size),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: config.ground_color,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::IDENTITY,
        Ground,
        Name::new("Ground"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(home_plate_mesh())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: config.plate_color,
            perceptual_roughness: 0.6,
            ..default()
        })),
        Transform::from_xyz(0.0, HOME_PLATE_LIFT, PLATE_DEPTH),
        HomePlate,
        Name::new("Home Plate"),
    ));
}

/// Draw the strike zone outline on the plate plane
pub fn draw_strike_zone(mut gizmos: Gizmos, config: Res<FieldConfig>) {
    if !config.show_strike_zone {
        return;
    }
    let (width, height) = STRIKE_ZONE_SIZE;
    gizmos.rect(
        Isometry3d::from_translation(STRIKE_ZONE_CENTER),
        Vec2::new(width, height),
        config.strike_zone_color,
    );
}
