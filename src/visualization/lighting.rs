//! Scene lighting

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::core::coordinates::PLATE_DEPTH;

/// Marker component for the key light
#[derive(Component)]
pub struct KeyLight;

/// Marker component for the light hanging over home plate
#[derive(Component)]
pub struct PlateLight;

/// Spawn ambient, key and plate lights
pub fn spawn_lights(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: 400.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        KeyLight,
        Transform::from_xyz(-10.0, 15.0, -25.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            intensity: 150_000.0,
            range: 100.0,
            ..default()
        },
        PlateLight,
        Transform::from_xyz(0.0, 3.0, PLATE_DEPTH),
    ));
}
