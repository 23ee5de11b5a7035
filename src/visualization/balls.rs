//! Pitch ball entities: spawned per active pitch type, posed from the registry

use bevy::mesh::VertexAttributeValues;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::trajectory::TrajectoryRegistry;
use crate::visualization::colors::{pitch_color, two_tone_vertex_colors};
use crate::visualization::config::BallRenderConfig;

/// Rendered ball. Holds only the key of the trajectory it displays.
#[derive(Component, Debug, Clone)]
pub struct PitchBall {
    pub pitch_type: String,
}

/// Ball entity per active pitch type
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct BallEntities(pub HashMap<String, Entity>);

/// Build a two-tone sphere for a pitch type
pub fn build_ball_mesh(config: &BallRenderConfig, pitch_type: &str) -> Mesh {
    let mut mesh = Sphere::new(config.radius)
        .mesh()
        .uv(config.sectors, config.stacks);

    let colors = match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(positions)) => {
            Some(two_tone_vertex_colors(positions, pitch_color(pitch_type)))
        }
        _ => None,
    };
    match colors {
        Some(colors) => mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors),
        None => warn!(
            "Ball mesh for {} has no float positions; leaving it untinted",
            pitch_type
        ),
    }
    mesh
}

/// System to spawn ball entities for trajectories that don't have them yet
pub fn spawn_missing_balls_system(
    registry: Res<TrajectoryRegistry>,
    config: Res<BallRenderConfig>,
    mut balls: ResMut<BallEntities>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for trajectory in registry.iter() {
        if balls.contains_key(trajectory.pitch_type()) {
            continue;
        }

        let pitch_type = trajectory.pitch_type().to_string();
        let entity = commands
            .spawn((
                Mesh3d(meshes.add(build_ball_mesh(&config, &pitch_type))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::WHITE,
                    perceptual_roughness: config.roughness,
                    metallic: config.metallic,
                    ..default()
                })),
                Transform::from_translation(trajectory.position())
                    .with_rotation(trajectory.orientation()),
                PitchBall {
                    pitch_type: pitch_type.clone(),
                },
                Name::new(format!("Pitch {}", pitch_type)),
            ))
            .id();
        balls.insert(pitch_type, entity);
    }
}

/// System to despawn ball entities whose pitch type was deselected
pub fn despawn_removed_balls_system(
    registry: Res<TrajectoryRegistry>,
    mut balls: ResMut<BallEntities>,
    mut commands: Commands,
) {
    balls.retain(|pitch_type, entity| {
        if registry.contains(pitch_type) {
            return true;
        }
        commands.entity(*entity).despawn();
        false
    });
}

/// System to copy each trajectory's current pose onto its ball
pub fn sync_ball_transforms_system(
    registry: Res<TrajectoryRegistry>,
    mut q: Query<(&PitchBall, &mut Transform)>,
) {
    for (ball, mut transform) in q.iter_mut() {
        if let Some(trajectory) = registry.get(&ball.pitch_type) {
            transform.translation = trajectory.position();
            transform.rotation = trajectory.orientation();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_mesh_has_one_color_per_vertex() {
        let config = BallRenderConfig::default();
        let mesh = build_ball_mesh(&config, "CH");
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .expect("positions")
            .len();
        let colors = mesh.attribute(Mesh::ATTRIBUTE_COLOR).expect("colors").len();
        assert!(positions > 0);
        assert_eq!(positions, colors);
    }
}
