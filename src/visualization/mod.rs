//! Visualization module
//!
//! Field geometry, lights and the pitch balls that mirror the trajectory
//! registry every frame.

use bevy::prelude::*;

pub mod balls;
pub mod colors;
pub mod config;
pub mod field;
pub mod lighting;

pub use colors::pitch_color;
pub use config::FieldConfig;

use balls::BallEntities;
use config::BallRenderConfig;

use crate::trajectory::PitchSystems;

/// Plugin for visualization systems
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BallRenderConfig>()
            .init_resource::<FieldConfig>()
            .init_resource::<BallEntities>()
            .add_systems(Startup, (field::spawn_field, lighting::spawn_lights))
            .add_systems(
                Update,
                (
                    (
                        balls::despawn_removed_balls_system,
                        balls::spawn_missing_balls_system,
                        balls::sync_ball_transforms_system,
                    )
                        .chain()
                        .in_set(PitchSystems::Present),
                    field::draw_strike_zone,
                ),
            );
    }
}
