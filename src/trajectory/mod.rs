//! Trajectory simulation module
//!
//! Owns the active pitch trajectories, applies selection changes and advances
//! every trajectory once per frame against the simulation clock.

use bevy::prelude::*;

pub mod kinematics;
pub mod resources;
pub mod systems;
pub mod types;

pub use resources::TrajectoryRegistry;
pub use systems::{advance_trajectories_system, apply_pitch_selection_system};
pub use types::{PitchSelection, Trajectory};

/// Per-frame ordering of the pitch simulation.
///
/// Selection and playback changes are applied before the advancement pass, and
/// the renderer only reads trajectories after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PitchSystems {
    /// UI and keyboard input turned into messages
    Input,
    /// Messages applied to the registry and clock
    Apply,
    /// Clock tick and trajectory advancement
    Advance,
    /// Render handoff
    Present,
}

/// Plugin for trajectory simulation
pub struct TrajectoryPlugin;

impl Plugin for TrajectoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrajectoryRegistry>()
            .add_message::<PitchSelection>()
            .configure_sets(
                Update,
                (
                    PitchSystems::Input,
                    PitchSystems::Apply,
                    PitchSystems::Advance,
                    PitchSystems::Present,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    apply_pitch_selection_system.in_set(PitchSystems::Apply),
                    advance_trajectories_system.in_set(PitchSystems::Advance),
                ),
            );
    }
}
