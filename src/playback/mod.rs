//! Playback control module
//!
//! Owns the simulation clock and the global play/pause state.

use bevy::prelude::*;

pub mod clock;
pub mod state;

pub use clock::{SimulationClock, advance_simulation_clock};
pub use state::{PlaybackState, TogglePlayback};

use crate::trajectory::{PitchSystems, advance_trajectories_system};

/// Plugin for the simulation clock and play/pause handling
pub struct PlaybackPlugin;

impl Plugin for PlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .init_resource::<PlaybackState>()
            .add_message::<TogglePlayback>()
            .add_systems(
                Update,
                (
                    state::apply_playback_toggle_system.in_set(PitchSystems::Apply),
                    advance_simulation_clock
                        .in_set(PitchSystems::Advance)
                        .before(advance_trajectories_system),
                ),
            );
    }
}
