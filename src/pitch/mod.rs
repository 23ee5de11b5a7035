//! Pitch data management module
//!
//! Loads the per pitch type release parameters from a local file or URL on a
//! background worker and exposes them as the [`PitchCatalog`] resource.

use bevy::prelude::*;

pub mod fetcher;
pub mod parser;
pub mod systems;
pub mod types;

pub use types::{LoadStatus, PitchCatalog, PitchParameters};

use types::PitchSourceConfig;

/// Plugin for pitch data loading
pub struct PitchDataPlugin;

impl Plugin for PitchDataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PitchSourceConfig>()
            .init_resource::<PitchCatalog>()
            .add_systems(
                Startup,
                (systems::setup_pitch_worker, systems::request_pitch_catalog).chain(),
            )
            .add_systems(Update, systems::apply_pitch_results);
    }
}
