//! Pitch data systems (request + apply).

use crate::pitch::fetcher::start_pitch_worker;
use crate::pitch::types::{
    LoadCommand, LoadResult, LoadStatus, PitchCatalog, PitchChannels, PitchSourceConfig,
};
use bevy::prelude::*;

/// Setup system to start the loader worker
pub fn setup_pitch_worker(mut commands: Commands) {
    let channels = start_pitch_worker();
    println!("[INIT] Pitch loader worker started");
    commands.insert_resource(channels);
}

/// Queue the initial catalog load
pub fn request_pitch_catalog(
    config: Res<PitchSourceConfig>,
    mut catalog: ResMut<PitchCatalog>,
    channels: Option<Res<PitchChannels>>,
) {
    let Some(channels) = channels else {
        catalog.status = LoadStatus::Failed("pitch loader not available".to_string());
        return;
    };

    catalog.source = Some(config.source.to_string());
    match channels.cmd_tx.send(LoadCommand::Load(config.source.clone())) {
        Ok(()) => {
            info!("Requesting pitch data from {}", config.source);
            catalog.status = LoadStatus::Loading;
        }
        Err(err) => {
            error!("Failed to queue pitch data load: {}", err);
            catalog.status = LoadStatus::Failed(format!("Failed to queue load: {}", err));
        }
    }
}

/// Drain loader results into the catalog
pub fn apply_pitch_results(
    mut catalog: ResMut<PitchCatalog>,
    channels: Option<Res<PitchChannels>>,
) {
    let Some(channels) = channels else { return };
    let Ok(guard) = channels.res_rx.lock() else {
        return;
    };

    while let Ok(msg) = guard.try_recv() {
        apply_load_result(&mut catalog, msg);
    }
}

/// Fold one loader result into the catalog.
///
/// A failed load leaves any previously loaded pitches untouched.
pub fn apply_load_result(catalog: &mut PitchCatalog, msg: LoadResult) {
    match msg {
        LoadResult::Loaded {
            catalog: pitches,
            source,
            loaded_utc,
        } => {
            info!(
                "Loaded {} pitch types from {}: {}",
                pitches.len(),
                source,
                pitches.keys().cloned().collect::<Vec<_>>().join(", ")
            );
            catalog.pitches = pitches;
            catalog.source = Some(source);
            catalog.loaded_utc = Some(loaded_utc);
            catalog.status = LoadStatus::Loaded;
        }
        LoadResult::Failed { source, error } => {
            error!("Pitch data from {} rejected: {}", source, error);
            catalog.source = Some(source);
            catalog.status = LoadStatus::Failed(error);
        }
    }
}
