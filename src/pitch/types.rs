//! Pitch data types and communication structures

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{
    Arc, Mutex,
    mpsc::{Receiver, Sender},
};

/// Environment variable that overrides where pitch data is loaded from.
pub const PITCH_DATA_ENV: &str = "PITCH_DATA";

/// File name looked up in the asset folder and the platform data directory.
pub const PITCH_DATA_FILE: &str = "pitch_data.json";

/// Averaged release parameters for one pitch type, in the recorded frame.
///
/// Units are feet, seconds and rpm. The spin axis is an angle in degrees.
/// Every field is optional; absent values fall back to zero when a trajectory
/// is built.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PitchParameters {
    pub release_pos_x: Option<f32>,
    /// Recorded extension. Release depth is fixed in display space instead.
    #[allow(dead_code)]
    pub release_pos_y: Option<f32>,
    pub release_pos_z: Option<f32>,
    pub vx0: Option<f32>,
    pub vy0: Option<f32>,
    pub vz0: Option<f32>,
    pub ax: Option<f32>,
    pub ay: Option<f32>,
    pub az: Option<f32>,
    pub release_spin_rate: Option<f32>,
    pub spin_axis: Option<f32>,
}

/// Pitch parameters keyed by pitch type ("FF", "SL", ...)
pub type PitchCatalogMap = BTreeMap<String, PitchParameters>;

/// Where pitch data comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PitchSource {
    File(PathBuf),
    Url(String),
}

impl PitchSource {
    /// Interpret a user supplied location: http(s) URLs are fetched, anything
    /// else is treated as a file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            PitchSource::Url(trimmed.to_string())
        } else {
            PitchSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for PitchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PitchSource::File(path) => write!(f, "{}", path.display()),
            PitchSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Pitch data source configuration
#[derive(Resource, Debug, Clone)]
pub struct PitchSourceConfig {
    pub source: PitchSource,
}

impl Default for PitchSourceConfig {
    fn default() -> Self {
        Self {
            source: resolve_default_source(std::env::var(PITCH_DATA_ENV).ok()),
        }
    }
}

/// Pick the pitch data location.
///
/// Order: explicit override, `assets/pitch_data.json`, then the platform data dir:
/// - macOS: ~/Library/Application Support/bevypitch/
/// - Linux: ~/.local/share/bevypitch/
/// - Windows: %APPDATA%\bevypitch\data\
pub fn resolve_default_source(override_location: Option<String>) -> PitchSource {
    if let Some(location) = override_location.filter(|l| !l.trim().is_empty()) {
        return PitchSource::parse(&location);
    }

    let local = PathBuf::from("assets").join(PITCH_DATA_FILE);
    if local.exists() {
        return PitchSource::File(local);
    }

    match ProjectDirs::from("", "", "bevypitch") {
        Some(dirs) => PitchSource::File(dirs.data_dir().join(PITCH_DATA_FILE)),
        None => PitchSource::File(local),
    }
}

/// Progress of the one-shot catalog load
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Resource holding every pitch type available for selection
#[derive(Resource, Debug, Default)]
pub struct PitchCatalog {
    pub pitches: PitchCatalogMap,
    pub status: LoadStatus,
    pub source: Option<String>,
    pub loaded_utc: Option<DateTime<Utc>>,
}

impl PitchCatalog {
    pub fn get(&self, pitch_type: &str) -> Option<&PitchParameters> {
        self.pitches.get(pitch_type)
    }

    pub fn pitch_types(&self) -> impl Iterator<Item = &str> {
        self.pitches.keys().map(String::as_str)
    }
}

/// Commands for the pitch loader worker thread
#[derive(Debug)]
pub enum LoadCommand {
    Load(PitchSource),
}

/// Results from the pitch loader worker thread
#[derive(Debug)]
pub enum LoadResult {
    Loaded {
        catalog: PitchCatalogMap,
        source: String,
        loaded_utc: DateTime<Utc>,
    },
    Failed {
        source: String,
        error: String,
    },
}

/// Resource containing channels for communicating with the loader thread
#[derive(Resource)]
pub struct PitchChannels {
    pub cmd_tx: Sender<LoadCommand>,
    pub res_rx: Arc<Mutex<Receiver<LoadResult>>>,
}
