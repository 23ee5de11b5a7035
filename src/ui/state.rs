//! UI state management

use bevy::prelude::*;

/// Main UI state resource
#[derive(Resource, Debug)]
pub struct UIState {
    pub show_panel: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self { show_panel: true }
    }
}

/// Root node of the control panel
#[derive(Component)]
pub struct ControlPanel;

/// Play/Pause button
#[derive(Component)]
pub struct PlaybackButton;

/// Text inside the Play/Pause button
#[derive(Component)]
pub struct PlaybackButtonLabel;

/// Container the pitch toggles are spawned into
#[derive(Component)]
pub struct PitchToggleList;

/// Toggle button for one pitch type
#[derive(Component, Debug, Clone)]
pub struct PitchToggle(pub String);

/// Playback speed preset button
#[derive(Component, Debug, Clone, Copy)]
pub struct SpeedButton(pub f32);

/// Loader status line
#[derive(Component)]
pub struct StatusText;
