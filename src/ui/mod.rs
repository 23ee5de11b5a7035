//! User interface module
//!
//! Bevy UI control panel: pitch type toggles, play/pause, playback speed and
//! the loader status line, plus keyboard shortcuts.

use bevy::prelude::*;

pub mod panels;
pub mod state;
pub mod systems;

pub use state::UIState;

use crate::trajectory::PitchSystems;

/// Marker for the main scene camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UIState>()
            .add_systems(Startup, panels::setup_control_panel)
            .add_systems(
                Update,
                (
                    (
                        systems::keyboard_shortcuts_system,
                        systems::pitch_toggle_clicks_system,
                        systems::playback_button_clicks_system,
                        systems::speed_button_clicks_system,
                    )
                        .in_set(PitchSystems::Input),
                    (
                        systems::populate_pitch_toggles_system,
                        systems::refresh_pitch_toggles_system,
                        systems::refresh_speed_buttons_system,
                        systems::refresh_playback_label_system,
                        systems::refresh_status_text_system,
                        systems::sync_panel_visibility_system,
                    )
                        .in_set(PitchSystems::Present),
                ),
            );
    }
}
