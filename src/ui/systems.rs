//! UI systems: input handling and panel refresh

use bevy::prelude::*;
use bevy_feathers::palette;
use chrono::SecondsFormat;

use crate::pitch::{LoadStatus, PitchCatalog};
use crate::playback::{PlaybackState, SimulationClock, TogglePlayback};
use crate::trajectory::{PitchSelection, TrajectoryRegistry};
use crate::ui::panels::{BUTTON_BG, BUTTON_BG_HOVER, spawn_pitch_toggles};
use crate::ui::state::{
    ControlPanel, PitchToggle, PitchToggleList, PlaybackButton, PlaybackButtonLabel, SpeedButton,
    StatusText, UIState,
};
use crate::visualization::{FieldConfig, pitch_color};

/// Selection message a click on `pitch_type`'s toggle should produce
pub fn selection_for_click(registry: &TrajectoryRegistry, pitch_type: &str) -> PitchSelection {
    if registry.contains(pitch_type) {
        PitchSelection::Deselect(pitch_type.to_string())
    } else {
        PitchSelection::Select(pitch_type.to_string())
    }
}

/// Human readable loader status
pub fn status_line(catalog: &PitchCatalog) -> String {
    let source = catalog.source.as_deref().unwrap_or("(no source)");
    match &catalog.status {
        LoadStatus::Idle => "Waiting for pitch data".to_string(),
        LoadStatus::Loading => format!("Loading {}", source),
        LoadStatus::Loaded => match catalog.loaded_utc {
            Some(at) => format!(
                "{} pitch types from {} ({})",
                catalog.pitches.len(),
                source,
                at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            None => format!("{} pitch types from {}", catalog.pitches.len(), source),
        },
        LoadStatus::Failed(error) => format!("Could not load {}: {}", source, error),
    }
}

/// Keyboard shortcuts
pub fn keyboard_shortcuts_system(
    input: Res<ButtonInput<KeyCode>>,
    mut toggles: MessageWriter<TogglePlayback>,
    mut state: ResMut<UIState>,
    mut field: ResMut<FieldConfig>,
) {
    if input.just_pressed(KeyCode::Space) {
        toggles.write(TogglePlayback);
    }
    if input.just_pressed(KeyCode::KeyH) {
        state.show_panel = !state.show_panel;
    }
    if input.just_pressed(KeyCode::KeyZ) {
        field.show_strike_zone = !field.show_strike_zone;
    }
}

/// Turn pitch toggle clicks into selection messages
pub fn pitch_toggle_clicks_system(
    registry: Res<TrajectoryRegistry>,
    mut selections: MessageWriter<PitchSelection>,
    q: Query<(&Interaction, &PitchToggle), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, toggle) in q.iter() {
        if *interaction == Interaction::Pressed {
            selections.write(selection_for_click(&registry, &toggle.0));
        }
    }
}

/// Turn Play/Pause clicks into toggle messages
pub fn playback_button_clicks_system(
    mut toggles: MessageWriter<TogglePlayback>,
    q: Query<&Interaction, (Changed<Interaction>, With<PlaybackButton>)>,
) {
    for interaction in q.iter() {
        if *interaction == Interaction::Pressed {
            toggles.write(TogglePlayback);
        }
    }
}

/// Apply speed preset clicks to the clock
pub fn speed_button_clicks_system(
    mut clock: ResMut<SimulationClock>,
    q: Query<(&Interaction, &SpeedButton), Changed<Interaction>>,
) {
    for (interaction, speed) in q.iter() {
        if *interaction == Interaction::Pressed {
            clock.time_scale = speed.0;
            info!("Playback speed {}x", speed.0);
        }
    }
}

/// Rebuild the pitch toggles whenever a new catalog arrives
pub fn populate_pitch_toggles_system(
    catalog: Res<PitchCatalog>,
    mut commands: Commands,
    lists: Query<Entity, With<PitchToggleList>>,
    existing: Query<Entity, With<PitchToggle>>,
) {
    if !catalog.is_changed() || catalog.status != LoadStatus::Loaded {
        return;
    }
    let Ok(list) = lists.single() else {
        warn!("Pitch toggle list not found");
        return;
    };
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    spawn_pitch_toggles(&mut commands, list, catalog.pitch_types());
}

/// Keep toggle colours in step with the registry and hover state
pub fn refresh_pitch_toggles_system(
    registry: Res<TrajectoryRegistry>,
    mut q: Query<(&PitchToggle, &Interaction, &mut BackgroundColor)>,
) {
    for (toggle, interaction, mut background) in q.iter_mut() {
        background.0 = if registry.contains(&toggle.0) {
            pitch_color(&toggle.0).with_alpha(0.85)
        } else if *interaction == Interaction::Hovered {
            BUTTON_BG_HOVER
        } else {
            BUTTON_BG
        };
    }
}

/// Highlight the active speed preset
pub fn refresh_speed_buttons_system(
    clock: Res<SimulationClock>,
    mut q: Query<(&SpeedButton, &mut BackgroundColor)>,
) {
    for (speed, mut background) in q.iter_mut() {
        background.0 = if (clock.time_scale - speed.0).abs() < f32::EPSILON {
            palette::ACCENT
        } else {
            BUTTON_BG
        };
    }
}

/// Show the next playback action on the button
pub fn refresh_playback_label_system(
    playback: Res<PlaybackState>,
    mut q: Query<&mut Text, With<PlaybackButtonLabel>>,
) {
    if !playback.is_changed() {
        return;
    }
    for mut text in q.iter_mut() {
        text.0 = playback.action_label().to_string();
    }
}

/// Mirror the loader status into the status line
pub fn refresh_status_text_system(
    catalog: Res<PitchCatalog>,
    mut q: Query<&mut Text, With<StatusText>>,
) {
    if !catalog.is_changed() {
        return;
    }
    let line = status_line(&catalog);
    for mut text in q.iter_mut() {
        text.0 = line.clone();
    }
}

/// Show or hide the control panel
pub fn sync_panel_visibility_system(
    state: Res<UIState>,
    mut q: Query<&mut Node, With<ControlPanel>>,
) {
    if !state.is_changed() {
        return;
    }
    for mut node in q.iter_mut() {
        node.display = if state.show_panel {
            Display::Flex
        } else {
            Display::None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchParameters;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_click_selects_inactive_and_deselects_active() {
        let mut registry = TrajectoryRegistry::default();
        assert_eq!(
            selection_for_click(&registry, "FF"),
            PitchSelection::Select("FF".to_string())
        );
        registry.add("FF", &PitchParameters::default(), 0.0);
        assert_eq!(
            selection_for_click(&registry, "FF"),
            PitchSelection::Deselect("FF".to_string())
        );
    }

    #[test]
    fn test_status_line_per_state() {
        let mut catalog = PitchCatalog {
            source: Some("assets/pitch_data.json".to_string()),
            ..Default::default()
        };
        assert_eq!(status_line(&catalog), "Waiting for pitch data");

        catalog.status = LoadStatus::Loading;
        assert_eq!(status_line(&catalog), "Loading assets/pitch_data.json");

        catalog
            .pitches
            .insert("FF".to_string(), PitchParameters::default());
        catalog.status = LoadStatus::Loaded;
        catalog.loaded_utc = Utc.with_ymd_and_hms(2026, 4, 1, 19, 5, 0).single();
        assert_eq!(
            status_line(&catalog),
            "1 pitch types from assets/pitch_data.json (2026-04-01T19:05:00Z)"
        );

        catalog.status = LoadStatus::Failed("expected json object".to_string());
        assert!(status_line(&catalog).ends_with("expected json object"));
    }
}
