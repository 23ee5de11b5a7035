//! Control panel layout

use bevy::prelude::*;
use bevy_feathers::palette;

use crate::ui::state::{
    ControlPanel, PitchToggle, PitchToggleList, PlaybackButton, PlaybackButtonLabel, SpeedButton,
    StatusText,
};

pub const PANEL_BG: Color = Color::srgba(0.04, 0.08, 0.12, 0.85);
pub const BUTTON_BG: Color = Color::srgba(0.06, 0.12, 0.16, 0.9);
pub const BUTTON_BG_HOVER: Color = Color::srgba(0.08, 0.2, 0.26, 0.95);

/// Playback speed presets offered in the panel
pub const SPEED_PRESETS: [f32; 3] = [0.25, 0.5, 1.0];

fn label(text: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn button_node() -> Node {
    Node {
        padding: UiRect::axes(Val::Px(10.0), Val::Px(5.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

/// Spawn the control panel. Pitch toggles are added once the catalog loads.
pub fn setup_control_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                max_width: Val::Px(280.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            ControlPanel,
        ))
        .with_children(|panel| {
            panel.spawn(label("Pitch types", 18.0, palette::LIGHT_GRAY_1));

            panel.spawn((
                Node {
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    column_gap: Val::Px(6.0),
                    row_gap: Val::Px(6.0),
                    ..default()
                },
                PitchToggleList,
            ));

            panel
                .spawn((Button, button_node(), BackgroundColor(BUTTON_BG), PlaybackButton))
                .with_children(|button| {
                    button.spawn((
                        label("Pause", 16.0, palette::LIGHT_GRAY_1),
                        PlaybackButtonLabel,
                    ));
                });

            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(6.0),
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn(label("Speed", 14.0, palette::LIGHT_GRAY_2));
                    for scale in SPEED_PRESETS {
                        row.spawn((
                            Button,
                            button_node(),
                            BackgroundColor(BUTTON_BG),
                            SpeedButton(scale),
                        ))
                        .with_children(|button| {
                            let text = format!("{}x", scale);
                            button.spawn(label(text, 14.0, palette::LIGHT_GRAY_1));
                        });
                    }
                });

            panel.spawn((label("", 12.0, palette::LIGHT_GRAY_2), StatusText));
            panel.spawn(label(
                "Space: play/pause   Z: strike zone   H: hide panel",
                11.0,
                palette::LIGHT_GRAY_2,
            ));
        });
}

/// Spawn one toggle per pitch type into the list container
pub fn spawn_pitch_toggles<'a>(
    commands: &mut Commands,
    list: Entity,
    pitch_types: impl Iterator<Item = &'a str>,
) {
    let pitch_types: Vec<String> = pitch_types.map(str::to_string).collect();
    commands.entity(list).with_children(|list| {
        for pitch_type in pitch_types {
            list.spawn((
                Button,
                button_node(),
                BackgroundColor(BUTTON_BG),
                PitchToggle(pitch_type.clone()),
            ))
            .with_children(|button| {
                button.spawn(label(pitch_type, 14.0, palette::LIGHT_GRAY_1));
            });
        }
    });
}
