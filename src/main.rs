use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_feathers::FeathersPlugins;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod core;
mod pitch;
mod playback;
mod trajectory;
mod ui;
mod visualization;

use crate::core::coordinates::{PLATE_DEPTH, STRIKE_ZONE_CENTER};
use pitch::PitchDataPlugin;
use playback::PlaybackPlugin;
use trajectory::TrajectoryPlugin;
use ui::{MainCamera, UiPlugin};
use visualization::VisualizationPlugin;

/// Distance from the camera to the strike zone, behind the catcher.
const CAMERA_BEHIND_PLATE: f32 = 4.5;

// Setup camera looking down the pitch toward the mound
pub fn setup(mut commands: Commands) {
    let focus = Vec3::new(0.0, STRIKE_ZONE_CENTER.y, 0.0);
    let camera_pos = Vec3::new(0.0, STRIKE_ZONE_CENTER.y, PLATE_DEPTH - CAMERA_BEHIND_PLATE);
    let radius = camera_pos.distance(focus);

    let pan_orbit = PanOrbitCamera {
        focus,
        radius: Some(radius),
        // Camera sits on the -Z side of the focus.
        yaw: Some(std::f32::consts::PI),
        pitch: Some(0.0),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60f32.to_radians(),
            near: 0.1,
            far: 2000.0,
            ..default()
        }),
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(camera_pos).looking_at(focus, Vec3::Y),
    ));
}

fn main() {
    let mut app = App::new();

    app.insert_resource(ClearColor(Color::srgb_u8(0x22, 0x22, 0x22)));
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Bevy Pitch Trajectories".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Feathers initializes `UiTheme` but does not populate it by default.
    let mut theme = UiTheme(create_dark_theme());
    theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
    theme.set_color("feathers.text.dim", palette::LIGHT_GRAY_2);
    theme.set_color("feathers.focus", palette::ACCENT);
    theme.set_color("feathers.button.bg", Color::srgba(0.06, 0.12, 0.16, 0.9));
    theme.set_color(
        "feathers.button.bg.hover",
        Color::srgba(0.08, 0.2, 0.26, 0.95),
    );
    theme.set_color(
        "feathers.button.bg.pressed",
        Color::srgba(0.1, 0.26, 0.32, 0.95),
    );
    theme.set_color("feathers.button.txt", Color::srgba(0.6, 1.0, 1.0, 1.0));
    app.insert_resource(theme);
    app.add_plugins(FeathersPlugins);

    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(PitchDataPlugin);
    app.add_plugins(TrajectoryPlugin);
    app.add_plugins(PlaybackPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
