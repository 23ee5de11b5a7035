//! Visualization configuration

use bevy::prelude::*;

/// Ball mesh and material configuration resource
#[derive(Resource, Debug, Clone)]
pub struct BallRenderConfig {
    /// Regulation baseball radius in feet
    pub radius: f32,
    pub sectors: u32,
    pub stacks: u32,
    pub roughness: f32,
    pub metallic: f32,
}

impl Default for BallRenderConfig {
    fn default() -> Self {
        Self {
            radius: 0.145,
            sectors: 32,
            stacks: 32,
            roughness: 0.4,
            metallic: 0.1,
        }
    }
}

/// Static field configuration resource
#[derive(Resource, Debug, Clone)]
pub struct FieldConfig {
    pub ground_size: f32,
    pub ground_color: Color,
    pub plate_color: Color,
    pub strike_zone_color: Color,
    pub show_strike_zone: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            ground_size: 200.0,
            ground_color: Color::srgb_u8(0x1e, 0x47, 0x2d),
            plate_color: Color::WHITE,
            strike_zone_color: Color::srgb(0.0, 1.0, 1.0),
            show_strike_zone: true,
        }
    }
}
