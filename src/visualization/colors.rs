//! Pitch type colour table and two-tone ball shading

use bevy::color::ColorToComponents;
use bevy::prelude::*;

/// Colour used for pitch types missing from the table.
pub const FALLBACK_PITCH_COLOR: Color = Color::srgb(
    0xAA as f32 / 255.0,
    0xAA as f32 / 255.0,
    0xAA as f32 / 255.0,
);

/// Display colour for a pitch type code.
pub fn pitch_color(pitch_type: &str) -> Color {
    let (r, g, b) = match pitch_type {
        "FF" => (0xFF, 0x00, 0x00),
        "FT" => (0x8B, 0x00, 0x00),
        "SI" => (0xFF, 0xA5, 0x00),
        "FC" => (0x80, 0x80, 0x80),
        "SL" => (0x00, 0x00, 0xFF),
        "ST" => (0x00, 0x80, 0x80),
        "CU" => (0x80, 0x00, 0x80),
        "KC" => (0x4B, 0x00, 0x82),
        "CH" => (0x00, 0x80, 0x00),
        "FS" => (0x46, 0x82, 0xB4),
        "FO" => (0xB2, 0x22, 0x22),
        "CS" => (0x93, 0x70, 0xDB),
        "KN" => (0xFF, 0xFF, 0x00),
        "EP" => (0xA0, 0x52, 0x2D),
        "SV" => (0x20, 0xB2, 0xAA),
        _ => return FALLBACK_PITCH_COLOR,
    };
    Color::srgb_u8(r, g, b)
}

/// Per-vertex colours splitting the ball in two: white on the +X half, the
/// pitch colour on the other. Spin is readable from the boundary.
pub fn two_tone_vertex_colors(positions: &[[f32; 3]], color: Color) -> Vec<[f32; 4]> {
    let white = LinearRgba::WHITE.to_f32_array();
    let tint = color.to_linear().to_f32_array();
    positions
        .iter()
        .map(|p| if p[0] >= 0.0 { white } else { tint })
        .collect()
}
