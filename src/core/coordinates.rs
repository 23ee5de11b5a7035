//! Field coordinates in display space (feet, Y up).
//!
//! The pitcher throws toward -Z; the front of home plate sits on the plane
//! `z = PLATE_DEPTH`. The camera looks down +Z from behind the plate.

use bevy::math::Vec3;

/// Depth of the target plane (front of home plate).
pub const PLATE_DEPTH: f32 = -60.5;

/// Depth every pitch is released from, regardless of the recorded extension.
pub const RELEASE_DEPTH: f32 = -2.03;

/// Added to the recorded release height to sit the ball on top of the mound.
pub const RELEASE_HEIGHT_OFFSET: f32 = 0.65;

/// Centre of the strike zone outline.
pub const STRIKE_ZONE_CENTER: Vec3 = Vec3::new(0.0, 2.5, PLATE_DEPTH);

/// Strike zone outline width and height.
pub const STRIKE_ZONE_SIZE: (f32, f32) = (1.42, 2.0);

/// Home plate outline in the ground plane (x, depth offset from the plate plane).
pub const HOME_PLATE_OUTLINE: [(f32, f32); 5] = [
    (-0.85, 0.0),
    (0.85, 0.0),
    (0.85, 0.5),
    (0.0, 1.0),
    (-0.85, 0.5),
];

/// Height of the plate surface above the ground, keeps it from z-fighting.
pub const HOME_PLATE_LIFT: f32 = 0.011;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_is_in_front_of_plate() {
        assert!(RELEASE_DEPTH > PLATE_DEPTH);
        assert!(((RELEASE_DEPTH - PLATE_DEPTH) - 58.47).abs() < 1e-4);
    }

    #[test]
    fn test_strike_zone_sits_on_plate_plane() {
        assert_eq!(STRIKE_ZONE_CENTER.z, PLATE_DEPTH);
    }
}
