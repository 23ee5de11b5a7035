//! Mapping from the recorded pitch frame to Bevy display space.
//!
//! Recorded frame: x lateral (catcher's view), y depth toward the pitcher,
//! z vertical. Display frame: x lateral (mirrored), y up, z depth.

use bevy::math::Vec3;

use crate::core::coordinates::{RELEASE_DEPTH, RELEASE_HEIGHT_OFFSET};

/// Convert a recorded velocity or acceleration to display space.
/// Mapping: display (x,y,z) = (-src.x, src.z, src.y)
pub fn source_vector_to_display(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(-x, z, y)
}

/// Convert a recorded release point to display space.
///
/// Only the lateral and vertical components are taken from the recording. The
/// depth is pinned to [`RELEASE_DEPTH`] and the height lifted by
/// [`RELEASE_HEIGHT_OFFSET`].
pub fn source_release_to_display(x: f32, z: f32) -> Vec3 {
    Vec3::new(-x, z + RELEASE_HEIGHT_OFFSET, RELEASE_DEPTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_mapping_flips_lateral_and_swaps_depth() {
        let v = source_vector_to_display(5.0, -130.0, -4.0);
        assert_eq!(v, Vec3::new(-5.0, -4.0, -130.0));
    }

    #[test]
    fn test_release_mapping_applies_biases() {
        let p = source_release_to_display(-1.5, 5.8);
        assert_eq!(p.x, 1.5);
        assert!((p.y - 6.45).abs() < 1e-5);
        assert_eq!(p.z, RELEASE_DEPTH);
    }
}
