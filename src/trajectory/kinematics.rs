//! Closed-form pitch kinematics
//!
//! Everything here is pure: the pose of a ball is a function of its launch
//! parameters and the time since release, nothing else.

use bevy::math::{Quat, Vec3};
use std::f32::consts::TAU;

use crate::core::space::{source_release_to_display, source_vector_to_display};
use crate::pitch::PitchParameters;

/// Spin axis used when a pitch has no recorded axis.
pub const DEFAULT_SPIN_AXIS: Vec3 = Vec3::X;

/// Uniformly accelerated motion in display space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub release: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
}

impl Motion {
    /// Map recorded release parameters into display space. Absent values are zero.
    pub fn from_pitch(params: &PitchParameters) -> Self {
        let get = |v: Option<f32>| v.unwrap_or(0.0);
        Self {
            release: source_release_to_display(
                get(params.release_pos_x),
                get(params.release_pos_z),
            ),
            velocity: source_vector_to_display(get(params.vx0), get(params.vy0), get(params.vz0)),
            acceleration: source_vector_to_display(get(params.ax), get(params.ay), get(params.az)),
        }
    }

    /// `p(t) = p0 + v0 t + a t² / 2`, per axis.
    pub fn position_at(&self, t: f32) -> Vec3 {
        self.release + self.velocity * t + 0.5 * self.acceleration * t * t
    }

    /// Depth component of [`Motion::position_at`] alone.
    pub fn depth_at(&self, t: f32) -> f32 {
        self.release.z + self.velocity.z * t + 0.5 * self.acceleration.z * t * t
    }
}

/// Constant spin about a fixed axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    /// Radians per second.
    pub rate: f32,
    /// Unit axis.
    pub axis: Vec3,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            rate: 0.0,
            axis: DEFAULT_SPIN_AXIS,
        }
    }
}

impl Spin {
    pub fn from_pitch(params: &PitchParameters) -> Self {
        Self {
            rate: spin_rate_from_rpm(params.release_spin_rate.unwrap_or(0.0)),
            axis: spin_axis_from_degrees(params.spin_axis.unwrap_or(0.0)),
        }
    }

    /// Rotation accumulated after `t` seconds.
    pub fn rotation_at(&self, t: f32) -> Quat {
        Quat::from_axis_angle(self.axis, self.rate * t)
    }
}

/// Observable state handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

/// Convert revolutions per minute to radians per second.
pub fn spin_rate_from_rpm(rpm: f32) -> f32 {
    rpm * TAU / 60.0
}

/// Spin axis from the recorded tilt angle, in the display XY plane.
pub fn spin_axis_from_degrees(degrees: f32) -> Vec3 {
    let radians = degrees.to_radians();
    Vec3::new(radians.cos(), radians.sin(), 0.0)
        .try_normalize()
        .unwrap_or(DEFAULT_SPIN_AXIS)
}

/// Deterministic starting spin phase for a pitch type, in `[0, 2π)`.
///
/// FNV-1a over the whole key, scaled onto the circle. Keys sharing a first
/// letter ("FF", "FT", "FS") still land on different phases.
pub fn phase_offset(pitch_type: &str) -> f32 {
    const FNV_OFFSET: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;

    let hash = pitch_type
        .bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ b as u32).wrapping_mul(FNV_PRIME));
    let unit = hash as f64 / (u32::MAX as f64 + 1.0);
    ((unit * std::f64::consts::TAU) as f32).rem_euclid(TAU)
}

/// Base orientation: the key's phase offset about the spin axis.
pub fn base_orientation(pitch_type: &str, spin: &Spin) -> Quat {
    Quat::from_axis_angle(spin.axis, phase_offset(pitch_type))
}

/// Pose after `t` seconds of flight: `base * spin(t)`.
pub fn compute_pose(motion: &Motion, spin: &Spin, base: Quat, t: f32) -> Pose {
    Pose {
        position: motion.position_at(t),
        orientation: base * spin.rotation_at(t),
    }
}
