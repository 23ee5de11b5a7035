//! Trajectory runtime entity and selection messages

use bevy::math::{Quat, Vec3};
use bevy::prelude::*;

use crate::pitch::PitchParameters;
use crate::trajectory::kinematics::{Motion, Pose, Spin, base_orientation, compute_pose};

/// Selection changes coming from the UI.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum PitchSelection {
    Select(String),
    Deselect(String),
}

/// One pitch type in flight.
///
/// Launch parameters are fixed at construction. Only the origin time and the
/// last computed pose change over the trajectory's lifetime.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pitch_type: String,
    motion: Motion,
    spin: Spin,
    base_orientation: Quat,
    origin_time: f64,
    current: Pose,
}

impl Trajectory {
    pub fn new(
        pitch_type: impl Into<String>,
        motion: Motion,
        spin: Spin,
        origin_time: f64,
    ) -> Self {
        let pitch_type = pitch_type.into();
        let base_orientation = base_orientation(&pitch_type, &spin);
        Self {
            current: Pose {
                position: motion.release,
                orientation: base_orientation,
            },
            pitch_type,
            motion,
            spin,
            base_orientation,
            origin_time,
        }
    }

    pub fn from_pitch(
        pitch_type: impl Into<String>,
        params: &PitchParameters,
        origin_time: f64,
    ) -> Self {
        Self::new(
            pitch_type,
            Motion::from_pitch(params),
            Spin::from_pitch(params),
            origin_time,
        )
    }

    pub fn pitch_type(&self) -> &str {
        &self.pitch_type
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    #[allow(dead_code)]
    pub fn base_orientation(&self) -> Quat {
        self.base_orientation
    }

    #[allow(dead_code)]
    pub fn origin_time(&self) -> f64 {
        self.origin_time
    }

    pub fn position(&self) -> Vec3 {
        self.current.position
    }

    pub fn orientation(&self) -> Quat {
        self.current.orientation
    }

    #[allow(dead_code)]
    pub fn pose(&self) -> Pose {
        self.current
    }

    /// Seconds of flight at simulated time `now`.
    ///
    /// Clock time stays `f64`; only the short flight time is narrowed.
    pub fn elapsed_at(&self, now: f64) -> f32 {
        (now - self.origin_time) as f32
    }

    /// Pose after `t` seconds of flight. Does not touch stored state.
    pub fn pose_at(&self, t: f32) -> Pose {
        compute_pose(&self.motion, &self.spin, self.base_orientation, t)
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.current = pose;
    }

    /// Start a new flight from the release point at simulated time `now`.
    pub fn restart(&mut self, now: f64) {
        self.origin_time = now;
    }

    /// Move back to the release point against a freshly restarted clock.
    pub fn rewind(&mut self) {
        self.origin_time = 0.0;
        self.current.position = self.motion.release;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fastball() -> PitchParameters {
        PitchParameters {
            release_pos_x: Some(-1.9),
            release_pos_z: Some(5.8),
            vx0: Some(6.0),
            vy0: Some(-135.0),
            vz0: Some(-5.5),
            ax: Some(-11.0),
            ay: Some(29.0),
            az: Some(-15.0),
            release_spin_rate: Some(2300.0),
            spin_axis: Some(210.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_trajectory_sits_at_release() {
        let trajectory = Trajectory::from_pitch("FF", &fastball(), 4.0);
        assert_eq!(trajectory.pitch_type(), "FF");
        assert_eq!(trajectory.origin_time(), 4.0);
        assert_eq!(trajectory.position(), trajectory.motion().release);
        assert_eq!(trajectory.orientation(), trajectory.base_orientation());
    }

    #[test]
    fn test_pose_at_does_not_mutate() {
        let trajectory = Trajectory::from_pitch("FF", &fastball(), 0.0);
        let before = trajectory.pose();
        let _ = trajectory.pose_at(0.3);
        assert_eq!(trajectory.pose(), before);
    }

    #[test]
    fn test_rewind_resets_origin_and_position_only() {
        let mut trajectory = Trajectory::from_pitch("SL", &fastball(), 3.0);
        let mid_flight = trajectory.pose_at(0.2);
        trajectory.set_pose(mid_flight);

        trajectory.rewind();

        assert_eq!(trajectory.origin_time(), 0.0);
        assert_eq!(trajectory.position(), trajectory.motion().release);
        assert_eq!(trajectory.orientation(), mid_flight.orientation);
    }
}
