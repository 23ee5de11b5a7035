//! Global play/pause state

use bevy::prelude::*;

use crate::playback::clock::SimulationClock;
use crate::trajectory::{Trajectory, TrajectoryRegistry};

/// Whether simulated time is moving.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }

    /// Label for the control that flips the state.
    pub fn action_label(self) -> &'static str {
        match self {
            PlaybackState::Playing => "Pause",
            PlaybackState::Paused => "Play",
        }
    }
}

/// Request to flip between playing and paused.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct TogglePlayback;

/// Flip the playback state.
///
/// Pausing only stops the clock, so every ball stays where it was last drawn.
/// Resuming restarts the clock from zero and sends every active pitch back to
/// its release point.
pub fn toggle_playback(
    state: &mut PlaybackState,
    clock: &mut SimulationClock,
    registry: &mut TrajectoryRegistry,
) {
    match *state {
        PlaybackState::Playing => {
            clock.stop();
            *state = PlaybackState::Paused;
        }
        PlaybackState::Paused => {
            clock.restart();
            registry.for_each_mut(Trajectory::rewind);
            *state = PlaybackState::Playing;
        }
    }
}

/// System to apply toggle requests
pub fn apply_playback_toggle_system(
    mut toggles: MessageReader<TogglePlayback>,
    mut state: ResMut<PlaybackState>,
    mut clock: ResMut<SimulationClock>,
    mut registry: ResMut<TrajectoryRegistry>,
) {
    for _ in toggles.read() {
        toggle_playback(&mut state, &mut clock, &mut registry);
        info!(
            "Playback {:?} at t={:.3} with {} active pitch(es)",
            *state,
            clock.elapsed(),
            registry.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coordinates::RELEASE_DEPTH;
    use crate::trajectory::kinematics::{Motion, Spin};
    use crate::trajectory::systems::advance_trajectories;
    use bevy::math::Vec3;

    fn pitch(origin_time: f64) -> Trajectory {
        Trajectory::new(
            "SL",
            Motion {
                release: Vec3::new(1.0, 6.0, RELEASE_DEPTH),
                velocity: Vec3::new(3.0, -4.0, -120.0),
                acceleration: Vec3::new(-8.0, -20.0, 25.0),
            },
            Spin::default(),
            origin_time,
        )
    }

    #[test]
    fn test_pause_stops_clock_and_keeps_pose() {
        let mut state = PlaybackState::Playing;
        let mut clock = SimulationClock::default();
        let mut registry = TrajectoryRegistry::default();
        registry.insert(pitch(0.0));
        clock.tick(0.2);
        advance_trajectories(&mut registry, clock.elapsed());
        let pose = registry.get("SL").expect("SL").pose();

        toggle_playback(&mut state, &mut clock, &mut registry);

        assert_eq!(state, PlaybackState::Paused);
        assert!(!clock.is_running());
        clock.tick(5.0);
        assert!((clock.elapsed() - 0.2).abs() < 1e-6);
        let sl = registry.get("SL").expect("SL");
        assert_eq!(sl.pose(), pose);
        assert_eq!(sl.origin_time(), 0.0);
    }

    #[test]
    fn test_resume_rewinds_to_release() {
        let mut state = PlaybackState::Paused;
        let mut clock = SimulationClock::default();
        clock.tick(10.0);
        clock.stop();
        let mut registry = TrajectoryRegistry::default();
        registry.insert(pitch(3.0));
        let mid_flight = registry.get("SL").expect("SL").pose_at(0.25);
        registry.for_each_mut(|t| t.set_pose(mid_flight));

        toggle_playback(&mut state, &mut clock, &mut registry);

        assert_eq!(state, PlaybackState::Playing);
        assert!(clock.is_running());
        assert_eq!(clock.elapsed(), 0.0);
        let sl = registry.get("SL").expect("SL");
        assert_eq!(sl.origin_time(), 0.0);
        assert_eq!(sl.position(), Vec3::new(1.0, 6.0, RELEASE_DEPTH));
        assert_ne!(sl.position(), mid_flight.position);
    }

    #[test]
    fn test_toggle_twice_round_trips_state() {
        let mut state = PlaybackState::default();
        let mut clock = SimulationClock::default();
        let mut registry = TrajectoryRegistry::default();
        toggle_playback(&mut state, &mut clock, &mut registry);
        toggle_playback(&mut state, &mut clock, &mut registry);
        assert!(state.is_playing());
        assert_eq!(state.action_label(), "Pause");
    }
}
