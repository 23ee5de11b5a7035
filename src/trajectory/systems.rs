//! Trajectory systems for selection handling and per-frame advancement

use bevy::prelude::*;

use crate::core::coordinates::PLATE_DEPTH;
use crate::pitch::PitchCatalog;
use crate::playback::{PlaybackState, SimulationClock};
use crate::trajectory::resources::TrajectoryRegistry;
use crate::trajectory::types::PitchSelection;

/// Advance every trajectory to simulated time `now`.
///
/// A trajectory whose depth has reached the plate restarts from the release
/// point and keeps its previous pose for this frame. Returns how many
/// trajectories restarted.
pub fn advance_trajectories(registry: &mut TrajectoryRegistry, now: f64) -> usize {
    let mut restarted = 0;
    registry.for_each_mut(|trajectory| {
        let t = trajectory.elapsed_at(now);
        if trajectory.motion().depth_at(t) <= PLATE_DEPTH {
            trajectory.restart(now);
            restarted += 1;
            return;
        }
        let pose = trajectory.pose_at(t);
        trajectory.set_pose(pose);
    });
    restarted
}

/// Apply one selection change to the registry.
///
/// Selecting an unknown or already active pitch type and deselecting an
/// inactive one are no-ops.
pub fn apply_selection(
    registry: &mut TrajectoryRegistry,
    catalog: &PitchCatalog,
    selection: &PitchSelection,
    now: f64,
) -> bool {
    match selection {
        PitchSelection::Select(pitch_type) => {
            let Some(params) = catalog.get(pitch_type) else {
                warn!("Ignoring selection of unknown pitch type {}", pitch_type);
                return false;
            };
            let added = registry.add(pitch_type, params, now);
            if added {
                info!("Pitch {} in flight from t={:.3}", pitch_type, now);
            } else {
                debug!("Pitch {} already active", pitch_type);
            }
            added
        }
        PitchSelection::Deselect(pitch_type) => {
            let removed = registry.remove(pitch_type).is_some();
            if removed {
                info!("Pitch {} removed", pitch_type);
            } else {
                debug!("Pitch {} was not active", pitch_type);
            }
            removed
        }
    }
}

/// System to drain selection messages into the registry
pub fn apply_pitch_selection_system(
    mut selections: MessageReader<PitchSelection>,
    catalog: Res<PitchCatalog>,
    clock: Res<SimulationClock>,
    mut registry: ResMut<TrajectoryRegistry>,
) {
    for selection in selections.read() {
        apply_selection(&mut registry, &catalog, selection, clock.elapsed());
    }
}

/// System to advance trajectories while playback is running
pub fn advance_trajectories_system(
    playback: Res<PlaybackState>,
    clock: Res<SimulationClock>,
    mut registry: ResMut<TrajectoryRegistry>,
) {
    if !playback.is_playing() {
        return;
    }
    let restarted = advance_trajectories(&mut registry, clock.elapsed());
    if restarted > 0 {
        debug!("{} pitch(es) reached the plate and restarted", restarted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coordinates::RELEASE_DEPTH;
    use crate::pitch::PitchParameters;
    use crate::trajectory::kinematics::{Motion, Spin};
    use crate::trajectory::types::Trajectory;
    use bevy::math::Vec3;

    /// 60 ft/s straight at the plate: crosses after a little under a second.
    fn straight_pitch(origin_time: f64) -> Trajectory {
        Trajectory::new(
            "FF",
            Motion {
                release: Vec3::new(0.0, 6.0, RELEASE_DEPTH),
                velocity: Vec3::new(0.0, 0.0, -60.0),
                acceleration: Vec3::ZERO,
            },
            Spin::default(),
            origin_time,
        )
    }

    fn catalog_with(keys: &[&str]) -> PitchCatalog {
        let mut catalog = PitchCatalog::default();
        for key in keys {
            catalog.pitches.insert(
                key.to_string(),
                PitchParameters {
                    vy0: Some(-130.0),
                    ..Default::default()
                },
            );
        }
        catalog
    }

    #[test]
    fn test_advance_updates_pose_in_flight() {
        let mut registry = TrajectoryRegistry::default();
        registry.insert(straight_pitch(0.0));

        assert_eq!(advance_trajectories(&mut registry, 0.5), 0);

        let ff = registry.get("FF").expect("FF active");
        assert!((ff.position().z - (RELEASE_DEPTH - 30.0)).abs() < 1e-4);
        assert_eq!(ff.origin_time(), 0.0);
    }

    #[test]
    fn test_advance_after_long_run_keeps_flight_speed() {
        let start = 524_288.0;
        let mut registry = TrajectoryRegistry::default();
        registry.insert(straight_pitch(start));

        let mut now = start;
        for _ in 0..30 {
            now += 1.0 / 60.0;
            assert_eq!(advance_trajectories(&mut registry, now), 0);
        }

        let ff = registry.get("FF").expect("FF active");
        assert!((ff.elapsed_at(now) - 0.5).abs() < 1e-4);
        assert!((ff.position().z - (RELEASE_DEPTH - 30.0)).abs() < 1e-2);
    }

    #[test]
    fn test_crossing_plate_restarts_and_freezes_pose() {
        let mut registry = TrajectoryRegistry::default();
        registry.insert(straight_pitch(0.0));
        advance_trajectories(&mut registry, 0.9);
        let last_pose = registry.get("FF").expect("FF").pose();

        assert_eq!(advance_trajectories(&mut registry, 1.0), 1);

        let ff = registry.get("FF").expect("FF");
        assert_eq!(ff.origin_time(), 1.0);
        assert_eq!(ff.pose(), last_pose);
    }

    #[test]
    fn test_restart_returns_to_release_depth() {
        let mut registry = TrajectoryRegistry::default();
        registry.insert(straight_pitch(0.0));
        advance_trajectories(&mut registry, 2.0);

        let ff = registry.get("FF").expect("FF");
        assert_eq!(ff.motion().depth_at(ff.elapsed_at(2.0)), RELEASE_DEPTH);

        advance_trajectories(&mut registry, 2.0);
        assert_eq!(registry.get("FF").expect("FF").position().z, RELEASE_DEPTH);
    }

    #[test]
    fn test_no_overshoot_accumulates_across_restarts() {
        let mut registry = TrajectoryRegistry::default();
        registry.insert(straight_pitch(0.0));

        let mut now = 0.0;
        let mut restarts = 0;
        for _ in 0..600 {
            now += 1.0 / 60.0;
            restarts += advance_trajectories(&mut registry, now);
            let ff = registry.get("FF").expect("FF");
            assert!(ff.elapsed_at(now) < 1.0);
            assert!(ff.position().z > crate::core::coordinates::PLATE_DEPTH);
        }
        assert!(restarts >= 9);
    }

    #[test]
    fn test_trajectories_advance_independently() {
        let mut registry = TrajectoryRegistry::default();
        registry.insert(straight_pitch(0.0));
        registry.insert(Trajectory::new(
            "CU",
            Motion {
                release: Vec3::new(0.0, 6.0, RELEASE_DEPTH),
                velocity: Vec3::new(0.0, 0.0, -30.0),
                acceleration: Vec3::ZERO,
            },
            Spin::default(),
            0.0,
        ));

        assert_eq!(advance_trajectories(&mut registry, 1.5), 1);
        assert_eq!(registry.get("FF").expect("FF").origin_time(), 1.5);
        assert_eq!(registry.get("CU").expect("CU").origin_time(), 0.0);
    }

    #[test]
    fn test_selection_adds_and_removes() {
        let catalog = catalog_with(&["FF", "SL"]);
        let mut registry = TrajectoryRegistry::default();

        assert!(apply_selection(
            &mut registry,
            &catalog,
            &PitchSelection::Select("SL".to_string()),
            3.0
        ));
        assert!(!apply_selection(
            &mut registry,
            &catalog,
            &PitchSelection::Select("SL".to_string()),
            4.0
        ));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("SL").expect("SL").origin_time(), 3.0);

        assert!(apply_selection(
            &mut registry,
            &catalog,
            &PitchSelection::Deselect("SL".to_string()),
            5.0
        ));
        assert!(!apply_selection(
            &mut registry,
            &catalog,
            &PitchSelection::Deselect("SL".to_string()),
            5.0
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_selecting_unknown_pitch_type_is_ignored() {
        let catalog = catalog_with(&["FF"]);
        let mut registry = TrajectoryRegistry::default();
        assert!(!apply_selection(
            &mut registry,
            &catalog,
            &PitchSelection::Select("EP".to_string()),
            0.0
        ));
        assert!(registry.is_empty());
    }
}
