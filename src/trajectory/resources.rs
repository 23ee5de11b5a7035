//! Registry of active trajectories

use bevy::prelude::*;
use std::collections::HashMap;

use crate::pitch::PitchParameters;
use crate::trajectory::types::Trajectory;

/// Active trajectories keyed by pitch type.
///
/// At most one trajectory exists per pitch type. Iteration order is arbitrary;
/// trajectories never depend on each other.
#[derive(Resource, Debug, Default)]
pub struct TrajectoryRegistry {
    items: HashMap<String, Trajectory>,
}

impl TrajectoryRegistry {
    /// Build and register a trajectory starting at `now`.
    ///
    /// Returns `false` without touching the registry when the pitch type is
    /// already active.
    pub fn add(&mut self, pitch_type: &str, params: &PitchParameters, now: f64) -> bool {
        if self.items.contains_key(pitch_type) {
            return false;
        }
        self.items.insert(
            pitch_type.to_string(),
            Trajectory::from_pitch(pitch_type, params, now),
        );
        true
    }

    /// Register a prebuilt trajectory under its own pitch type.
    pub fn insert(&mut self, trajectory: Trajectory) -> bool {
        if self.items.contains_key(trajectory.pitch_type()) {
            return false;
        }
        self.items.insert(trajectory.pitch_type().to_string(), trajectory);
        true
    }

    pub fn remove(&mut self, pitch_type: &str) -> Option<Trajectory> {
        self.items.remove(pitch_type)
    }

    pub fn contains(&self, pitch_type: &str) -> bool {
        self.items.contains_key(pitch_type)
    }

    pub fn get(&self, pitch_type: &str) -> Option<&Trajectory> {
        self.items.get(pitch_type)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trajectory> {
        self.items.values()
    }

    #[allow(dead_code)]
    pub fn for_each(&self, visitor: impl FnMut(&Trajectory)) {
        self.items.values().for_each(visitor);
    }

    pub fn for_each_mut(&mut self, visitor: impl FnMut(&mut Trajectory)) {
        self.items.values_mut().for_each(visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(vy0: f32) -> PitchParameters {
        PitchParameters {
            vy0: Some(vy0),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_sets_origin_to_now() {
        let mut registry = TrajectoryRegistry::default();
        assert!(registry.add("FF", &params(-134.0), 7.5));
        assert_eq!(registry.get("FF").map(Trajectory::origin_time), Some(7.5));
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut registry = TrajectoryRegistry::default();
        assert!(registry.add("FF", &params(-134.0), 1.0));
        assert!(!registry.add("FF", &params(-90.0), 2.0));

        assert_eq!(registry.len(), 1);
        let ff = registry.get("FF").expect("FF active");
        assert_eq!(ff.origin_time(), 1.0);
        assert_eq!(ff.motion().velocity.z, -134.0);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut registry = TrajectoryRegistry::default();
        registry.add("CH", &params(-120.0), 0.0);
        assert!(registry.remove("SL").is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.remove("CH").is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_readd_after_remove_builds_fresh_trajectory() {
        let mut registry = TrajectoryRegistry::default();
        registry.add("CU", &params(-110.0), 0.0);
        registry.remove("CU");
        assert!(registry.add("CU", &params(-110.0), 9.0));
        assert_eq!(registry.get("CU").map(Trajectory::origin_time), Some(9.0));
    }

    #[test]
    fn test_for_each_visits_every_trajectory() {
        let mut registry = TrajectoryRegistry::default();
        for key in ["FF", "SL", "CH"] {
            registry.add(key, &params(-120.0), 0.0);
        }
        let mut seen = Vec::new();
        registry.for_each(|t| seen.push(t.pitch_type().to_string()));
        seen.sort();
        assert_eq!(seen, vec!["CH", "FF", "SL"]);

        registry.for_each_mut(|t| t.restart(4.0));
        assert!(registry.iter().all(|t| t.origin_time() == 4.0));
    }
}
