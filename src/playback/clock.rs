//! Simulated time for trajectory playback

use bevy::prelude::*;

/// Single source of simulated time for every trajectory.
///
/// Elapsed time only accumulates while the clock is running, so a pause never
/// makes trajectories jump ahead when playback resumes.
#[derive(Resource, Debug, Clone)]
pub struct SimulationClock {
    elapsed: f64,
    running: bool,
    pub time_scale: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            running: true,
            time_scale: 1.0,
        }
    }
}

impl SimulationClock {
    /// Simulated seconds accumulated while running.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resume accumulation from the frozen value.
    #[allow(dead_code)]
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Freeze accumulation.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Zero the elapsed time and run.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Advance by a real-time delta, scaled. Ignored while stopped.
    pub fn tick(&mut self, real_delta_secs: f64) {
        if !self.running {
            return;
        }
        self.elapsed += (real_delta_secs * f64::from(self.time_scale)).max(0.0);
    }
}

/// System to advance the simulation clock by the frame delta
pub fn advance_simulation_clock(time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    clock.tick(time.delta_secs_f64());
}
