//! Runner athletic profile.

use rand::RngCore;
use workouts::models::WorkoutKind;

use super::AthleteProfile;

/// Athletic profile for running workouts.
///
/// Based on typical recreational to competitive runner performance:
/// - Cadence: ~165 steps/min
/// - Sessions: 20 minutes to 2 hours
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Steps per minute.
    cadence: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence: 165.0,
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a new runner profile with the given cadence in steps per minute.
    pub fn with_cadence(cadence: f64) -> Self {
        Self {
            cadence,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~180 steps/min).
    pub fn elite() -> Self {
        Self::with_cadence(180.0)
    }

    /// Creates a recreational runner profile (~155 steps/min).
    pub fn recreational() -> Self {
        Self::with_cadence(155.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn cadence_per_min(&self) -> f64 {
        self.cadence
    }

    fn session_hours(&self) -> (f64, f64) {
        (0.33, 2.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_values(&self, _: f64, _: f64, _: &mut dyn RngCore) -> Vec<f64> {
        Vec::new()
    }
}
