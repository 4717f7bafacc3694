//! Pool swimmer athletic profile.

use rand::RngCore;
use workouts::models::{M_IN_KM, WorkoutKind};

use super::AthleteProfile;

/// Athletic profile for pool swimming.
///
/// Based on a steady recreational swimmer:
/// - Stroke rate: ~30 strokes/min
/// - Swim speed: ~2.5 km/h
/// - 25 m pool by default
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Strokes per minute.
    stroke_rate: f64,
    /// Swim speed in km/h.
    speed_kmh: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    pool_length_m: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            stroke_rate: 30.0,
            speed_kmh: 2.5,
            variance: 0.10,
            pool_length_m: 25.0,
        }
    }
}

impl SwimmerProfile {
    /// Creates a new swimmer profile with the given swim speed in km/h.
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            speed_kmh,
            ..Default::default()
        }
    }

    /// Creates a competitive swimmer profile (~4.0 km/h in a 50 m pool).
    pub fn competitive() -> Self {
        Self {
            stroke_rate: 40.0,
            speed_kmh: 4.0,
            variance: 0.05,
            pool_length_m: 50.0,
        }
    }

    /// Sets the pool length.
    pub fn with_pool_length(mut self, pool_length_m: f64) -> Self {
        self.pool_length_m = pool_length_m;
        self
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn cadence_per_min(&self) -> f64 {
        self.stroke_rate
    }

    fn session_hours(&self) -> (f64, f64) {
        (0.25, 1.5)
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_values(
        &self,
        duration_hours: f64,
        variance_factor: f64,
        _: &mut dyn RngCore,
    ) -> Vec<f64> {
        let swum_m = self.speed_kmh * variance_factor * duration_hours * M_IN_KM;
        let laps = (swum_m / self.pool_length_m).floor();
        vec![self.pool_length_m, laps]
    }
}
