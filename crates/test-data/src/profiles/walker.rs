//! Sports walker athletic profile.

use rand::RngCore;
use workouts::models::WorkoutKind;

use super::{AthleteProfile, round_to, sample_clamped};

/// Athletic profile for sports walking.
///
/// Based on typical brisk walking:
/// - Cadence: ~115 steps/min (~4.5 km/h with a 0.65 m step)
/// - Sessions: 30 minutes to 2.5 hours
/// - Walker height drawn around 172 cm
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Steps per minute.
    cadence: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    /// Mean walker height in centimeters.
    height_cm: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence: 115.0,
            variance: 0.10,
            height_cm: 172.0,
        }
    }
}

impl WalkerProfile {
    /// Creates a new walker profile with the given cadence in steps per minute.
    pub fn with_cadence(cadence: f64) -> Self {
        Self {
            cadence,
            ..Default::default()
        }
    }

    /// Creates a race walker profile (~150 steps/min).
    pub fn race_walker() -> Self {
        Self {
            cadence: 150.0,
            variance: 0.06,
            ..Default::default()
        }
    }

    /// Creates a leisurely walker profile (~95 steps/min).
    pub fn leisurely() -> Self {
        Self::with_cadence(95.0)
    }

    /// Sets the mean walker height.
    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = height_cm;
        self
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn cadence_per_min(&self) -> f64 {
        self.cadence
    }

    fn session_hours(&self) -> (f64, f64) {
        (0.5, 2.5)
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_values(&self, _: f64, _: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        let height = sample_clamped(self.height_cm, 8.0, 140.0, 210.0, rng);
        vec![round_to(height, 0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_profile() {
        let profile = WalkerProfile::default();
        assert_eq!(profile.kind(), WorkoutKind::Walking);
        assert!(profile.cadence_per_min() < 130.0);
    }

    #[test]
    fn test_height_is_plausible() {
        let profile = WalkerProfile::default().with_height(180.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let values = profile.extra_values(1.0, 1.0, &mut rng);
            assert_eq!(values.len(), 1);
            assert!((140.0..=210.0).contains(&values[0]));
        }
    }
}
