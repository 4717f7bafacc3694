//! Athletic performance profiles.
//!
//! Profiles define realistic cadences and session lengths for each workout kind.
//! They are used by the package generator to produce plausible sensor readings.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};
use workouts::models::WorkoutKind;

/// Trait for athletic performance profiles.
///
/// Implementations should provide:
/// - The workout kind the profile produces
/// - Cadence (steps or strokes per minute)
/// - Typical session length
/// - Day-to-day variance
/// - The kind-specific trailing package values
pub trait AthleteProfile: Send + Sync {
    fn kind(&self) -> WorkoutKind;

    /// Actions per minute: steps for running and walking, strokes for swimming.
    fn cadence_per_min(&self) -> f64;

    /// Shortest and longest session, in hours.
    fn session_hours(&self) -> (f64, f64);

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;

    /// Values that follow action, duration and weight in a package.
    fn extra_values(
        &self,
        duration_hours: f64,
        variance_factor: f64,
        rng: &mut dyn RngCore,
    ) -> Vec<f64>;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance<R: Rng + ?Sized>(profile: &dyn AthleteProfile, rng: &mut R) -> f64 {
    sample_clamped(1.0, profile.variance(), 0.7, 1.4, rng)
}

/// Samples a normal value and clamps it to `[min, max]`.
///
/// A zero or invalid standard deviation returns the clamped mean.
pub fn sample_clamped<R: Rng + ?Sized>(
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
    rng: &mut R,
) -> f64 {
    let value = match Normal::new(mean, std_dev) {
        Ok(normal) if std_dev > 0.0 => normal.sample(rng),
        _ => mean,
    };
    value.clamp(min, max)
}

/// Rounds to the given number of decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
