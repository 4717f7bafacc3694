//! Sensor package generation from athlete profiles.

use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};
use thiserror::Error;
use workouts::models::{MIN_IN_H, WorkoutKind};
use workouts::packages::Package;

use crate::config::GenConfig;
use crate::profiles::{
    AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, round_to, sample_clamped,
    sample_variance,
};

#[derive(Debug, Error)]
pub enum GenError {
    #[error("Invalid kind mix: {0}")]
    InvalidMix(String),
}

/// Generates sensor packages with realistic values.
pub struct PackageGenerator {
    config: GenConfig,
    profiles: Vec<Box<dyn AthleteProfile>>,
    kinds: WeightedIndex<f64>,
}

impl PackageGenerator {
    /// Creates a new package generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(GenConfig::default()).expect("default mix has positive weights")
    }

    /// Creates a generator with custom configuration and default profiles.
    pub fn with_config(config: GenConfig) -> Result<Self, GenError> {
        Self::with_profiles(
            config,
            vec![
                Box::new(RunnerProfile::default()),
                Box::new(WalkerProfile::default()),
                Box::new(SwimmerProfile::default()),
            ],
        )
    }

    /// Creates a generator drawing from the given profiles.
    ///
    /// Each profile is picked with the mix weight of its workout kind.
    pub fn with_profiles(
        config: GenConfig,
        profiles: Vec<Box<dyn AthleteProfile>>,
    ) -> Result<Self, GenError> {
        let weights: Vec<f64> = profiles
            .iter()
            .map(|profile| config.mix.weight(profile.kind()))
            .collect();
        let kinds =
            WeightedIndex::new(&weights).map_err(|e| GenError::InvalidMix(e.to_string()))?;

        Ok(Self {
            config,
            profiles,
            kinds,
        })
    }

    /// Generates the configured number of packages.
    pub fn generate(&self, rng: &mut impl Rng) -> Vec<Package> {
        let packages: Vec<Package> = (0..self.config.package_count)
            .map(|_| self.generate_one(rng))
            .collect();
        tracing::debug!(count = packages.len(), "Generated packages");
        packages
    }

    /// Generates one package from a profile picked by the kind mix.
    pub fn generate_one(&self, rng: &mut impl Rng) -> Package {
        let profile = &self.profiles[self.kinds.sample(rng)];
        self.for_profile(profile.as_ref(), rng)
    }

    /// Generates one package for a specific profile.
    pub fn for_profile(&self, profile: &dyn AthleteProfile, rng: &mut impl Rng) -> Package {
        let (min_hours, max_hours) = profile.session_hours();
        let duration = round_to(rng.gen_range(min_hours..=max_hours), 2);
        let variance = sample_variance(profile, rng);

        let action = (profile.cadence_per_min() * variance * duration * MIN_IN_H).round();
        let (weight_mean, weight_std) = self.config.weight_kg;
        let weight = round_to(sample_clamped(weight_mean, weight_std, 40.0, 150.0, rng), 1);

        let mut values = vec![action, duration, weight];
        values.extend(profile.extra_values(duration, variance, rng));

        Package::new(profile.kind().code(), values)
    }

    /// Generates one package of the given kind using the first matching profile.
    pub fn for_kind(&self, kind: WorkoutKind, rng: &mut impl Rng) -> Option<Package> {
        self.profiles
            .iter()
            .find(|profile| profile.kind() == kind)
            .map(|profile| self.for_profile(profile.as_ref(), rng))
    }
}

impl Default for PackageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KindMix;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generates_configured_count() {
        let generator = PackageGenerator::with_config(GenConfig {
            package_count: 25,
            ..Default::default()
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generator.generate(&mut rng).len(), 25);
    }

    #[test]
    fn test_value_counts_match_kind() {
        let generator = PackageGenerator::new();
        let mut rng = StdRng::seed_from_u64(2);
        for package in generator.generate(&mut rng) {
            let kind: WorkoutKind = package.code.parse().unwrap();
            assert_eq!(package.values.len(), kind.value_count());
        }
    }

    #[test]
    fn test_single_kind_mix() {
        let generator = PackageGenerator::with_config(GenConfig {
            package_count: 20,
            mix: KindMix::only(WorkoutKind::Walking),
            ..Default::default()
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(
            generator
                .generate(&mut rng)
                .iter()
                .all(|p| p.code == "WLK")
        );
    }

    #[test]
    fn test_all_zero_mix_rejected() {
        let result = PackageGenerator::with_config(GenConfig {
            mix: KindMix {
                running: 0.0,
                walking: 0.0,
                swimming: 0.0,
            },
            ..Default::default()
        });
        assert!(matches!(result, Err(GenError::InvalidMix(_))));
    }

    #[test]
    fn test_same_seed_same_packages() {
        let generator = PackageGenerator::new();
        let first = generator.generate(&mut StdRng::seed_from_u64(42));
        let second = generator.generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_for_kind() {
        let generator = PackageGenerator::new();
        let mut rng = StdRng::seed_from_u64(4);
        let package = generator.for_kind(WorkoutKind::Swimming, &mut rng).unwrap();
        assert_eq!(package.code, "SWM");
        assert_eq!(package.values[3], 25.0);
    }
}
