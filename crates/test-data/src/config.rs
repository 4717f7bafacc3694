//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};
use workouts::models::WorkoutKind;

/// Relative weights for picking the workout kind of each generated package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindMix {
    pub running: f64,
    pub walking: f64,
    pub swimming: f64,
}

impl Default for KindMix {
    fn default() -> Self {
        Self {
            running: 1.0,
            walking: 1.0,
            swimming: 1.0,
        }
    }
}

impl KindMix {
    /// Produces packages of a single kind only.
    pub fn only(kind: WorkoutKind) -> Self {
        let mut mix = Self {
            running: 0.0,
            walking: 0.0,
            swimming: 0.0,
        };
        match kind {
            WorkoutKind::Running => mix.running = 1.0,
            WorkoutKind::Walking => mix.walking = 1.0,
            WorkoutKind::Swimming => mix.swimming = 1.0,
        }
        mix
    }

    pub fn weight(&self, kind: WorkoutKind) -> f64 {
        match kind {
            WorkoutKind::Running => self.running,
            WorkoutKind::Walking => self.walking,
            WorkoutKind::Swimming => self.swimming,
        }
    }
}

/// Configuration for package generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Number of packages to generate.
    pub package_count: usize,

    /// Share of each workout kind.
    pub mix: KindMix,

    /// Body weight in kilograms (mean, std deviation).
    pub weight_kg: (f64, f64),
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            package_count: 10,
            mix: KindMix::default(),
            weight_kg: (72.0, 11.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_selects_one_kind() {
        let mix = KindMix::only(WorkoutKind::Swimming);
        assert_eq!(mix.weight(WorkoutKind::Swimming), 1.0);
        assert_eq!(mix.weight(WorkoutKind::Running), 0.0);
        assert_eq!(mix.weight(WorkoutKind::Walking), 0.0);
    }

    #[test]
    fn test_config_deserializes() {
        let config: GenConfig = serde_json::from_str(
            r#"{"package_count": 3, "mix": {"running": 2, "walking": 1, "swimming": 0}, "weight_kg": [80, 5]}"#,
        )
        .unwrap();
        assert_eq!(config.package_count, 3);
        assert_eq!(config.mix.weight(WorkoutKind::Running), 2.0);
        assert_eq!(config.weight_kg, (80.0, 5.0));
    }
}
