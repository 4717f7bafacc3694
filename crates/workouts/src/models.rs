use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutError;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Step length in meters for running and walking.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in meters for swimming.
pub const LEN_STROKE: f64 = 1.38;

/// The three supported workout kinds, keyed by their sensor code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    Walking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::Walking,
    ];

    /// Three-letter code sent by the sensor.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label shown as the training type in reports.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Distance covered per action (step or stroke), in meters.
    pub fn step_length(self) -> f64 {
        match self {
            WorkoutKind::Swimming => LEN_STROKE,
            WorkoutKind::Running | WorkoutKind::Walking => LEN_STEP,
        }
    }

    /// Number of positional values a package of this kind carries.
    pub fn value_count(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "SWM" => Ok(WorkoutKind::Swimming),
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::Walking),
            other => Err(WorkoutError::UnsupportedWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Readings common to every workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSample {
    /// Steps or strokes.
    pub action: f64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

/// Kind-specific readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Training {
    Running,
    Walking { height_cm: f64 },
    Swimming { pool_length_m: f64, pool_count: f64 },
}

impl Training {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Training::Running => WorkoutKind::Running,
            Training::Walking { .. } => WorkoutKind::Walking,
            Training::Swimming { .. } => WorkoutKind::Swimming,
        }
    }
}

/// A validated workout. Fields are fixed once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    sample: WorkoutSample,
    training: Training,
}

impl Workout {
    pub fn new(sample: WorkoutSample, training: Training) -> Result<Self, WorkoutError> {
        check_finite("action", sample.action)?;
        check_finite("duration", sample.duration_hours)?;
        check_finite("weight", sample.weight_kg)?;
        if sample.action < 0.0 {
            return Err(WorkoutError::InvalidInput(format!(
                "action count must not be negative, got {}",
                sample.action
            )));
        }
        check_positive("duration", sample.duration_hours)?;
        check_positive("weight", sample.weight_kg)?;

        match training {
            Training::Running => {}
            Training::Walking { height_cm } => {
                check_finite("height", height_cm)?;
                check_positive("height", height_cm)?;
            }
            Training::Swimming {
                pool_length_m,
                pool_count,
            } => {
                check_finite("pool length", pool_length_m)?;
                check_finite("pool count", pool_count)?;
                check_positive("pool length", pool_length_m)?;
                if pool_count < 0.0 {
                    return Err(WorkoutError::InvalidInput(format!(
                        "pool count must not be negative, got {pool_count}"
                    )));
                }
            }
        }

        Ok(Self { sample, training })
    }

    pub fn running(action: f64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Self::new(
            WorkoutSample {
                action,
                duration_hours,
                weight_kg,
            },
            Training::Running,
        )
    }

    pub fn walking(
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        Self::new(
            WorkoutSample {
                action,
                duration_hours,
                weight_kg,
            },
            Training::Walking { height_cm },
        )
    }

    pub fn swimming(
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: f64,
    ) -> Result<Self, WorkoutError> {
        Self::new(
            WorkoutSample {
                action,
                duration_hours,
                weight_kg,
            },
            Training::Swimming {
                pool_length_m,
                pool_count,
            },
        )
    }

    pub fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    pub fn training(&self) -> &Training {
        &self.training
    }

    pub fn kind(&self) -> WorkoutKind {
        self.training.kind()
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WorkoutError::InvalidInput(format!(
            "{field} must be a finite number, got {value}"
        )))
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), WorkoutError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::InvalidInput(format!(
            "{field} must be greater than zero, got {value}"
        )))
    }
}

/// Computed results for one workout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    pub calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for kind in WorkoutKind::ALL {
            assert_eq!(kind.code().parse::<WorkoutKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = "XYZ".parse::<WorkoutKind>().unwrap_err();
        assert!(matches!(err, WorkoutError::UnsupportedWorkoutType(code) if code == "XYZ"));
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!("run".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn test_step_lengths() {
        assert_eq!(WorkoutKind::Running.step_length(), 0.65);
        assert_eq!(WorkoutKind::Walking.step_length(), 0.65);
        assert_eq!(WorkoutKind::Swimming.step_length(), 1.38);
    }

    #[test]
    fn test_walking_label() {
        assert_eq!(WorkoutKind::Walking.to_string(), "SportsWalking");
    }

    #[test]
    fn test_kind_fixed_by_training() {
        let workout = Workout::swimming(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();
        assert_eq!(workout.kind(), WorkoutKind::Swimming);
    }

    #[test]
    fn test_rejects_zero_duration() {
        let err = Workout::running(1000.0, 0.0, 70.0).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_nan_weight() {
        assert!(Workout::running(1000.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_negative_action() {
        assert!(Workout::running(-1.0, 1.0, 70.0).is_err());
    }

    #[test]
    fn test_rejects_zero_height() {
        assert!(Workout::walking(1000.0, 1.0, 70.0, 0.0).is_err());
    }

    #[test]
    fn test_zero_laps_allowed() {
        assert!(Workout::swimming(0.0, 0.5, 70.0, 25.0, 0.0).is_ok());
    }
}
