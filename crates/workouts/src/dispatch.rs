//! Resolves sensor packages into workouts.

use crate::errors::WorkoutError;
use crate::models::{Training, Workout, WorkoutKind, WorkoutSample};

/// Builds a workout from a sensor code and its positional values.
///
/// Values bind in a fixed order: action, duration, weight, then the
/// kind-specific fields (`height` for walking, `pool length` and
/// `pool count` for swimming).
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutKind = code.parse()?;

    if values.len() != kind.value_count() {
        return Err(WorkoutError::ArityMismatch {
            code: code.to_string(),
            expected: kind.value_count(),
            got: values.len(),
        });
    }

    let sample = WorkoutSample {
        action: values[0],
        duration_hours: values[1],
        weight_kg: values[2],
    };
    let training = match kind {
        WorkoutKind::Running => Training::Running,
        WorkoutKind::Walking => Training::Walking {
            height_cm: values[3],
        },
        WorkoutKind::Swimming => Training::Swimming {
            pool_length_m: values[3],
            pool_count: values[4],
        },
    };

    Workout::new(sample, training)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_each_code() {
        assert_eq!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
                .unwrap()
                .kind(),
            WorkoutKind::Swimming
        );
        assert_eq!(
            read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap().kind(),
            WorkoutKind::Running
        );
        assert_eq!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
                .unwrap()
                .kind(),
            WorkoutKind::Walking
        );
    }

    #[test]
    fn test_binds_values_in_order() {
        let workout = read_package("SWM", &[720.0, 1.5, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(workout.sample().action, 720.0);
        assert_eq!(workout.sample().duration_hours, 1.5);
        assert_eq!(workout.sample().weight_kg, 80.0);
        assert_eq!(
            *workout.training(),
            Training::Swimming {
                pool_length_m: 25.0,
                pool_count: 40.0
            }
        );
    }

    #[test]
    fn test_unknown_code() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::UnsupportedWorkoutType(code) if code == "XYZ"));
    }

    #[test]
    fn test_unknown_code_checked_before_values() {
        let err = read_package("XYZ", &[]).unwrap_err();
        assert!(matches!(err, WorkoutError::UnsupportedWorkoutType(_)));
    }

    #[test]
    fn test_walking_missing_height() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::ArityMismatch {
                expected: 4,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_running_extra_value() {
        let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::ArityMismatch { .. }));
    }

    #[test]
    fn test_invalid_duration() {
        let err = read_package("RUN", &[15000.0, -1.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));
    }
}
