//! Human-readable workout summaries.

use std::fmt;

use serde::Serialize;

use crate::models::Workout;
use crate::scoring::score_workout;

/// Results of one workout, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutReport {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl WorkoutReport {
    /// Scores the workout and captures the results.
    pub fn from_workout(workout: &Workout) -> Self {
        let scores = score_workout(workout);
        Self {
            training_type: workout.kind().label().to_string(),
            duration: workout.sample().duration_hours,
            distance: scores.distance,
            speed: scores.speed,
            calories: scores.calories,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swimming_message() {
        let workout = Workout::swimming(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();
        assert_eq!(
            WorkoutReport::from_workout(&workout).message(),
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_running_message() {
        let workout = Workout::running(15000.0, 1.0, 75.0).unwrap();
        assert_eq!(
            WorkoutReport::from_workout(&workout).message(),
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn test_walking_message() {
        let workout = Workout::walking(9000.0, 1.0, 75.0, 180.0).unwrap();
        assert_eq!(
            WorkoutReport::from_workout(&workout).message(),
            "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Avg speed: 5.850 km/h; Calories burned: 157.500."
        );
    }

    #[test]
    fn test_three_decimals_for_large_and_small_values() {
        let report = WorkoutReport {
            training_type: "Running".into(),
            duration: 0.25,
            distance: 12345.6789,
            speed: 0.0,
            calories: 1e-7,
        };
        assert_eq!(
            report.to_string(),
            "Training type: Running; Duration: 0.250 h; Distance: 12345.679 km; \
             Avg speed: 0.000 km/h; Calories burned: 0.000."
        );
    }

    #[test]
    fn test_serializes_fields() {
        let workout = Workout::running(15000.0, 1.0, 75.0).unwrap();
        let json = serde_json::to_value(WorkoutReport::from_workout(&workout)).unwrap();
        assert_eq!(json["training_type"], "Running");
        assert_eq!(json["duration"], 1.0);
    }
}
