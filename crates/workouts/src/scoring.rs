use crate::models::{M_IN_KM, MIN_IN_H, Scores, Training, Workout};

pub trait WorkoutMetric {
    type Score;
    fn measure(&self, workout: &Workout) -> Self::Score;
}

pub fn score_workout(workout: &Workout) -> Scores {
    Metrics::new().measure(workout)
}

/// Distance in kilometers, derived from the action count and the step length.
pub fn distance(workout: &Workout) -> f64 {
    DistanceMetric.measure(workout)
}

/// Mean speed in km/h.
pub fn mean_speed(workout: &Workout) -> f64 {
    SpeedMetric.measure(workout)
}

pub fn spent_calories(workout: &Workout) -> f64 {
    CaloriesMetric.measure(workout)
}

#[derive(Debug, Clone, Default)]
struct Metrics {
    distance: Option<DistanceMetric>,
    speed: Option<SpeedMetric>,
    calories: Option<CaloriesMetric>,
}
impl Metrics {
    fn new() -> Self {
        Self {
            distance: Some(DistanceMetric),
            speed: Some(SpeedMetric),
            calories: Some(CaloriesMetric),
        }
    }
}
impl WorkoutMetric for Metrics {
    type Score = Scores;
    fn measure(&self, workout: &Workout) -> Scores {
        let mut scores = Scores::default();
        if let Some(distance) = &self.distance {
            scores.distance = distance.measure(workout);
        }
        if let Some(speed) = &self.speed {
            scores.speed = speed.measure(workout);
        }
        if let Some(calories) = &self.calories {
            scores.calories = calories.measure(workout);
        }
        tracing::debug!(
            kind = %workout.kind(),
            distance = scores.distance,
            speed = scores.speed,
            calories = scores.calories,
            "Scored workout"
        );
        scores
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct DistanceMetric;

impl WorkoutMetric for DistanceMetric {
    type Score = f64;
    fn measure(&self, workout: &Workout) -> f64 {
        workout.sample().action * workout.kind().step_length() / M_IN_KM
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SpeedMetric;

impl WorkoutMetric for SpeedMetric {
    type Score = f64;
    fn measure(&self, workout: &Workout) -> f64 {
        let duration = workout.sample().duration_hours;
        match *workout.training() {
            // Pool geometry, not stroke count.
            Training::Swimming {
                pool_length_m,
                pool_count,
            } => pool_length_m * pool_count / M_IN_KM / duration,
            Training::Running | Training::Walking { .. } => {
                DistanceMetric.measure(workout) / duration
            }
        }
    }
}

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, Default)]
struct CaloriesMetric;

impl WorkoutMetric for CaloriesMetric {
    type Score = f64;
    fn measure(&self, workout: &Workout) -> f64 {
        let sample = workout.sample();
        let speed = SpeedMetric.measure(workout);
        let minutes = sample.duration_hours * MIN_IN_H;

        match *workout.training() {
            Training::Running => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * sample.weight_kg / M_IN_KM
                    * minutes
            }
            Training::Walking { height_cm } => {
                // Floor of the whole quotient, not of the speed.
                let speed_height = (speed.powi(2) / height_cm).floor();
                (WALK_WEIGHT_MULTIPLIER * sample.weight_kg
                    + speed_height * WALK_SPEED_HEIGHT_MULTIPLIER * sample.weight_kg)
                    * minutes
            }
            Training::Swimming { .. } => {
                (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * sample.weight_kg
            }
        }
    }
}
