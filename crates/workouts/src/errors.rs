use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unsupported workout type: {0}")]
    UnsupportedWorkoutType(String),

    #[error("Workout {code} expects {expected} values, got {got}")]
    ArityMismatch {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Package parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkoutError {
    /// Whether the error came from the sensor values rather than the package source.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            WorkoutError::UnsupportedWorkoutType(_)
                | WorkoutError::ArityMismatch { .. }
                | WorkoutError::InvalidInput(_)
        )
    }
}
