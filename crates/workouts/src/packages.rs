//! Sensor packages: the raw `(code, values)` pairs fed to the dispatcher.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatch::read_package;
use crate::errors::WorkoutError;
use crate::models::Workout;

/// One reading from a sensor: a workout code and its positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }

    pub fn to_workout(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.code, &self.values)
    }
}

/// Packages processed when no package file is configured.
pub fn builtin_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parses a JSON array of packages.
pub fn parse_packages(json: &str) -> Result<Vec<Package>, WorkoutError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON package file.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>, WorkoutError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let packages = parse_packages(&contents)?;
    tracing::debug!(path = %path.display(), count = packages.len(), "Loaded packages");
    Ok(packages)
}
