//! Runtime configuration read from environment variables.

use std::{env, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::WorkoutError;
use crate::packages::{Package, builtin_packages, load_packages};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary sentence per workout.
    #[default]
    Text,
    /// One JSON object per workout.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::Invalid("OUTPUT_FORMAT", value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// JSON package file; the built-in packages are used when unset.
    pub packages_path: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let packages_path = lookup("WORKOUT_PACKAGES")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let output_format = match lookup("OUTPUT_FORMAT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            packages_path,
            output_format,
        })
    }

    /// Packages to process, in order.
    pub fn packages(&self) -> Result<Vec<Package>, WorkoutError> {
        match &self.packages_path {
            Some(path) => load_packages(path),
            None => Ok(builtin_packages()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
