//! Test data generation for workouts.
//!
//! This crate generates realistic sensor packages for running, walking and
//! swimming workouts, to exercise the calculator with more than the built-in
//! readings.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let generator = PackageGenerator::with_config(GenConfig {
//!     package_count: 100,
//!     mix: KindMix::only(WorkoutKind::Swimming),
//!     ..Default::default()
//! })?;
//! let packages = generator.generate(&mut rand::thread_rng());
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

// Re-export core types from workouts crate
pub use workouts::models::WorkoutKind;
pub use workouts::packages::Package;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{GenConfig, KindMix};
    pub use crate::generators::{GenError, PackageGenerator};
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use crate::{Package, WorkoutKind};
}
