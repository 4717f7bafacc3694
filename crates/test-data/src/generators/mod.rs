//! Entity generators for test data.
//!
//! - [`PackageGenerator`]: Generate sensor packages from athlete profiles

pub mod package;

pub use package::{GenError, PackageGenerator};
