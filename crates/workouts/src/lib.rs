pub mod config;
pub mod dispatch;
pub mod errors;
pub mod models;
pub mod packages;
pub mod report;
pub mod scoring;

use std::io::Write;

use anyhow::Context;

use crate::{
    config::{Config, OutputFormat},
    packages::Package,
    report::WorkoutReport,
};

/// Dispatches every package in order and writes one line per report.
///
/// Stops at the first package that cannot be turned into a workout; nothing is
/// written for that package. Returns the number of reports written.
pub fn process_packages(
    packages: &[Package],
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    for (index, package) in packages.iter().enumerate() {
        let workout = package
            .to_workout()
            .with_context(|| format!("package #{} ({})", index + 1, package.code))?;
        let report = WorkoutReport::from_workout(&workout);

        match format {
            OutputFormat::Text => writeln!(out, "{report}")?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
        }
        tracing::debug!(index, code = %package.code, "Reported workout");
    }

    Ok(packages.len())
}

/// Loads the configured packages and reports them.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<usize> {
    let packages = config.packages()?;
    tracing::info!(
        count = packages.len(),
        source = %config
            .packages_path
            .as_ref()
            .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        "Processing workout packages"
    );
    process_packages(&packages, config.output_format, out)
}
