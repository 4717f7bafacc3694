//! Package generator - writes random sensor packages as JSON
//!
//! Run with:
//! ```
//! PACKAGE_COUNT=50 SEED=12345 cargo run -p test-data --bin generate > packages.json
//! WORKOUT_PACKAGES=packages.json cargo run -p workouts
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let package_count = match std::env::var("PACKAGE_COUNT") {
        Ok(value) => value.parse::<usize>()?,
        Err(_) => GenConfig::default().package_count,
    };

    let mut rng = match std::env::var("SEED") {
        Ok(value) => StdRng::seed_from_u64(value.parse()?), // Reproducible data
        Err(_) => StdRng::from_entropy(),
    };

    let generator = PackageGenerator::with_config(GenConfig {
        package_count,
        ..Default::default()
    })?;
    let packages = generator.generate(&mut rng);

    println!("{}", serde_json::to_string_pretty(&packages)?);

    tracing::info!("Generated {} packages", packages.len());
    Ok(())
}
