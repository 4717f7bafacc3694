use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{config::Config, errors::WorkoutError, run};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    let stdout = io::stdout();

    match run(&config, &mut stdout.lock()) {
        Ok(count) => {
            tracing::info!("Reported {} workouts", count);
            Ok(())
        }
        Err(err) => {
            if let Some(cause) = err.downcast_ref::<WorkoutError>()
                && cause.is_input_error()
            {
                tracing::error!("Rejected sensor package: {err:#}");
            }
            Err(err)
        }
    }
}
