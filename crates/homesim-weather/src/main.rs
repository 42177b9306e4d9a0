//! Weather service entry point.
//!
//! Initializes logging, loads configuration from the environment, and
//! serves the weather API until `Ctrl-C` or `SIGTERM`.

use std::sync::Arc;

use homesim_core::{logging, noise_from_seed, serve, shutdown_signal};
use homesim_weather::error::ServiceError;
use homesim_weather::{AppState, WeatherConfig, build_router};
use tracing::{Instrument, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let span = logging::init_tracing("homesim-weather");
    run().instrument(span).await
}

async fn run() -> anyhow::Result<()> {
    info!("homesim-weather starting");

    let config = WeatherConfig::from_env().map_err(ServiceError::from)?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        api_key_configured = config.api_key.is_some(),
        "configuration loaded"
    );
    if config.api_key.is_none() {
        warn!("API_KEY is not set; every weather lookup will fail with 500");
    }

    let state = Arc::new(AppState::with_noise(
        config.api_key.clone(),
        noise_from_seed(config.noise_seed),
    ));

    serve(&config.server, build_router(state), shutdown_signal())
        .await
        .map_err(ServiceError::from)?;

    info!("homesim-weather shutdown complete");
    Ok(())
}
