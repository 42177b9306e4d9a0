//! Heater controller entry point.
//!
//! Initializes logging, loads configuration from the environment, and
//! serves the tool endpoint and liveness probe until `Ctrl-C` or
//! `SIGTERM`.

use std::sync::Arc;

use homesim_core::{logging, noise_from_seed, serve, shutdown_signal};
use homesim_heater::error::HeaterError;
use homesim_heater::{AppState, HeaterConfig, build_router};
use tracing::{Instrument, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let span = logging::init_tracing("homesim-heater");
    run().instrument(span).await
}

async fn run() -> anyhow::Result<()> {
    info!("homesim-heater starting");

    let config = HeaterConfig::from_env().map_err(HeaterError::from)?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        mcp_path = %config.mcp_path,
        seeded = config.noise_seed.is_some(),
        "configuration loaded"
    );

    let state = Arc::new(AppState::with_noise(noise_from_seed(config.noise_seed)));
    let router = build_router(state, &config.mcp_path);

    serve(&config.server, router, shutdown_signal())
        .await
        .map_err(HeaterError::from)?;

    info!("homesim-heater shutdown complete");
    Ok(())
}
