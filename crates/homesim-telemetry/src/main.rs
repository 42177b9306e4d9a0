//! Telemetry simulator entry point.
//!
//! Initializes logging, loads configuration from the environment,
//! connects to the Firehose delivery stream, and runs the telemetry loop
//! until `Ctrl-C` or `SIGTERM`, letting the in-flight cycle finish.

use homesim_core::{logging, noise_from_seed, shutdown_signal};
use homesim_telemetry::error::TelemetryError;
use homesim_telemetry::{FirehoseStream, Simulator, StopSignal, TelemetryConfig, default_rooms};
use tracing::{Instrument, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let span = logging::init_tracing("homesim-telemetry");
    run().instrument(span).await
}

async fn run() -> anyhow::Result<()> {
    info!("homesim-telemetry starting");

    let config = TelemetryConfig::from_env().map_err(TelemetryError::from)?;
    let rooms = default_rooms();
    info!(
        delivery_stream = %config.delivery_stream_name,
        region = %config.region,
        rooms = %rooms
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        interval_secs = config.interval.as_secs(),
        "configuration loaded"
    );

    let stream = FirehoseStream::connect(&config.delivery_stream_name, &config.region).await;
    let mut simulator = Simulator::new(
        stream,
        rooms,
        noise_from_seed(config.noise_seed),
        config.interval,
    );

    let stop = StopSignal::new();
    let loop_stop = stop.clone();
    let handle = tokio::spawn(async move { simulator.run(&loop_stop).await }.in_current_span());

    shutdown_signal().await;
    stop.stop();

    let summary = handle.await?;
    info!(
        cycles = summary.cycles,
        delivered = summary.delivered,
        failed = summary.failed,
        "homesim-telemetry shutdown complete"
    );
    Ok(())
}
