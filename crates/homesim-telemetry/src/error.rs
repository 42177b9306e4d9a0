//! Error types for the telemetry simulator.

use homesim_core::ConfigError;

/// Errors that can occur in the telemetry pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A reading could not be serialized.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The delivery stream rejected or failed to accept a record.
    #[error("delivery error: {0}")]
    Delivery(String),
}
