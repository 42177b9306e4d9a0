//! Error types for the heater controller.
//!
//! [`ToolError`] covers argument validation failures raised by the tools.
//! They are reported to the caller inside a successful JSON-RPC response
//! with `isError: true`, so the caller can correct the input and retry.
//! [`HeaterError`] covers process-level failures (config, server).

use homesim_core::{ConfigError, ServerError};

/// A tool rejected its arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// A required argument was not supplied.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// The argument was supplied but is not an integer.
    #[error("{0} must be an integer")]
    NotAnInteger(&'static str),

    /// The temperature is outside the allowed setpoint range.
    #[error("Temperature must be between {min} and {max}°C")]
    TemperatureOutOfRange {
        /// Lowest accepted setpoint.
        min: u8,
        /// Highest accepted setpoint.
        max: u8,
    },

    /// The day count is outside the allowed window.
    #[error("Days must be between {min} and {max}")]
    DaysOutOfRange {
        /// Smallest accepted window.
        min: u16,
        /// Largest accepted window.
        max: u16,
    },
}

/// Top-level error for the heater binary.
#[derive(Debug, thiserror::Error)]
pub enum HeaterError {
    /// Configuration loading failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP server failed to bind or serve.
    #[error("server error: {0}")]
    Server(#[from] ServerError),
}
