//! Shared plumbing for the homesim mock services.
//!
//! The heater controller, telemetry simulator, and weather service are
//! independent leaves. This crate holds the few pieces they have in
//! common:
//!
//! - [`noise`] -- injectable random sources for synthetic values
//! - [`round`] -- decimal rounding used by every generated reading
//! - [`health`] -- the `GET /health` liveness probe
//! - [`server`] -- bind / serve / graceful shutdown for the HTTP services
//! - [`logging`] -- `tracing` subscriber installation
//! - [`config`] -- environment variable parsing helpers

pub mod config;
pub mod health;
pub mod logging;
pub mod noise;
pub mod round;
pub mod server;

// Re-export primary types for convenience.
pub use config::{ConfigError, Lookup};
pub use noise::{DynNoise, NoiseSource, RngNoise, SequenceNoise, noise_from_seed};
pub use round::round_to;
pub use server::{ServerConfig, ServerError, serve, shutdown_signal};
