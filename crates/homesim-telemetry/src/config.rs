//! Configuration for the telemetry simulator.
//!
//! All configuration is loaded from environment variables, as set by the
//! container task definition.
//!
//! Required:
//! - `DELIVERY_STREAM_NAME` -- Firehose delivery stream to write to
//! - `AWS_REGION` -- region hosting the stream
//!
//! Optional:
//! - `TELEMETRY_INTERVAL_SECS` -- pause between cycles (default `30`)
//! - `NOISE_SEED` -- `u64` seed for reproducible readings

use std::time::Duration;

use homesim_core::ConfigError;
use homesim_core::config::{self, Lookup};

use crate::simulator::DEFAULT_INTERVAL;

/// Complete simulator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Delivery stream name.
    pub delivery_stream_name: String,
    /// AWS region of the stream.
    pub region: String,
    /// Pause between cycles.
    pub interval: Duration,
    /// Seed for the reading noise source.
    pub noise_seed: Option<u64>,
}

impl TelemetryConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&config::process_env)
    }

    /// Load configuration through `lookup`.
    pub fn from_lookup(lookup: &impl Lookup) -> Result<Self, ConfigError> {
        let delivery_stream_name = config::required(lookup, "DELIVERY_STREAM_NAME")?;
        let region = config::required(lookup, "AWS_REGION")?;

        let interval_secs: u64 =
            config::parse_env(lookup, "TELEMETRY_INTERVAL_SECS", DEFAULT_INTERVAL.as_secs())?;
        if interval_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "TELEMETRY_INTERVAL_SECS".to_owned(),
                message: "interval must be at least one second".to_owned(),
            });
        }

        let noise_seed = config::parse_optional(lookup, "NOISE_SEED")?;

        Ok(Self {
            delivery_stream_name,
            region,
            interval: Duration::from_secs(interval_secs),
            noise_seed,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base(name: &str) -> Option<String> {
        match name {
            "DELIVERY_STREAM_NAME" => Some("room-telemetry".to_owned()),
            "AWS_REGION" => Some("eu-west-1".to_owned()),
            _ => None,
        }
    }

    #[test]
    fn required_values_and_defaults() {
        let config = TelemetryConfig::from_lookup(&base).unwrap();
        assert_eq!(config.delivery_stream_name, "room-telemetry");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.interval, Duration::from_secs(30));
        assert_eq!(config.noise_seed, None);
    }

    #[test]
    fn missing_stream_name_is_fatal() {
        let lookup = |name: &str| (name == "AWS_REGION").then(|| "eu-west-1".to_owned());
        let err = TelemetryConfig::from_lookup(&lookup).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ref n) if n == "DELIVERY_STREAM_NAME"));
    }

    #[test]
    fn missing_region_is_fatal() {
        let lookup =
            |name: &str| (name == "DELIVERY_STREAM_NAME").then(|| "room-telemetry".to_owned());
        let err = TelemetryConfig::from_lookup(&lookup).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ref n) if n == "AWS_REGION"));
    }

    #[test]
    fn interval_override_and_zero_rejection() {
        let lookup = |name: &str| match name {
            "TELEMETRY_INTERVAL_SECS" => Some("5".to_owned()),
            other => base(other),
        };
        let config = TelemetryConfig::from_lookup(&lookup).unwrap();
        assert_eq!(config.interval, Duration::from_secs(5));

        let lookup = |name: &str| match name {
            "TELEMETRY_INTERVAL_SECS" => Some("0".to_owned()),
            other => base(other),
        };
        assert!(TelemetryConfig::from_lookup(&lookup).is_err());
    }
}
