//! Configuration for the weather service.
//!
//! Loaded from environment variables:
//!
//! - `API_KEY` -- shared secret callers must send as `X-API-Key`.
//!   Empty or unset leaves the service unconfigured: every lookup fails
//!   with 500.
//! - `WEATHER_HOST` -- bind address (default `0.0.0.0`)
//! - `WEATHER_PORT` -- TCP port (default `8000`)
//! - `NOISE_SEED` -- optional `u64` seed for reproducible readings

use homesim_core::config::{self, Lookup};
use homesim_core::{ConfigError, ServerConfig};

/// Complete weather service configuration.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct WeatherConfig {
    /// Where to listen.
    pub server: ServerConfig,
    /// Expected API key, `None` when unconfigured.
    pub api_key: Option<String>,
    /// Seed for the reading noise source.
    pub noise_seed: Option<u64>,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("server", &self.server)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("noise_seed", &self.noise_seed)
            .finish()
    }
}

impl WeatherConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&config::process_env)
    }

    /// Load configuration through `lookup`.
    pub fn from_lookup(lookup: &impl Lookup) -> Result<Self, ConfigError> {
        let defaults = ServerConfig::default();
        let host = config::env_or(lookup, "WEATHER_HOST", &defaults.host);
        let port = config::parse_env(lookup, "WEATHER_PORT", defaults.port)?;
        let api_key = lookup("API_KEY").filter(|k| !k.is_empty());
        let noise_seed = config::parse_optional(lookup, "NOISE_SEED")?;

        Ok(Self {
            server: ServerConfig { host, port },
            api_key,
            noise_seed,
        })
    }
}
