//! Configuration for the heater controller.
//!
//! Loaded from environment variables:
//!
//! - `HEATER_HOST` -- bind address (default `0.0.0.0`)
//! - `HEATER_PORT` -- TCP port (default `8000`)
//! - `HEATER_MCP_PATH` -- JSON-RPC route (default `/mcp`)
//! - `NOISE_SEED` -- optional `u64` seed for reproducible consumption noise

use homesim_core::config::{self, Lookup};
use homesim_core::{ConfigError, ServerConfig};

/// Default JSON-RPC route.
pub const DEFAULT_MCP_PATH: &str = "/mcp";

/// Complete heater configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaterConfig {
    /// Where to listen.
    pub server: ServerConfig,
    /// Route serving JSON-RPC tool calls.
    pub mcp_path: String,
    /// Seed for the consumption noise source.
    pub noise_seed: Option<u64>,
}

impl Default for HeaterConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            mcp_path: DEFAULT_MCP_PATH.to_owned(),
            noise_seed: None,
        }
    }
}

impl HeaterConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&config::process_env)
    }

    /// Load configuration through `lookup`.
    pub fn from_lookup(lookup: &impl Lookup) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = config::env_or(lookup, "HEATER_HOST", &defaults.server.host);
        let port = config::parse_env(lookup, "HEATER_PORT", defaults.server.port)?;

        let mcp_path = config::env_or(lookup, "HEATER_MCP_PATH", &defaults.mcp_path);
        check_route(&mcp_path).map_err(|message| ConfigError::Invalid {
            name: "HEATER_MCP_PATH".to_owned(),
            message,
        })?;

        let noise_seed = config::parse_optional(lookup, "NOISE_SEED")?;

        Ok(Self {
            server: ServerConfig { host, port },
            mcp_path,
            noise_seed,
        })
    }
}

/// Reject routes the router would refuse at registration time.
///
/// The RPC route is a fixed path: it must start with `/` and may not
/// contain captures (`{name}`), wildcards (`*rest`), or the legacy
/// `:name` capture syntax.
fn check_route(path: &str) -> Result<(), String> {
    if !path.starts_with('/') {
        return Err(format!("route must start with '/': {path}"));
    }
    if path.contains(['{', '}']) {
        return Err(format!("route must not contain '{{' or '}}': {path}"));
    }
    if let Some(segment) = path.split('/').find(|s| s.starts_with([':', '*'])) {
        return Err(format!("route segment must not start with ':' or '*': {segment}"));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = HeaterConfig::from_lookup(&|_: &str| -> Option<String> { None }).unwrap();
        assert_eq!(config, HeaterConfig::default());
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.mcp_path, "/mcp");
    }

    #[test]
    fn overrides_are_applied() {
        let lookup = |name: &str| match name {
            "HEATER_PORT" => Some("9100".to_owned()),
            "HEATER_MCP_PATH" => Some("/rpc".to_owned()),
            "NOISE_SEED" => Some("5".to_owned()),
            _ => None,
        };
        let config = HeaterConfig::from_lookup(&lookup).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.mcp_path, "/rpc");
        assert_eq!(config.noise_seed, Some(5));
    }

    fn with_route(route: &'static str) -> impl Fn(&str) -> Option<String> {
        move |name: &str| (name == "HEATER_MCP_PATH").then(|| route.to_owned())
    }

    #[test]
    fn relative_route_is_rejected() {
        assert!(HeaterConfig::from_lookup(&with_route("mcp")).is_err());
    }

    #[test]
    fn capture_and_wildcard_routes_are_rejected() {
        for route in ["/:rpc", "/api/:rpc", "/*rest", "/{rpc}", "/rpc}", "/rpc{"] {
            let err = HeaterConfig::from_lookup(&with_route(route)).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { ref name, .. } if name == "HEATER_MCP_PATH"),
                "route {route} should be rejected"
            );
        }
    }

    #[test]
    fn nested_static_route_is_accepted() {
        let config = HeaterConfig::from_lookup(&with_route("/api/v1/mcp")).unwrap();
        assert_eq!(config.mcp_path, "/api/v1/mcp");
    }

    #[test]
    fn accepted_routes_build_a_router() {
        for route in ["/mcp", "/api/v1/rpc", "/tools-rpc"] {
            let config = HeaterConfig::from_lookup(&with_route(route)).unwrap();
            let state = std::sync::Arc::new(crate::AppState::new());
            let _router = crate::build_router(state, &config.mcp_path);
        }
    }
}
