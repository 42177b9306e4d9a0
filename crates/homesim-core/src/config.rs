//! Environment variable helpers shared by the service configs.
//!
//! Each service reads its configuration from the environment (the
//! services are deployed as container tasks). Loading goes through a
//! [`Lookup`] closure so tests can feed a map instead of mutating the
//! process environment.

use std::str::FromStr;

/// Reads a configuration value by name. `None` means unset.
pub trait Lookup: Fn(&str) -> Option<String> {}

impl<F: Fn(&str) -> Option<String>> Lookup for F {}

/// Lookup backed by the real process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Errors raised while loading service configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set (or is empty).
    #[error("missing required env var {0}")]
    Missing(String),

    /// A variable is set but its value cannot be parsed.
    #[error("invalid {name}: {message}")]
    Invalid {
        /// The variable name.
        name: String,
        /// What was wrong with the value.
        message: String,
    },
}

/// Read a required, non-empty variable.
pub fn required(lookup: &impl Lookup, name: &str) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::Missing(name.to_owned()))
}

/// Read a variable, falling back to `default` when unset.
pub fn env_or(lookup: &impl Lookup, name: &str, default: &str) -> String {
    lookup(name).unwrap_or_else(|| default.to_owned())
}

/// Parse a variable, falling back to `default` when unset.
pub fn parse_env<T>(lookup: &impl Lookup, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name: name.to_owned(),
            message: format!("{e}"),
        }),
    }
}

/// Parse an optional variable. Unset or empty yields `None`.
pub fn parse_optional<T>(lookup: &impl Lookup, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|v| !v.trim().is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                name: name.to_owned(),
                message: format!("{e}"),
            }),
    }
}
