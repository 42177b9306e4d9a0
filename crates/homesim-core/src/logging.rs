//! Structured logging setup.
//!
//! All services log through `tracing`. The filter comes from `RUST_LOG`
//! (default `info`); setting `LOG_FORMAT=json` switches to one JSON
//! object per line for log shippers.

use tracing::{Span, info_span};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber and return the root span for
/// `service`.
///
/// Must be called once, before any other logging, from a binary's
/// `main`. A second call keeps the first subscriber. Every event emitted
/// inside the returned span carries a `service` field, so binaries run
/// their body with `.instrument(span)`.
pub fn init_tracing(service: &'static str) -> Span {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }

    info_span!("service", service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_keeps_first_subscriber() {
        let first = init_tracing("homesim-test");
        let second = init_tracing("homesim-test");
        assert_eq!(first.metadata().map(|m| m.name()), second.metadata().map(|m| m.name()));
    }
}
