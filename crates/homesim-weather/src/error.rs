//! Error types for the weather service.
//!
//! [`WeatherError`] converts into an HTTP response whose body mirrors the
//! `{"detail": ...}` shape clients of the service already parse.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use homesim_core::{ConfigError, ServerError};

/// Errors returned by the weather endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeatherError {
    /// The caller's key is missing or does not match.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// No key is configured server-side, so no caller can be authorized.
    #[error("API key not configured")]
    ApiKeyNotConfigured,
}

impl WeatherError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidApiKey => StatusCode::UNAUTHORIZED,
            Self::ApiKeyNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Top-level error for the weather binary.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration loading failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP server failed to bind or serve.
    #[error("server error: {0}")]
    Server(#[from] ServerError),
}
