//! Static shared-secret check for the weather lookup.
//!
//! [`ApiKey`] is an extractor, so it runs before the JSON body is read:
//! an unauthorized caller gets 401 (or 500 if the server has no key)
//! regardless of what the body contains.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::WeatherError;
use crate::state::AppState;

/// Header carrying the caller's key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Proof that the request carried the configured API key.
#[derive(Debug, Clone, Copy)]
pub struct ApiKey;

impl FromRequestParts<Arc<AppState>> for ApiKey {
    type Rejection = WeatherError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());
        verify_api_key(state.api_key(), presented)?;
        Ok(Self)
    }
}

/// Compare the presented key against the expected one.
///
/// The configuration check comes first so a misconfigured server is
/// reported as such even to callers that sent no key.
pub fn verify_api_key(expected: Option<&str>, presented: Option<&str>) -> Result<(), WeatherError> {
    let Some(expected) = expected else {
        tracing::error!("weather lookup refused: API key not configured");
        return Err(WeatherError::ApiKeyNotConfigured);
    };

    if presented == Some(expected) {
        Ok(())
    } else {
        tracing::warn!(present = presented.is_some(), "weather lookup refused: invalid API key");
        Err(WeatherError::InvalidApiKey)
    }
}
