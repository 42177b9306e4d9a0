//! REST endpoint handlers for the weather service.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::auth::ApiKey;
use crate::reading::{WeatherReading, WeatherRequest};
use crate::state::AppState;

/// Service name in the descriptor.
pub const SERVICE_NAME: &str = "Weather API";

/// `GET /` -- static service descriptor.
pub async fn index() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/health": "Health check endpoint",
            "/weather": "POST - Get weather for a location",
        },
    }))
}

/// `POST /weather` -- synthetic weather for a location.
///
/// Requires a valid `X-API-Key` header (see [`ApiKey`]).
pub async fn get_weather(
    _key: ApiKey,
    State(state): State<Arc<AppState>>,
    Json(request): Json<WeatherRequest>,
) -> Json<WeatherReading> {
    let reading = {
        let mut noise = state.noise().await;
        WeatherReading::sample(request.location, &mut **noise)
    };
    tracing::info!(
        location = %reading.location,
        temperature = reading.temperature,
        "weather served"
    );
    Json(reading)
}
