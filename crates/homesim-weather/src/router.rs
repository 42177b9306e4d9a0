//! Axum router construction for the weather service.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use homesim_core::health::health;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the weather router.
///
/// - `GET /health` -- liveness probe
/// - `GET /` -- service descriptor
/// - `POST /weather` -- keyed weather lookup
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(health))
        .route("/weather", post(handlers::get_weather))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
