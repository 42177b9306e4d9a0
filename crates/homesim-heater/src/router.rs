//! Axum router construction for the heater controller.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use homesim_core::health::health;
use tower_http::trace::TraceLayer;

use crate::mcp;
use crate::state::AppState;

/// Build the heater router.
///
/// - `GET /health` -- liveness probe
/// - `POST {mcp_path}` -- JSON-RPC tool endpoint
///
/// `mcp_path` must be a static route, as checked by
/// [`HeaterConfig::from_lookup`](crate::HeaterConfig::from_lookup).
pub fn build_router(state: Arc<AppState>, mcp_path: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(mcp_path, post(mcp::handle_rpc))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
