//! Mock smart heater controller.
//!
//! Exposes a single in-memory heater setpoint and a synthetic energy
//! consumption estimator as tools callable over a stateless JSON-RPC
//! endpoint (`POST /mcp` by default), plus a `GET /health` liveness probe.
//!
//! # Architecture
//!
//! ```text
//! POST /mcp --> mcp (JSON-RPC envelope) --> tools (argument checks)
//!                                              |
//!                      AppState { SetpointStore, noise } <--+
//! ```
//!
//! The setpoint lives in [`SetpointStore`], an explicitly owned guarded
//! value inside [`AppState`]. Concurrent writers race benignly: the last
//! write wins and each write reports the value it replaced.
//!
//! [`SetpointStore`]: setpoint::SetpointStore
//! [`AppState`]: state::AppState

pub mod config;
pub mod consumption;
pub mod error;
pub mod mcp;
pub mod router;
pub mod setpoint;
pub mod state;
pub mod tools;

// Re-export primary types for convenience.
pub use config::HeaterConfig;
pub use router::build_router;
pub use state::AppState;
