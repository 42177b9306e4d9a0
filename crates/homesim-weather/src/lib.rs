//! Mock weather lookup API.
//!
//! Returns a synthetic, always-freezing temperature for any location.
//! The lookup endpoint is gated by a static shared secret sent in the
//! `X-API-Key` header; the health probe and service descriptor are open.
//!
//! | Method | Path | Auth | Description |
//! |--------|------|------|-------------|
//! | `GET` | `/health` | none | Liveness probe |
//! | `GET` | `/` | none | Service descriptor |
//! | `POST` | `/weather` | `X-API-Key` | Weather for a location |

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod reading;
pub mod router;
pub mod state;

// Re-export primary types for convenience.
pub use config::WeatherConfig;
pub use router::build_router;
pub use state::AppState;
