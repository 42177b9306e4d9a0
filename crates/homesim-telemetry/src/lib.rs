//! Room telemetry simulator.
//!
//! Synthesizes temperature and humidity readings for a fixed set of rooms
//! and pushes each one, as a newline-terminated JSON record, to an
//! append-only delivery stream.
//!
//! # Architecture
//!
//! ```text
//! Room presets --> RoomReading::sample --> payload --> DeliveryStream::put_record
//!      ^                                                        |
//!      +--------------- sleep(interval) / StopSignal <----------+
//! ```
//!
//! Delivery is best effort: a failed put is logged and skipped, never
//! retried, and never blocks the remaining rooms.

pub mod config;
pub mod delivery;
pub mod error;
pub mod room;
pub mod simulator;

// Re-export primary types for convenience.
pub use config::TelemetryConfig;
pub use delivery::{DeliveryStream, FirehoseStream};
pub use room::{Room, RoomReading, default_rooms};
pub use simulator::{CycleReport, RunSummary, Simulator, StopSignal};
