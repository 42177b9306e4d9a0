//! Room presets and synthetic readings.

use chrono::{DateTime, SecondsFormat, Utc};
use homesim_core::{NoiseSource, round_to};
use serde::{Deserialize, Serialize};

use crate::error::TelemetryError;

/// Temperature drift around the room baseline, in degrees Celsius.
pub const TEMPERATURE_DRIFT: f64 = 2.0;

/// Humidity drift around the room baseline, in percentage points.
pub const HUMIDITY_DRIFT: f64 = 5.0;

/// A simulated room with its baseline climate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Name sent on every reading.
    pub name: String,
    /// Baseline temperature in Celsius.
    pub base_temperature: f64,
    /// Baseline relative humidity in percent.
    pub base_humidity: f64,
}

impl Room {
    /// Create a room preset.
    pub fn new(name: impl Into<String>, base_temperature: f64, base_humidity: f64) -> Self {
        Self {
            name: name.into(),
            base_temperature,
            base_humidity,
        }
    }
}

/// The three rooms of the demo home, in send order.
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new("kitchen", 22.0, 50.0),
        Room::new("livingroom", 21.5, 48.0),
        Room::new("bedroom", 20.0, 52.0),
    ]
}

/// One reading, as written to the delivery stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReading {
    /// Room name.
    pub room: String,
    /// Temperature in Celsius, one decimal.
    pub temperature: f64,
    /// Relative humidity in percent, one decimal.
    pub humidity: f64,
    /// RFC 3339 UTC timestamp with microseconds.
    pub time_recorded: String,
}

impl RoomReading {
    /// Generate a reading for `room` taken at `now`.
    pub fn sample(room: &Room, noise: &mut dyn NoiseSource, now: DateTime<Utc>) -> Self {
        let temperature = round_to(
            room.base_temperature + noise.uniform(-TEMPERATURE_DRIFT, TEMPERATURE_DRIFT),
            1,
        );
        let humidity = round_to(
            room.base_humidity + noise.uniform(-HUMIDITY_DRIFT, HUMIDITY_DRIFT),
            1,
        );
        Self {
            room: room.name.clone(),
            temperature,
            humidity,
            time_recorded: now.to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }

    /// Serialize as a single JSON line terminated by `\n`.
    pub fn to_payload(&self) -> Result<String, TelemetryError> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}
