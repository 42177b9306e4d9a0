//! The heater setpoint and its guarded store.
//!
//! The setpoint is the single piece of mutable state in the heater
//! controller. It starts at [`Setpoint::DEFAULT`] and lives only as long
//! as the process.

use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::ToolError;

/// Unit reported alongside every setpoint value.
pub const UNIT_CELSIUS: &str = "celsius";

/// A validated heater target temperature in whole degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Setpoint(u8);

impl Setpoint {
    /// Lowest accepted setpoint.
    pub const MIN: u8 = 8;
    /// Highest accepted setpoint.
    pub const MAX: u8 = 25;
    /// Value at process start.
    pub const DEFAULT: Self = Self(20);

    /// Validate a requested temperature.
    pub fn new(celsius: i64) -> Result<Self, ToolError> {
        u8::try_from(celsius)
            .ok()
            .filter(|c| (Self::MIN..=Self::MAX).contains(c))
            .map(Self)
            .ok_or(ToolError::TemperatureOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// The temperature in degrees Celsius.
    pub const fn celsius(self) -> u8 {
        self.0
    }
}

impl Default for Setpoint {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Response of `get_setpoint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetpointReading {
    /// Current setpoint.
    pub setpoint: Setpoint,
    /// Always `"celsius"`.
    pub unit: &'static str,
}

/// Response of `modify_setpoint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetpointChange {
    /// The value that was replaced.
    pub previous_setpoint: Setpoint,
    /// The value now in effect.
    pub new_setpoint: Setpoint,
    /// Always `"updated"`.
    pub status: &'static str,
    /// Always `"celsius"`.
    pub unit: &'static str,
}

/// Guarded single-value store for the setpoint.
///
/// Writers are serialized by the lock, but there is no compare-and-set:
/// two concurrent `replace` calls both succeed and the later one wins.
#[derive(Debug, Default)]
pub struct SetpointStore {
    value: RwLock<Setpoint>,
}

impl SetpointStore {
    /// Create a store holding `initial`.
    pub fn new(initial: Setpoint) -> Self {
        Self {
            value: RwLock::new(initial),
        }
    }

    /// Read the current setpoint.
    pub async fn get(&self) -> Setpoint {
        *self.value.read().await
    }

    /// Replace the setpoint, returning the previous value.
    pub async fn replace(&self, next: Setpoint) -> Setpoint {
        let mut guard = self.value.write().await;
        std::mem::replace(&mut *guard, next)
    }

    /// Snapshot for `get_setpoint`.
    pub async fn reading(&self) -> SetpointReading {
        SetpointReading {
            setpoint: self.get().await,
            unit: UNIT_CELSIUS,
        }
    }

    /// Apply `modify_setpoint`.
    pub async fn update(&self, next: Setpoint) -> SetpointChange {
        let previous = self.replace(next).await;
        tracing::info!(
            previous = previous.celsius(),
            new = next.celsius(),
            "setpoint updated"
        );
        SetpointChange {
            previous_setpoint: previous,
            new_setpoint: next,
            status: "updated",
            unit: UNIT_CELSIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_whole_range() {
        for c in 8..=25 {
            assert_eq!(Setpoint::new(c).map(Setpoint::celsius).ok(), u8::try_from(c).ok());
        }
    }

    #[test]
    fn rejects_outside_range() {
        for c in [i64::MIN, -1, 0, 7, 26, 255, 256, i64::MAX] {
            assert_eq!(
                Setpoint::new(c),
                Err(ToolError::TemperatureOutOfRange { min: 8, max: 25 })
            );
        }
    }

    #[tokio::test]
    async fn store_starts_at_default() {
        let store = SetpointStore::default();
        assert_eq!(store.get().await.celsius(), 20);
    }

    #[tokio::test]
    async fn update_reports_previous_and_new() {
        let store = SetpointStore::default();
        let next = Setpoint::new(15).unwrap_or_default();
        let change = store.update(next).await;
        assert_eq!(change.previous_setpoint.celsius(), 20);
        assert_eq!(change.new_setpoint.celsius(), 15);
        assert_eq!(store.reading().await.setpoint.celsius(), 15);
    }

    #[tokio::test]
    async fn last_write_wins() {
        let store = SetpointStore::default();
        store.replace(Setpoint::new(10).unwrap_or_default()).await;
        let previous = store.replace(Setpoint::new(24).unwrap_or_default()).await;
        assert_eq!(previous.celsius(), 10);
        assert_eq!(store.get().await.celsius(), 24);
    }
}
