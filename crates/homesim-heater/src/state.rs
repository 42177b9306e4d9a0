//! Shared application state for the heater controller.
//!
//! [`AppState`] is wrapped in [`Arc`](std::sync::Arc) and injected into
//! every handler via Axum's `State` extractor.

use homesim_core::{DynNoise, noise_from_seed};
use tokio::sync::Mutex;

use crate::consumption::{ConsumptionDays, ConsumptionReport, estimate_consumption};
use crate::setpoint::{Setpoint, SetpointStore};

/// Shared state for the heater application.
pub struct AppState {
    /// The process-wide heater setpoint.
    pub setpoint: SetpointStore,
    /// Random source for consumption jitter.
    noise: Mutex<DynNoise>,
}

impl AppState {
    /// Create state at the default setpoint with an entropy-seeded noise source.
    pub fn new() -> Self {
        Self::with_noise(noise_from_seed(None))
    }

    /// Create state at the default setpoint drawing noise from `noise`.
    pub fn with_noise(noise: DynNoise) -> Self {
        Self {
            setpoint: SetpointStore::new(Setpoint::DEFAULT),
            noise: Mutex::new(noise),
        }
    }

    /// Estimate consumption over `days` at the current setpoint.
    pub async fn consumption(&self, days: ConsumptionDays) -> ConsumptionReport {
        let setpoint = self.setpoint.get().await;
        let mut noise = self.noise.lock().await;
        estimate_consumption(setpoint, days, &mut **noise)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("setpoint", &self.setpoint)
            .finish_non_exhaustive()
    }
}
