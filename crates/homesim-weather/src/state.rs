//! Shared application state for the weather service.

use homesim_core::{DynNoise, noise_from_seed};
use tokio::sync::Mutex;

/// Shared state for the weather application.
///
/// The only configuration-dependent state is the expected API key: with
/// no key configured the service stays up but refuses every lookup.
pub struct AppState {
    api_key: Option<String>,
    noise: Mutex<DynNoise>,
}

impl AppState {
    /// Create state expecting `api_key`, with an entropy-seeded noise source.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_noise(api_key, noise_from_seed(None))
    }

    /// Create state expecting `api_key`, drawing readings from `noise`.
    ///
    /// An empty key counts as unconfigured.
    pub fn with_noise(api_key: Option<String>, noise: DynNoise) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            noise: Mutex::new(noise),
        }
    }

    /// The key callers must present, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Exclusive access to the noise source.
    pub async fn noise(&self) -> tokio::sync::MutexGuard<'_, DynNoise> {
        self.noise.lock().await
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("api_key_configured", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}
