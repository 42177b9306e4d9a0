//! Injectable random sources for synthetic sensor values.
//!
//! Every generated number in the services (consumption jitter, room
//! temperature drift, weather readings) is drawn through [`NoiseSource`]
//! so that tests can pin the output with a [`SequenceNoise`] and
//! operators can reproduce a run with a fixed seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed `f64` samples.
pub trait NoiseSource {
    /// Draw a sample from the half-open interval `[low, high)`.
    ///
    /// If `low >= high` the source returns `low` instead of panicking.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Boxed noise source that can be held inside shared service state.
pub type DynNoise = Box<dyn NoiseSource + Send>;

/// Production noise source backed by a [`SmallRng`].
#[derive(Debug, Clone)]
pub struct RngNoise {
    rng: SmallRng,
}

impl RngNoise {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Seed deterministically so a run can be replayed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for RngNoise {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.random_range(low..high)
    }
}

/// Deterministic noise source replaying a fixed list of values.
///
/// Values are returned verbatim (the requested range is ignored) and the
/// list wraps around when exhausted. An empty list yields `low`.
#[derive(Debug, Clone, Default)]
pub struct SequenceNoise {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceNoise {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Create a source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl NoiseSource for SequenceNoise {
    fn uniform(&mut self, low: f64, _high: f64) -> f64 {
        let Some(value) = self.values.get(self.cursor).copied() else {
            return low;
        };
        self.cursor = self.cursor.saturating_add(1);
        if self.cursor >= self.values.len() {
            self.cursor = 0;
        }
        value
    }
}

/// Build the noise source for a service from an optional seed.
pub fn noise_from_seed(seed: Option<u64>) -> DynNoise {
    match seed {
        Some(seed) => Box::new(RngNoise::seeded(seed)),
        None => Box::new(RngNoise::from_entropy()),
    }
}
