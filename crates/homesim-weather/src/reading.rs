//! Synthetic weather readings.

use homesim_core::{NoiseSource, round_to};
use serde::{Deserialize, Serialize};

/// Lower bound of generated temperatures (inclusive).
pub const MIN_TEMPERATURE: f64 = -10.0;
/// Upper bound of generated temperatures (exclusive before rounding).
pub const MAX_TEMPERATURE: f64 = -4.0;
/// Description attached to every reading.
pub const DESCRIPTION: &str = "Sunny and clear skies";

/// Body of `POST /weather`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRequest {
    /// Free-form location name, echoed back.
    pub location: String,
}

/// Response of `POST /weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// The requested location.
    pub location: String,
    /// Temperature in Celsius, one decimal.
    pub temperature: f64,
    /// Human-readable conditions.
    pub description: String,
}

impl WeatherReading {
    /// Generate a reading for `location`.
    pub fn sample(location: String, noise: &mut dyn NoiseSource) -> Self {
        let temperature = round_to(noise.uniform(MIN_TEMPERATURE, MAX_TEMPERATURE), 1);
        Self {
            location,
            temperature,
            description: DESCRIPTION.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use homesim_core::{RngNoise, SequenceNoise};

    use super::*;

    #[test]
    fn sample_is_rounded_and_echoes_location() {
        let mut noise = SequenceNoise::constant(-7.26);
        let reading = WeatherReading::sample("Oslo".to_owned(), &mut noise);
        assert_eq!(reading.location, "Oslo");
        assert!((reading.temperature + 7.3).abs() < 1e-9);
        assert_eq!(reading.description, "Sunny and clear skies");
    }

    #[test]
    fn samples_stay_in_band() {
        let mut noise = RngNoise::seeded(3);
        for _ in 0..1000 {
            let reading = WeatherReading::sample(String::new(), &mut noise);
            assert!(
                (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&reading.temperature),
                "temperature {} out of band",
                reading.temperature
            );
        }
    }
}
