//! Synthetic energy consumption estimates.
//!
//! Consumption is never stored. Each call derives a fresh per-day series
//! from the current setpoint: `setpoint * 1.2` kWh plus uniform noise in
//! `[-5, 5)`, floored at zero and rounded to two decimals.

use homesim_core::{NoiseSource, round_to};
use serde::Serialize;

use crate::error::ToolError;
use crate::setpoint::Setpoint;

/// kWh per day for each degree of setpoint.
pub const KWH_PER_DEGREE: f64 = 1.2;

/// Half-width of the daily noise band in kWh.
pub const DAILY_NOISE_KWH: f64 = 5.0;

/// A validated look-back window in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ConsumptionDays(u16);

impl ConsumptionDays {
    /// Smallest accepted window.
    pub const MIN: u16 = 1;
    /// Largest accepted window.
    pub const MAX: u16 = 365;

    /// Validate a requested day count.
    pub fn new(days: i64) -> Result<Self, ToolError> {
        u16::try_from(days)
            .ok()
            .filter(|d| (Self::MIN..=Self::MAX).contains(d))
            .map(Self)
            .ok_or(ToolError::DaysOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// Number of days.
    pub const fn get(self) -> u16 {
        self.0
    }
}

/// One day of the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyConsumption {
    /// 1-based day index.
    pub day: u16,
    /// Energy used that day.
    pub kwh: f64,
}

/// Response of `get_consumption`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionReport {
    /// Window length.
    pub days: ConsumptionDays,
    /// One entry per day, in order.
    pub daily_consumption: Vec<DailyConsumption>,
    /// Sum of the daily values, rounded to two decimals.
    pub total_kwh: f64,
    /// `total_kwh / days`, rounded to two decimals.
    pub average_kwh_per_day: f64,
}

/// Build the consumption series for `days` at `setpoint`.
pub fn estimate_consumption(
    setpoint: Setpoint,
    days: ConsumptionDays,
    noise: &mut dyn NoiseSource,
) -> ConsumptionReport {
    let base_kwh = f64::from(setpoint.celsius()) * KWH_PER_DEGREE;

    let daily_consumption: Vec<DailyConsumption> = (1..=days.get())
        .map(|day| {
            let jitter = noise.uniform(-DAILY_NOISE_KWH, DAILY_NOISE_KWH);
            DailyConsumption {
                day,
                kwh: round_to((base_kwh + jitter).max(0.0), 2),
            }
        })
        .collect();

    let total_kwh = round_to(daily_consumption.iter().map(|d| d.kwh).sum(), 2);
    let average_kwh_per_day = round_to(total_kwh / f64::from(days.get()), 2);

    ConsumptionReport {
        days,
        daily_consumption,
        total_kwh,
        average_kwh_per_day,
    }
}
