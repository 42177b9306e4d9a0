//! The telemetry loop.
//!
//! [`Simulator::run`] repeats a cycle (one reading per room, sent one at
//! a time) separated by a fixed interval until its [`StopSignal`] fires.
//! A stop requested mid-cycle lets the current cycle finish, then cuts
//! the following sleep short.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use homesim_core::DynNoise;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::delivery::DeliveryStream;
use crate::error::TelemetryError;
use crate::room::{Room, RoomReading};

/// Default pause between cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Cloneable stop switch for a running [`Simulator`].
#[derive(Debug, Clone)]
pub struct StopSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl StopSignal {
    /// Create a signal in the running state.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Ask the simulator to stop. Idempotent.
    pub fn stop(&self) {
        self.tx.send_replace(true);
    }

    /// Whether a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a single cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Records the stream accepted.
    pub delivered: usize,
    /// Records that failed to send (logged, not retried).
    pub failed: usize,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Completed cycles.
    pub cycles: u64,
    /// Records delivered across all cycles.
    pub delivered: u64,
    /// Records that failed across all cycles.
    pub failed: u64,
}

impl RunSummary {
    fn record(&mut self, report: &CycleReport) {
        self.cycles = self.cycles.saturating_add(1);
        self.delivered = self.delivered.saturating_add(widen(report.delivered));
        self.failed = self.failed.saturating_add(widen(report.failed));
    }
}

fn widen(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

/// Generates room readings and pushes them to a delivery stream.
pub struct Simulator<S> {
    stream: S,
    rooms: Vec<Room>,
    noise: DynNoise,
    interval: Duration,
}

impl<S: DeliveryStream> Simulator<S> {
    /// Create a simulator over `rooms`, pausing `interval` between cycles.
    pub fn new(stream: S, rooms: Vec<Room>, noise: DynNoise, interval: Duration) -> Self {
        Self {
            stream,
            rooms,
            noise,
            interval,
        }
    }

    /// The rooms sampled each cycle.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The stream records are sent to.
    pub const fn stream(&self) -> &S {
        &self.stream
    }

    /// Sample and send one reading per room, in order.
    ///
    /// Each send completes before the next room is sampled. A failure is
    /// logged and counted, and the cycle moves on to the next room.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let mut report = CycleReport::default();

        for room in &self.rooms {
            let reading = RoomReading::sample(room, &mut *self.noise, Utc::now());

            match deliver(&self.stream, &reading).await {
                Ok(record_id) => {
                    info!(
                        time_recorded = %reading.time_recorded,
                        room = %reading.room,
                        temperature = reading.temperature,
                        humidity = reading.humidity,
                        record_id = %record_id,
                        "reading delivered"
                    );
                    report.delivered = report.delivered.saturating_add(1);
                }
                Err(e) => {
                    warn!(
                        time_recorded = %reading.time_recorded,
                        room = %reading.room,
                        stream = self.stream.name(),
                        error = %e,
                        "failed to send reading"
                    );
                    report.failed = report.failed.saturating_add(1);
                }
            }
        }

        report
    }

    /// Run cycles until `stop` fires.
    ///
    /// Returns immediately, with zero cycles, if `stop` has already fired.
    pub async fn run(&mut self, stop: &StopSignal) -> RunSummary {
        let mut stopped = stop.subscribe();
        let mut summary = RunSummary::default();

        info!(
            stream = self.stream.name(),
            rooms = self.rooms.len(),
            interval_secs = self.interval.as_secs(),
            "telemetry loop starting"
        );

        loop {
            if *stopped.borrow() {
                break;
            }

            let report = self.run_cycle().await;
            summary.record(&report);

            tokio::select! {
                () = tokio::time::sleep(self.interval) => {}
                changed = stopped.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        info!(
            cycles = summary.cycles,
            delivered = summary.delivered,
            failed = summary.failed,
            "telemetry loop stopped"
        );
        summary
    }
}

async fn deliver<S: DeliveryStream>(
    stream: &S,
    reading: &RoomReading,
) -> Result<String, TelemetryError> {
    let payload = reading.to_payload()?;
    stream.put_record(&payload).await
}
