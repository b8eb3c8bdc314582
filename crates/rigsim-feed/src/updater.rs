//! Periodic sensor updater.
//!
//! The updater is a single tokio task that ticks a fixed-rate interval and
//! advances the shared `SensorState` on every tick. The first tick fires
//! immediately. Missed ticks are skipped rather than replayed, so a stalled
//! runtime never produces a burst of catch-up updates.
//!
//! The task is daemon-like: nothing waits for it at shutdown, and if it ends
//! early the state simply stops changing.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rigsim_telemetry::Metrics;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use crate::error::{FeedError, FeedResult};
use crate::sensor_state::SensorState;

/// Default updater period.
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_millis(500);

/// Drives `SensorState::update` on a fixed period.
#[derive(Debug)]
pub struct Updater {
    state: Arc<SensorState>,
    period: Duration,
}

impl Updater {
    /// Create an updater. A zero period is rejected.
    pub fn new(state: Arc<SensorState>, period: Duration) -> FeedResult<Self> {
        if period.is_zero() {
            return Err(FeedError::InvalidPeriod(
                "period must be greater than zero".to_string(),
            ));
        }
        Ok(Self { state, period })
    }

    /// Configured period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Spawn the update loop on the current tokio runtime.
    pub fn spawn(self) -> UpdaterHandle {
        let token = CancellationToken::new();
        let status = UpdaterStatus::new();
        let guard = LiveGuard::arm(status.clone());

        let task_token = token.clone();
        let task_status = status.clone();
        let join = tokio::spawn(async move {
            let _guard = guard;
            self.run(task_token, task_status).await;
        });

        UpdaterHandle {
            token,
            join,
            status,
        }
    }

    async fn run(self, token: CancellationToken, status: UpdaterStatus) {
        info!(period_ms = self.period.as_millis() as u64, "Updater started");
        Metrics::update_interval(self.period.as_secs_f64());

        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    info!(ticks = status.ticks(), "Updater stopped");
                    return;
                }
                _ = ticker.tick() => {
                    let reading = self.state.advance();
                    let tick = status.record_tick();
                    Metrics::sensor_updated(&reading);
                    trace!(
                        tick,
                        depth = reading.depth,
                        temperature = reading.temperature,
                        pressure = reading.pressure,
                        "Sensor updated"
                    );
                }
            }
        }
    }
}

/// Owner-side handle to a running updater.
#[derive(Debug)]
pub struct UpdaterHandle {
    token: CancellationToken,
    join: JoinHandle<()>,
    status: UpdaterStatus,
}

impl UpdaterHandle {
    /// Read-only status that can be shared with readers.
    pub fn status(&self) -> UpdaterStatus {
        self.status.clone()
    }

    /// Request the loop to stop. Pending ticks are abandoned.
    pub fn stop(&self) {
        self.token.cancel();
    }

    /// Whether the task has ended, for any reason.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Stop the loop and wait for the task to end.
    ///
    /// Returns an error if the task ended by panicking.
    pub async fn shutdown(self) -> FeedResult<()> {
        self.token.cancel();
        match self.join.await {
            Ok(()) => Ok(()),
            Err(e) if e.is_cancelled() => Ok(()),
            Err(e) => Err(FeedError::UpdaterFailed(e.to_string())),
        }
    }
}

/// Shared view of updater progress.
#[derive(Debug, Clone, Default)]
pub struct UpdaterStatus {
    ticks: Arc<AtomicU64>,
    live: Arc<AtomicBool>,
}

impl UpdaterStatus {
    fn new() -> Self {
        Self::default()
    }

    /// Number of updates applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Whether the update loop is still running.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn record_tick(&self) -> u64 {
        self.ticks.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Marks the updater live for as long as it exists. Dropped when the task
/// returns, panics, or is torn down with the runtime.
struct LiveGuard {
    status: UpdaterStatus,
}

impl LiveGuard {
    fn arm(status: UpdaterStatus) -> Self {
        status.live.store(true, Ordering::Release);
        Metrics::updater_live(true);
        Self { status }
    }
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.status.live.store(false, Ordering::Release);
        Metrics::updater_live(false);
        if std::thread::panicking() {
            warn!(ticks = self.status.ticks(), "Updater aborted, sensor values are frozen");
        } else {
            debug!(ticks = self.status.ticks(), "Updater task ended");
        }
    }
}
