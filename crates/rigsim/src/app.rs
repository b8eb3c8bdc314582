//! Main application orchestration.
//!
//! Coordinates the components:
//! - Shared sensor state
//! - Periodic updater task
//! - Terminal dashboard on a blocking thread
//! - Interrupt handling and shutdown

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use rigsim_dashboard::{DashboardDriver, DashboardResult, ExitReason};
use rigsim_feed::{SensorState, Updater};
use rigsim_telemetry::Metrics;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Main application.
#[derive(Debug)]
pub struct Application {
    config: AppConfig,
    state: Arc<SensorState>,
}

impl Application {
    /// Create a new application with a fresh sensor state.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;
        let state = Arc::new(SensorState::new(config.sensor.build_noise()));
        Ok(Self { config, state })
    }

    /// Shared sensor state.
    pub fn state(&self) -> Arc<SensorState> {
        self.state.clone()
    }

    /// Run with the terminal dashboard until quit or interrupt.
    pub async fn run(self) -> AppResult<ExitReason> {
        self.run_with(DashboardDriver::run).await
    }

    /// Run with a custom dashboard entry point.
    ///
    /// `dashboard` runs on a blocking thread. The updater keeps ticking until
    /// it returns; an interrupt signal cancels it through the driver's
    /// shutdown token.
    pub async fn run_with<F>(self, dashboard: F) -> AppResult<ExitReason>
    where
        F: FnOnce(DashboardDriver) -> DashboardResult<ExitReason> + Send + 'static,
    {
        let started = Instant::now();
        info!(
            update_interval_ms = self.config.sensor.update_interval_ms,
            noise = ?self.config.sensor.noise,
            seed = ?self.config.sensor.seed,
            "Starting application"
        );

        let updater =
            Updater::new(self.state.clone(), self.config.sensor.update_interval())?.spawn();
        let status = updater.status();

        let shutdown = CancellationToken::new();
        let driver = DashboardDriver::new(
            self.config.dashboard.clone(),
            self.state.clone(),
            updater.status(),
            shutdown.clone(),
        );
        let mut dashboard_task = tokio::task::spawn_blocking(move || dashboard(driver));

        let interrupted = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Cannot listen for interrupt signal");
                std::future::pending::<()>().await;
            }
        };

        let outcome = tokio::select! {
            res = &mut dashboard_task => res,
            _ = interrupted => {
                info!("Interrupt received, stopping dashboard");
                shutdown.cancel();
                dashboard_task.await
            }
        };

        if let Err(e) = updater.shutdown().await {
            warn!(error = %e, "Updater ended abnormally");
        }

        let reason = match outcome {
            Ok(Ok(reason)) => reason,
            Ok(Err(e)) => return Err(e.into()),
            Err(e) => return Err(AppError::Task(format!("dashboard task: {e}"))),
        };

        info!(
            ?reason,
            ticks = status.ticks(),
            uptime_s = started.elapsed().as_secs_f64(),
            last_reading = %self.state.snapshot(),
            "Application stopped"
        );
        match Metrics::gather_text() {
            Ok(text) => debug!(metrics = %text, "Final metrics"),
            Err(e) => debug!(error = %e, "Failed to render metrics"),
        }

        Ok(reason)
    }
}
