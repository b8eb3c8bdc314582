//! Dashboard driver loop.
//!
//! Each iteration takes one snapshot, draws it, then waits for a key for at
//! most the refresh interval. The loop never touches the updater: a slow
//! terminal only delays redraws, never sensor updates.

use std::sync::Arc;

use chrono::Local;
use ratatui::backend::Backend;
use ratatui::Terminal;
use rigsim_feed::{SensorState, UpdaterStatus};
use rigsim_telemetry::Metrics;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::input::{CrosstermKeys, DashboardAction, KeySource};
use crate::render::{render, DashboardView};
use crate::terminal::{install_panic_hook, TerminalGuard};

/// Why the dashboard stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Operator pressed the quit key.
    Quit,
    /// Ctrl+C or an external shutdown request.
    Interrupted,
}

/// Reads snapshots from the shared state and renders them until told to stop.
pub struct DashboardDriver {
    config: DashboardConfig,
    state: Arc<SensorState>,
    updater: UpdaterStatus,
    shutdown: CancellationToken,
}

impl DashboardDriver {
    pub fn new(
        config: DashboardConfig,
        state: Arc<SensorState>,
        updater: UpdaterStatus,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            config,
            state,
            updater,
            shutdown,
        }
    }

    /// Capture everything the next frame shows.
    pub fn collect_view(&self) -> DashboardView {
        DashboardView {
            reading: self.state.snapshot(),
            ticks: self.updater.ticks(),
            updater_live: self.updater.is_live(),
            captured_at: Local::now(),
        }
    }

    /// Take over the terminal and run until quit or shutdown.
    ///
    /// Blocks the calling thread; run it on a blocking thread.
    pub fn run(self) -> DashboardResult<ExitReason> {
        install_panic_hook();
        let mut guard = TerminalGuard::enter()?;
        info!(
            refresh_ms = self.config.refresh_interval_ms,
            "Dashboard started"
        );
        let result = self.run_loop(guard.terminal_mut(), &mut CrosstermKeys);
        drop(guard);
        match &result {
            Ok(reason) => info!(?reason, "Dashboard stopped"),
            Err(e) => warn!(error = %e, "Dashboard stopped with error"),
        }
        result
    }

    /// The draw/poll loop, independent of the concrete terminal and key source.
    pub fn run_loop<B, K>(
        &self,
        terminal: &mut Terminal<B>,
        keys: &mut K,
    ) -> DashboardResult<ExitReason>
    where
        B: Backend,
        K: KeySource,
    {
        let refresh = self.config.refresh_interval();
        let mut reported_stall = false;

        loop {
            if self.shutdown.is_cancelled() {
                debug!("Shutdown requested");
                return Ok(ExitReason::Interrupted);
            }

            let view = self.collect_view();
            terminal
                .draw(|frame| render(frame, &view, &self.config.title))
                .map_err(|e| DashboardError::Render(e.to_string()))?;
            Metrics::dashboard_frame();

            if !view.updater_live && !reported_stall {
                warn!(
                    ticks = view.ticks,
                    "Updater is not running, showing last reading"
                );
                reported_stall = true;
            }

            match keys.next_action(refresh)? {
                Some(DashboardAction::Quit) => return Ok(ExitReason::Quit),
                Some(DashboardAction::Interrupt) => return Ok(ExitReason::Interrupted),
                None => {}
            }
        }
    }
}
