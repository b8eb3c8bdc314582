//! Prometheus metrics for rigsim.
//!
//! Metrics live in the default process registry and are never exported over
//! the network; `Metrics::gather_text` renders them for the shutdown log.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()` intentionally. A failure means a
//! duplicate metric name, which is a programming error caught at first use.

use once_cell::sync::Lazy;
use prometheus::{
    register_gauge, register_int_counter, register_int_gauge, Encoder, Gauge, IntCounter,
    IntGauge, TextEncoder,
};
use rigsim_core::SensorReading;

use crate::error::{TelemetryError, TelemetryResult};

/// Total sensor state updates applied.
pub static SENSOR_UPDATES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "rigsim_sensor_updates_total",
        "Total sensor state updates applied"
    )
    .unwrap()
});

/// Most recent depth in meters.
pub static SENSOR_DEPTH_M: Lazy<Gauge> = Lazy::new(|| {
    register_gauge!("rigsim_sensor_depth_m", "Most recent simulated depth (m)").unwrap()
});

/// Most recent temperature in °C.
pub static SENSOR_TEMPERATURE_C: Lazy<Gauge> = Lazy::new(|| {
    register_gauge!(
        "rigsim_sensor_temperature_c",
        "Most recent simulated temperature (C)"
    )
    .unwrap()
});

/// Most recent pressure in bar.
pub static SENSOR_PRESSURE_BAR: Lazy<Gauge> = Lazy::new(|| {
    register_gauge!(
        "rigsim_sensor_pressure_bar",
        "Most recent simulated pressure (bar)"
    )
    .unwrap()
});

/// Updater task liveness (1 = ticking, 0 = stopped).
pub static UPDATER_LIVE: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "rigsim_updater_live",
        "Updater task liveness (1=ticking, 0=stopped)"
    )
    .unwrap()
});

/// Configured updater period in seconds.
pub static UPDATE_INTERVAL_SECONDS: Lazy<Gauge> = Lazy::new(|| {
    register_gauge!(
        "rigsim_update_interval_seconds",
        "Configured updater period in seconds"
    )
    .unwrap()
});

/// Total dashboard frames drawn.
pub static DASHBOARD_FRAMES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "rigsim_dashboard_frames_total",
        "Total dashboard frames drawn"
    )
    .unwrap()
});

/// Metrics facade.
pub struct Metrics;

impl Metrics {
    /// Record an applied sensor update.
    pub fn sensor_updated(reading: &SensorReading) {
        SENSOR_UPDATES_TOTAL.inc();
        SENSOR_DEPTH_M.set(reading.depth);
        SENSOR_TEMPERATURE_C.set(reading.temperature);
        SENSOR_PRESSURE_BAR.set(reading.pressure);
    }

    /// Set updater liveness.
    pub fn updater_live(live: bool) {
        UPDATER_LIVE.set(i64::from(live));
    }

    /// Record the configured updater period.
    pub fn update_interval(seconds: f64) {
        UPDATE_INTERVAL_SECONDS.set(seconds);
    }

    /// Record a drawn dashboard frame.
    pub fn dashboard_frame() {
        DASHBOARD_FRAMES_TOTAL.inc();
    }

    /// Render every registered metric in the Prometheus text format.
    pub fn gather_text() -> TelemetryResult<String> {
        let families = prometheus::gather();
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&families, &mut buf)
            .map_err(|e| TelemetryError::Metrics(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| TelemetryError::Metrics(e.to_string()))
    }
}
