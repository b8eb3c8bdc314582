//! Application configuration.

use crate::error::{AppError, AppResult};
use rigsim_dashboard::DashboardConfig;
use rigsim_feed::{NoiseSource, RandomNoise, ZeroNoise};
use rigsim_telemetry::LogOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// How sensor noise is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseMode {
    /// Uniform pseudo-random noise.
    #[default]
    Random,
    /// No noise; readings follow the baselines exactly.
    Zero,
}

/// Simulated sensor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Updater period (ms). Default: 500.
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,
    /// Noise mode. Default: random.
    #[serde(default)]
    pub noise: NoiseMode,
    /// Fixed seed for random noise. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_update_interval_ms() -> u64 {
    500
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: default_update_interval_ms(),
            noise: NoiseMode::default(),
            seed: None,
        }
    }
}

impl SensorConfig {
    /// Updater period as a `Duration`.
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    /// Build the configured noise source.
    pub fn build_noise(&self) -> Box<dyn NoiseSource> {
        match (self.noise, self.seed) {
            (NoiseMode::Zero, _) => Box::new(ZeroNoise),
            (NoiseMode::Random, Some(seed)) => Box::new(RandomNoise::seeded(seed)),
            (NoiseMode::Random, None) => Box::new(RandomNoise::from_entropy()),
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file path. Empty logs to stderr.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/rigsim.log".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

impl TelemetryConfig {
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            level: self.log_level.clone(),
            file: (!self.log_file.is_empty()).then(|| PathBuf::from(&self.log_file)),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sensor: SensorConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load from an explicit path, or from `DEFAULT_CONFIG_PATH` if it exists.
    ///
    /// Returns the path that was read, or `None` when built-in defaults are used.
    pub fn resolve(explicit: Option<&str>) -> AppResult<(Self, Option<String>)> {
        match explicit {
            Some(path) => Ok((Self::from_file(path)?, Some(path.to_string()))),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Ok((
                Self::from_file(DEFAULT_CONFIG_PATH)?,
                Some(DEFAULT_CONFIG_PATH.to_string()),
            )),
            None => Ok((Self::default(), None)),
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config {path}: {e}")))?;
        Self::from_toml_str(&content)
    }

    /// Parse from TOML text.
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Reject values the runtime cannot honor.
    pub fn validate(&self) -> AppResult<()> {
        if self.sensor.update_interval_ms == 0 {
            return Err(AppError::Config(
                "sensor.update_interval_ms must be greater than zero".to_string(),
            ));
        }
        self.dashboard
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
