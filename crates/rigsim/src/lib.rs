//! rigsim - synthetic sensor-rig telemetry with a live terminal dashboard.
//!
//! Wires the components together:
//! - One shared `SensorState`
//! - One `Updater` task advancing it on a fixed period
//! - The terminal dashboard reading snapshots until quit or interrupt

pub mod app;
pub mod config;
pub mod error;

pub use app::Application;
pub use config::{AppConfig, NoiseMode};
pub use error::{AppError, AppResult};
