//! Prometheus metrics and structured logging for rigsim.
//!
//! - Structured logging with tracing, written to a file so the dashboard
//!   keeps sole ownership of the terminal
//! - In-process Prometheus metrics for sensor updates and dashboard frames

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, LogGuard, LogOptions};
pub use metrics::Metrics;
