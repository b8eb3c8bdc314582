//! Error types for rigsim-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Depth out of range: {0} m (expected 0..=100)")]
    DepthOutOfRange(f64),

    #[error("Non-finite reading field: {0}")]
    NonFinite(&'static str),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
