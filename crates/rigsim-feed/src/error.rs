//! Feed error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid update period: {0}")]
    InvalidPeriod(String),

    #[error("Updater task failed: {0}")]
    UpdaterFailed(String),

    #[error("Invalid starting reading: {0}")]
    InvalidReading(#[from] rigsim_core::CoreError),
}

pub type FeedResult<T> = Result<T, FeedError>;
