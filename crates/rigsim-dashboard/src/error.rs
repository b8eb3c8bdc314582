//! Dashboard error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid dashboard configuration: {0}")]
    InvalidConfig(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
