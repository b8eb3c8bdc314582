//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed error: {0}")]
    Feed(#[from] rigsim_feed::FeedError),

    #[error("Dashboard error: {0}")]
    Dashboard(#[from] rigsim_dashboard::DashboardError),

    #[error("Task failed: {0}")]
    Task(String),
}

pub type AppResult<T> = Result<T, AppError>;
