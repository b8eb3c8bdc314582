//! rigsim-dashboard - Full-screen terminal view of the simulated sensor rig.
//!
//! The dashboard is a pure reader of the shared `SensorState`. It redraws at
//! a fixed refresh interval and polls for the quit key in between.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── rigsim process ─────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────────┐  advance()   ┌────────────────────┐                   │
//! │  │   Updater    │ ───────────▶ │ Arc<SensorState>   │                   │
//! │  │ (tokio task) │              └─────────┬──────────┘                   │
//! │  └──────┬───────┘                        │ snapshot()                   │
//! │         │ UpdaterStatus                  ▼                              │
//! │         └──────────────────▶  ┌────────────────────┐   crossterm        │
//! │                               │  DashboardDriver   │ ◀──── keys          │
//! │                               │ (blocking thread)  │ ────▶ ratatui draw  │
//! │                               └────────────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use rigsim_dashboard::{DashboardConfig, DashboardDriver};
//!
//! let driver = DashboardDriver::new(config, state.clone(), updater.status(), shutdown.clone());
//! let reason = tokio::task::spawn_blocking(move || driver.run()).await??;
//! ```

mod config;
mod driver;
mod error;
mod input;
mod render;
mod terminal;

pub use config::DashboardConfig;
pub use driver::{DashboardDriver, ExitReason};
pub use error::{DashboardError, DashboardResult};
pub use input::{action_for_key, CrosstermKeys, DashboardAction, KeySource};
pub use render::{render, DashboardView};
pub use terminal::{install_panic_hook, restore_terminal, TerminalGuard};
