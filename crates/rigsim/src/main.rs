//! rigsim - Entry Point
//!
//! Simulates a depth/temperature/pressure sensor rig and shows its readings
//! on a full-screen terminal dashboard. Press `q` to quit.

use anyhow::Result;
use clap::Parser;
use rigsim::{AppConfig, Application, NoiseMode};
use rigsim_dashboard::ExitReason;
use tracing::{info, warn};

/// Synthetic sensor-rig telemetry with a live terminal dashboard
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "RIGSIM_CONFIG")]
    config: Option<String>,

    /// Sensor update period in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Disable noise; readings follow the depth baselines exactly
    #[arg(long)]
    zero_noise: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(ms) = self.interval_ms {
            config.sensor.update_interval_ms = ms;
        }
        if let Some(seed) = self.seed {
            config.sensor.seed = Some(seed);
        }
        if self.zero_noise {
            config.sensor.noise = NoiseMode::Zero;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config decides where logs go, so it is loaded before logging starts
    let (mut config, config_path) = AppConfig::resolve(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    let _log_guard = rigsim_telemetry::init_logging(&config.telemetry.log_options())?;

    info!("Starting rigsim v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => info!(config_path = %path, "Configuration loaded"),
        None => warn!("No config file found, using defaults"),
    }

    let app = Application::new(config)?;
    let reason = app.run().await?;

    if reason == ExitReason::Interrupted {
        println!("\nExiting.");
    }

    Ok(())
}
