//! Simulated sensor feed for rigsim.
//!
//! Holds the single shared `SensorState` and the `Updater` task that
//! advances it on a fixed period, independently of any reader.

pub mod error;
pub mod noise;
pub mod sensor_state;
pub mod updater;

pub use error::{FeedError, FeedResult};
pub use noise::{NoiseSource, RandomNoise, ZeroNoise};
pub use sensor_state::SensorState;
pub use updater::{Updater, UpdaterHandle, UpdaterStatus, DEFAULT_UPDATE_INTERVAL};
