//! Shared sensor state.
//!
//! `SensorState` owns the current `SensorReading` behind a single lock so a
//! reader always gets one complete triple. Writers are serialized by a
//! second lock around the noise source, which is held for the whole tick;
//! the reading lock itself is only held long enough to copy one struct.

use parking_lot::{Mutex, RwLock};
use rigsim_core::{SensorReading, DEPTH_STEP_M, PRESSURE_NOISE_BAR, TEMPERATURE_NOISE_C};

use crate::error::FeedResult;
use crate::noise::{NoiseSource, RandomNoise};

/// Shared, thread-safe sensor state.
///
/// Construct once, wrap in `Arc`, and hand clones to the updater and the
/// dashboard.
pub struct SensorState {
    reading: RwLock<SensorReading>,
    noise: Mutex<Box<dyn NoiseSource>>,
}

impl SensorState {
    /// Create a state at the start-up reading (50 m, 20 °C, 1 bar).
    pub fn new(noise: impl NoiseSource + 'static) -> Self {
        Self {
            reading: RwLock::new(SensorReading::INITIAL),
            noise: Mutex::new(Box::new(noise)),
        }
    }

    /// Create a state starting from an arbitrary valid reading.
    pub fn with_reading(
        reading: SensorReading,
        noise: impl NoiseSource + 'static,
    ) -> FeedResult<Self> {
        let reading = SensorReading::try_new(reading.depth, reading.temperature, reading.pressure)?;
        Ok(Self {
            reading: RwLock::new(reading),
            noise: Mutex::new(Box::new(noise)),
        })
    }

    /// Advance the simulation by one tick.
    pub fn update(&self) {
        self.advance();
    }

    /// Advance by one tick and return the reading that was installed.
    pub fn advance(&self) -> SensorReading {
        let mut noise = self.noise.lock();
        let previous = *self.reading.read();
        let next = next_reading(&previous, &mut **noise);
        *self.reading.write() = next;
        next
    }

    /// Copy of the current reading.
    pub fn snapshot(&self) -> SensorReading {
        *self.reading.read()
    }
}

impl Default for SensorState {
    fn default() -> Self {
        Self::new(RandomNoise::from_entropy())
    }
}

impl std::fmt::Debug for SensorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorState")
            .field("reading", &self.snapshot())
            .finish_non_exhaustive()
    }
}

/// Compute the next reading. Temperature and pressure derive from the same
/// clamped depth.
fn next_reading(previous: &SensorReading, noise: &mut dyn NoiseSource) -> SensorReading {
    let depth =
        SensorReading::clamp_depth(previous.depth + noise.uniform(-DEPTH_STEP_M, DEPTH_STEP_M));
    let temperature = SensorReading::baseline_temperature(depth)
        + noise.uniform(-TEMPERATURE_NOISE_C, TEMPERATURE_NOISE_C);
    let pressure = SensorReading::baseline_pressure(depth)
        + noise.uniform(-PRESSURE_NOISE_BAR, PRESSURE_NOISE_BAR);
    SensorReading {
        depth,
        temperature,
        pressure,
    }
}
