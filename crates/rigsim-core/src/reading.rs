//! Sensor reading value type.
//!
//! A `SensorReading` is one complete depth/temperature/pressure triple.
//! Temperature and pressure are modelled as linear functions of depth plus
//! bounded noise; the helpers here give the noise-free baseline.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Shallowest allowed depth (m).
pub const DEPTH_MIN_M: f64 = 0.0;
/// Deepest allowed depth (m).
pub const DEPTH_MAX_M: f64 = 100.0;
/// Maximum depth change per tick before clamping (m).
pub const DEPTH_STEP_M: f64 = 0.5;

/// Temperature at the surface (°C).
pub const SURFACE_TEMPERATURE_C: f64 = 25.0;
/// Temperature drop per meter of depth (°C/m).
pub const TEMPERATURE_LAPSE_PER_M: f64 = 0.1;
/// Half-width of the temperature noise band (°C).
pub const TEMPERATURE_NOISE_C: f64 = 0.2;

/// Pressure at the surface (bar).
pub const SURFACE_PRESSURE_BAR: f64 = 1.0;
/// Water column height that adds one bar (m).
pub const METERS_PER_BAR: f64 = 10.0;
/// Half-width of the pressure noise band (bar).
pub const PRESSURE_NOISE_BAR: f64 = 0.1;

/// One complete sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Depth in meters, within [0, 100].
    pub depth: f64,
    /// Temperature in °C.
    pub temperature: f64,
    /// Pressure in bar.
    pub pressure: f64,
}

impl SensorReading {
    /// Reading the rig reports before its first tick.
    pub const INITIAL: Self = Self {
        depth: 50.0,
        temperature: 20.0,
        pressure: 1.0,
    };

    /// Create a reading, rejecting depths outside [0, 100] and non-finite values.
    pub fn try_new(depth: f64, temperature: f64, pressure: f64) -> Result<Self> {
        if !depth.is_finite() {
            return Err(CoreError::NonFinite("depth"));
        }
        if !temperature.is_finite() {
            return Err(CoreError::NonFinite("temperature"));
        }
        if !pressure.is_finite() {
            return Err(CoreError::NonFinite("pressure"));
        }
        if !(DEPTH_MIN_M..=DEPTH_MAX_M).contains(&depth) {
            return Err(CoreError::DepthOutOfRange(depth));
        }
        Ok(Self {
            depth,
            temperature,
            pressure,
        })
    }

    /// Clamp a raw depth into the valid range.
    pub fn clamp_depth(depth: f64) -> f64 {
        depth.clamp(DEPTH_MIN_M, DEPTH_MAX_M)
    }

    /// Noise-free temperature at `depth`.
    pub fn baseline_temperature(depth: f64) -> f64 {
        SURFACE_TEMPERATURE_C - depth * TEMPERATURE_LAPSE_PER_M
    }

    /// Noise-free pressure at `depth`.
    pub fn baseline_pressure(depth: f64) -> f64 {
        SURFACE_PRESSURE_BAR + depth / METERS_PER_BAR
    }

    /// Check whether temperature and pressure sit within the noise bands
    /// around the baselines for this reading's depth.
    pub fn is_consistent(&self) -> bool {
        const EPS: f64 = 1e-9;
        let temp_dev = (self.temperature - Self::baseline_temperature(self.depth)).abs();
        let press_dev = (self.pressure - Self::baseline_pressure(self.depth)).abs();
        temp_dev <= TEMPERATURE_NOISE_C + EPS && press_dev <= PRESSURE_NOISE_BAR + EPS
    }
}

impl Default for SensorReading {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl std::fmt::Display for SensorReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "depth={:.2}m temperature={:.2}°C pressure={:.2}bar",
            self.depth, self.temperature, self.pressure
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_reading() {
        let reading = SensorReading::default();
        assert_eq!(reading.depth, 50.0);
        assert_eq!(reading.temperature, 20.0);
        assert_eq!(reading.pressure, 1.0);
    }

    #[test]
    fn test_try_new_rejects_out_of_range_depth() {
        assert_eq!(
            SensorReading::try_new(100.5, 15.0, 11.0),
            Err(CoreError::DepthOutOfRange(100.5))
        );
        assert_eq!(
            SensorReading::try_new(-0.1, 25.0, 1.0),
            Err(CoreError::DepthOutOfRange(-0.1))
        );
        assert!(SensorReading::try_new(0.0, 25.0, 1.0).is_ok());
        assert!(SensorReading::try_new(100.0, 15.0, 11.0).is_ok());
    }

    #[test]
    fn test_try_new_rejects_nan() {
        assert_eq!(
            SensorReading::try_new(f64::NAN, 25.0, 1.0),
            Err(CoreError::NonFinite("depth"))
        );
        assert_eq!(
            SensorReading::try_new(10.0, 25.0, f64::INFINITY),
            Err(CoreError::NonFinite("pressure"))
        );
    }

    #[test]
    fn test_clamp_depth() {
        assert_eq!(SensorReading::clamp_depth(-0.3), 0.0);
        assert_eq!(SensorReading::clamp_depth(100.4), 100.0);
        assert_eq!(SensorReading::clamp_depth(42.0), 42.0);
    }

    #[test]
    fn test_baselines() {
        assert_eq!(SensorReading::baseline_temperature(50.0), 20.0);
        assert_eq!(SensorReading::baseline_pressure(50.0), 6.0);
        assert_eq!(SensorReading::baseline_temperature(0.0), 25.0);
        assert_eq!(SensorReading::baseline_pressure(0.0), 1.0);
    }

    #[test]
    fn test_consistency() {
        let reading = SensorReading {
            depth: 30.0,
            temperature: 22.15,
            pressure: 3.95,
        };
        assert!(reading.is_consistent());

        // The start-up reading is a fixed placeholder, not a derived one
        assert!(!SensorReading::INITIAL.is_consistent());
    }

    #[test]
    fn test_display() {
        let s = SensorReading::INITIAL.to_string();
        assert_eq!(s, "depth=50.00m temperature=20.00°C pressure=1.00bar");
    }
}
