//! Core domain types for the rigsim sensor emulator.
//!
//! This crate provides the value types shared by every other crate:
//! - `SensorReading`: One depth/temperature/pressure triple
//! - Physical constants that bound and derive the simulated readings

pub mod error;
pub mod reading;

pub use error::{CoreError, Result};
pub use reading::{
    SensorReading, DEPTH_MAX_M, DEPTH_MIN_M, DEPTH_STEP_M, METERS_PER_BAR, PRESSURE_NOISE_BAR,
    SURFACE_PRESSURE_BAR, SURFACE_TEMPERATURE_C, TEMPERATURE_LAPSE_PER_M, TEMPERATURE_NOISE_C,
};
