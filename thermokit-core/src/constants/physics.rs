//! Physical Constants for thermokit
//!
//! Fixed relationships between the Celsius, Fahrenheit and Kelvin scales.
//! Celsius is the pivot: every other scale is defined relative to it.

/// Offset between Kelvin and Celsius (K).
///
/// `K = °C + 273.15`. The Kelvin scale starts at absolute zero.
///
/// Source: SI Brochure, 9th edition (2019)
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit reading at the freezing point of water (°F).
///
/// `°F = °C × 9/5 + 32`.
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
