//! Analytics Constants for thermokit

/// Scale factor for rounding to two decimal places.
///
/// Applies to every conversion result and every reported average.
pub const ROUNDING_FACTOR: f64 = 100.0;

/// Default absolute difference between consecutive readings that counts as a spike.
///
/// Inclusive: a jump of exactly 5.0 degrees is a spike.
pub const DEFAULT_SPIKE_THRESHOLD: f64 = 5.0;
