//! Constants for thermokit
//!
//! Numeric values used by the converter and the analytics live here
//! instead of being scattered as magic numbers.
//!
//! ## Organization
//!
//! - **Physics**: scale offsets and ratios
//! - **Analytics**: rounding precision and default thresholds

/// Offsets and ratios between the supported temperature scales.
pub mod physics;

/// Rounding and threshold defaults for conversions and aggregations.
pub mod analytics;

// Re-export commonly used constants for convenience
pub use physics::{FAHRENHEIT_OFFSET, KELVIN_OFFSET};

pub use analytics::{DEFAULT_SPIKE_THRESHOLD, ROUNDING_FACTOR};
