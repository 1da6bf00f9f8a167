//! Daily temperature records for thermokit
//!
//! Records one day's readings in Celsius, Fahrenheit or Kelvin, converts
//! between the scales and aggregates statistics across days.
//!
//! Key constraints:
//! - Every conversion pivots through Celsius and rounds to 2 decimals
//! - A record's readings and scale only ever change together
//! - Aggregations skip empty records instead of failing
//!
//! ```
//! use thermokit_core::{convert, TemperatureRecord, analytics};
//!
//! assert_eq!(convert(100.0, "celsius", "fahrenheit").unwrap(), 212.0);
//!
//! let records = [
//!     TemperatureRecord::new("2024-05-01", vec![10.0, 12.5, 15.0], "celsius").unwrap(),
//!     TemperatureRecord::new("2024-05-02", vec![50.0, 53.6, 57.2], "Fahrenheit").unwrap(),
//! ];
//! assert_eq!(analytics::hottest_day(&records), Some("2024-05-01"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod analytics;
pub mod constants;
pub mod converter;
pub mod errors;
pub mod record;
pub mod scale;

// Public API
pub use analytics::{
    average_across_records, detect_extreme_days, detect_spike, detect_spike_default,
    hottest_day, is_valid_record, temperature_range_for_each_day, temperature_trend,
    DailyRange, Trend,
};
pub use converter::{convert, convert_between, round_to_precision};
pub use errors::{TemperatureError, TemperatureResult, UnitSide};
pub use record::{Summary, TemperatureRecord};
pub use scale::Scale;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
