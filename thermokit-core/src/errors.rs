//! Error Types for Scale Handling
//!
//! Only two things can go wrong in thermokit, and both come from an
//! unrecognized scale name:
//!
//! - `UnsupportedScale`: a record was built with, or asked to convert to, a
//!   scale that is not celsius, fahrenheit or kelvin
//! - `UnsupportedUnit`: [`convert`](crate::convert) received an unknown unit on
//!   its `from` or `to` side
//!
//! Everything else (empty readings, records without data in an aggregation)
//! is skipped or defaulted by the caller-facing functions and never surfaces
//! as an error.
//!
//! ```rust
//! use thermokit_core::{convert, TemperatureError, UnitSide};
//!
//! match convert(5.0, "celsius", "mars") {
//!     Ok(value) => println!("{value}"),
//!     Err(TemperatureError::UnsupportedUnit { side: UnitSide::To, unit }) => {
//!         assert_eq!(unit, "mars");
//!     }
//!     Err(other) => panic!("unexpected error: {other}"),
//! }
//! ```

use alloc::string::String;
use core::fmt;

use thiserror_no_std::Error;

/// Result type for scale-dependent operations
pub type TemperatureResult<T> = Result<T, TemperatureError>;

/// Which argument of a conversion carried the bad unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSide {
    /// The unit the value is expressed in
    From,
    /// The unit the value is converted into
    To,
}

impl fmt::Display for UnitSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("from_unit"),
            Self::To => f.write_str("to_unit"),
        }
    }
}

/// Scale errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemperatureError {
    /// Record scale not recognized
    #[error("Unsupported scale: {scale}. Must be 'celsius', 'fahrenheit', or 'kelvin'.")]
    UnsupportedScale {
        /// The scale name as the caller supplied it
        scale: String,
    },

    /// Conversion unit not recognized
    #[error("Unsupported '{side}': {unit}. Must be 'celsius', 'fahrenheit', or 'kelvin'.")]
    UnsupportedUnit {
        /// Argument that held the unknown unit
        side: UnitSide,
        /// The unit name as the caller supplied it
        unit: String,
    },
}

impl TemperatureError {
    /// Name that failed to parse, regardless of variant
    pub fn rejected_name(&self) -> &str {
        match self {
            Self::UnsupportedScale { scale } => scale,
            Self::UnsupportedUnit { unit, .. } => unit,
        }
    }
}
