//! Scale conversion
//!
//! Values move through Celsius: source scale → Celsius → target scale. The
//! result is always rounded to two decimal places, so a chain of conversions
//! can drift by at most 0.01 per step.
//!
//! Converting a value into its own scale skips the pivot entirely and only
//! rounds, which keeps `convert(x, u, u)` exactly equal to `round(x, 2)`.

use alloc::string::ToString;

use crate::{
    constants::analytics::ROUNDING_FACTOR,
    errors::{TemperatureError, TemperatureResult, UnitSide},
    scale::Scale,
};

/// Round to two decimal places, ties to even
pub fn round_to_precision(value: f64) -> f64 {
    libm::rint(value * ROUNDING_FACTOR) / ROUNDING_FACTOR
}

/// Convert `value` between two known scales, rounded to two decimals
pub fn convert_between(value: f64, from: Scale, to: Scale) -> f64 {
    if from == to {
        return round_to_precision(value);
    }

    round_to_precision(to.from_celsius(from.to_celsius(value)))
}

/// Convert `value` between scales given by name
///
/// Names are case-insensitive. The `from` side is checked first.
///
/// ```
/// use thermokit_core::convert;
///
/// assert_eq!(convert(0.0, "celsius", "fahrenheit").unwrap(), 32.0);
/// assert_eq!(convert(273.15, "Kelvin", "CELSIUS").unwrap(), 0.0);
/// assert!(convert(5.0, "celsius", "mars").is_err());
/// ```
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> TemperatureResult<f64> {
    let from = parse_unit(from_unit, UnitSide::From)?;
    let to = parse_unit(to_unit, UnitSide::To)?;

    Ok(convert_between(value, from, to))
}

fn parse_unit(unit: &str, side: UnitSide) -> TemperatureResult<Scale> {
    Scale::from_name(unit).ok_or_else(|| TemperatureError::UnsupportedUnit {
        side,
        unit: unit.to_string(),
    })
}
