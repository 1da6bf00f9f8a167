//! Temperature scales
//!
//! Celsius is the pivot scale: every scale knows how to move a value into
//! Celsius and back out of it, so any pair converts in two steps.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::{
    constants::physics::{FAHRENHEIT_OFFSET, KELVIN_OFFSET},
    errors::TemperatureError,
};

/// One of the three supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum Scale {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl Scale {
    /// Every supported scale, in canonical order
    pub const ALL: [Scale; 3] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin];

    /// Canonical lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Scale::Celsius => "celsius",
            Scale::Fahrenheit => "fahrenheit",
            Scale::Kelvin => "kelvin",
        }
    }

    /// Case-insensitive lookup by name, `None` for anything unknown
    pub fn from_name(name: &str) -> Option<Scale> {
        Self::ALL
            .into_iter()
            .find(|scale| scale.as_str().eq_ignore_ascii_case(name))
    }

    /// Express `value` (in this scale) in Celsius. Unrounded.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Scale::Celsius => value,
            Scale::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            Scale::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Express a Celsius value in this scale. Unrounded.
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Scale::Celsius => celsius,
            Scale::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            Scale::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scale {
    type Err = TemperatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TemperatureError::UnsupportedScale {
            scale: s.to_string(),
        })
    }
}

impl TryFrom<String> for Scale {
    type Error = TemperatureError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name).ok_or(TemperatureError::UnsupportedScale { scale: name })
    }
}
