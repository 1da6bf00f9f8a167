//! Aggregations Across Daily Records
//!
//! ## Overview
//!
//! Pure functions over a slice of [`TemperatureRecord`]s and over raw reading
//! slices. Nothing here mutates its input.
//!
//! ## Record Validity
//!
//! A record takes part in an aggregation only if [`is_valid_record`] accepts
//! it, which today means it holds at least one reading. Invalid records are
//! skipped silently: they never raise, and never count towards a denominator.
//!
//! ## Scales
//!
//! Cross-record comparisons normalize to Celsius:
//!
//! ```text
//! average_across_records   every reading → °C, pooled mean
//! hottest_day              daily avg     → °C, max
//! detect_extreme_days      every reading → °C, compared to a °C threshold
//! ```
//!
//! [`temperature_range_for_each_day`] is the exception and reports each
//! day's min/max in that record's own scale. [`temperature_trend`] and
//! [`detect_spike`] work on raw numbers with no conversion at all.

use alloc::{collections::BTreeMap, vec::Vec};
use core::fmt;

use crate::{
    constants::analytics::DEFAULT_SPIKE_THRESHOLD,
    converter::{convert_between, round_to_precision},
    record::TemperatureRecord,
    scale::Scale,
};

/// Lowest and highest reading of one day
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyRange {
    /// Lowest reading
    pub min: f64,
    /// Highest reading
    pub max: f64,
}

/// Direction between two consecutive readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Trend {
    /// Strictly greater than the previous reading
    Up,
    /// Strictly less than the previous reading
    Down,
    /// Neither greater nor less
    Same,
}

impl Trend {
    /// Lowercase label
    pub const fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Same => "same",
        }
    }

    fn between(previous: f64, current: f64) -> Trend {
        if current > previous {
            Trend::Up
        } else if current < previous {
            Trend::Down
        } else {
            Trend::Same
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a record can take part in an aggregation
pub fn is_valid_record(record: &TemperatureRecord) -> bool {
    record.has_readings()
}

fn valid_records(records: &[TemperatureRecord]) -> impl Iterator<Item = &TemperatureRecord> {
    records.iter().filter(|record| {
        let valid = is_valid_record(record);
        if !valid {
            log_debug!("skipping record {}: no readings", record.date());
        }
        valid
    })
}

fn readings_in_celsius(record: &TemperatureRecord) -> impl Iterator<Item = f64> + '_ {
    let scale = record.scale();
    record
        .readings()
        .iter()
        .map(move |&reading| convert_between(reading, scale, Scale::Celsius))
}

/// Mean of every reading of every valid record, in Celsius
///
/// Each reading is converted (and rounded) on its own before pooling. Returns
/// `0.0` when there is nothing to average.
pub fn average_across_records(records: &[TemperatureRecord]) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;

    for record in valid_records(records) {
        for celsius in readings_in_celsius(record) {
            total += celsius;
            count += 1;
        }
    }

    if count == 0 {
        return 0.0;
    }

    round_to_precision(total / count as f64)
}

/// Date of the record with the highest daily average, compared in Celsius
///
/// The first record to reach the maximum wins; a later equal average does not
/// replace it.
pub fn hottest_day(records: &[TemperatureRecord]) -> Option<&str> {
    let mut hottest = None;
    let mut max_avg_celsius = f64::NEG_INFINITY;

    for record in valid_records(records) {
        let summary = record.summary();
        let avg_celsius = convert_between(summary.avg, summary.scale, Scale::Celsius);

        if avg_celsius > max_avg_celsius {
            max_avg_celsius = avg_celsius;
            hottest = Some(record.date());
        }
    }

    hottest
}

/// Dates with at least one reading strictly above `threshold_celsius`
///
/// Each date appears once, in the order it was first flagged.
pub fn detect_extreme_days(records: &[TemperatureRecord], threshold_celsius: f64) -> Vec<&str> {
    let mut dates: Vec<&str> = Vec::new();

    for record in valid_records(records) {
        let extreme = readings_in_celsius(record).any(|celsius| celsius > threshold_celsius);
        if extreme && !dates.contains(&record.date()) {
            dates.push(record.date());
        }
    }

    dates
}

/// Min/max of each day in the record's own scale
///
/// Entries iterate in ascending date order, not record order. A later record
/// with the same date replaces the earlier one.
pub fn temperature_range_for_each_day(records: &[TemperatureRecord]) -> BTreeMap<&str, DailyRange> {
    valid_records(records)
        .map(|record| {
            let summary = record.summary();
            (
                record.date(),
                DailyRange {
                    min: summary.min,
                    max: summary.max,
                },
            )
        })
        .collect()
}

/// Direction of each consecutive pair, empty for fewer than two readings
///
/// ```
/// use thermokit_core::{temperature_trend, Trend};
///
/// assert_eq!(
///     temperature_trend(&[10.0, 12.5, 12.5]),
///     vec![Trend::Up, Trend::Same]
/// );
/// ```
pub fn temperature_trend(readings: &[f64]) -> Vec<Trend> {
    readings
        .windows(2)
        .map(|pair| Trend::between(pair[0], pair[1]))
        .collect()
}

/// Whether any consecutive pair differs by at least `threshold`
pub fn detect_spike(readings: &[f64], threshold: f64) -> bool {
    readings
        .windows(2)
        .any(|pair| libm::fabs(pair[1] - pair[0]) >= threshold)
}

/// [`detect_spike`] with [`DEFAULT_SPIKE_THRESHOLD`]
pub fn detect_spike_default(readings: &[f64]) -> bool {
    detect_spike(readings, DEFAULT_SPIKE_THRESHOLD)
}
