//! Daily temperature records
//!
//! A [`TemperatureRecord`] holds one day's readings together with the scale
//! they are expressed in. The two fields form a pair: readings are only ever
//! replaced together with the scale, inside a single `&mut self` call, so a
//! record is never observed with converted readings and a stale scale.

use alloc::{string::String, vec::Vec};

use crate::{
    converter::{convert_between, round_to_precision},
    errors::TemperatureResult,
    scale::Scale,
};

/// Snapshot of a record's statistics
///
/// All three statistics are `0.0` for a record without readings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Date of the record
    pub date: String,
    /// Scale of `min`, `max` and `avg`
    pub scale: Scale,
    /// Lowest reading, exactly as stored
    pub min: f64,
    /// Highest reading, exactly as stored
    pub max: f64,
    /// Mean of the readings rounded to two decimals
    pub avg: f64,
}

/// One day's temperature readings in one scale
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureRecord {
    date: String,
    readings: Vec<f64>,
    scale: Scale,
}

impl TemperatureRecord {
    /// Create a record from a scale name (case-insensitive)
    ///
    /// Fails with [`UnsupportedScale`](crate::TemperatureError::UnsupportedScale)
    /// if the name is not celsius, fahrenheit or kelvin.
    pub fn new(
        date: impl Into<String>,
        readings: impl Into<Vec<f64>>,
        scale: &str,
    ) -> TemperatureResult<Self> {
        let scale = scale.parse::<Scale>()?;
        Ok(Self::with_scale(date, readings, scale))
    }

    /// Create a record for an already known scale
    pub fn with_scale(date: impl Into<String>, readings: impl Into<Vec<f64>>, scale: Scale) -> Self {
        Self {
            date: date.into(),
            readings: readings.into(),
            scale,
        }
    }

    /// Date identifier, not interpreted
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Readings in [`scale`](Self::scale)
    pub fn readings(&self) -> &[f64] {
        &self.readings
    }

    /// Scale the readings are expressed in
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Whether the record holds at least one reading
    pub fn has_readings(&self) -> bool {
        !self.readings.is_empty()
    }

    /// Convert every reading to the named scale
    ///
    /// An unknown name leaves the record untouched and returns
    /// [`UnsupportedScale`](crate::TemperatureError::UnsupportedScale).
    pub fn convert_to(&mut self, target_scale: &str) -> TemperatureResult<()> {
        let target = target_scale.parse::<Scale>()?;
        self.convert_to_scale(target);
        Ok(())
    }

    /// Convert every reading to `target`
    ///
    /// Converting into the current scale is a no-op; the readings are not
    /// even rounded.
    pub fn convert_to_scale(&mut self, target: Scale) {
        if self.scale == target {
            return;
        }

        let converted: Vec<f64> = self
            .readings
            .iter()
            .map(|&reading| convert_between(reading, self.scale, target))
            .collect();

        log_trace!(
            "record {}: {} readings {} -> {}",
            self.date,
            converted.len(),
            self.scale,
            target
        );

        self.readings = converted;
        self.scale = target;
    }

    /// Min, max and average of the current readings
    pub fn summary(&self) -> Summary {
        let (min, max, avg) = if self.readings.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let min = self.readings.iter().copied().fold(f64::INFINITY, f64::min);
            let max = self.readings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let sum: f64 = self.readings.iter().sum();
            (min, max, round_to_precision(sum / self.readings.len() as f64))
        };

        Summary {
            date: self.date.clone(),
            scale: self.scale,
            min,
            max,
            avg,
        }
    }

    /// True when there is at least one reading and every reading is strictly
    /// above `threshold`
    pub fn is_above_threshold(&self, threshold: f64) -> bool {
        !self.readings.is_empty() && self.readings.iter().all(|&reading| reading > threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TemperatureError;
    use alloc::vec;

    fn may_first() -> TemperatureRecord {
        TemperatureRecord::new("2024-05-01", vec![10.0, 12.5, 15.0], "celsius").unwrap()
    }

    #[test]
    fn scale_is_normalized() {
        let record = TemperatureRecord::new("2024-05-02", vec![50.0], "FahrenHeit").unwrap();
        assert_eq!(record.scale(), Scale::Fahrenheit);
        assert_eq!(record.summary().scale.as_str(), "fahrenheit");
    }

    #[test]
    fn unknown_scale_rejected() {
        let err = TemperatureRecord::new("2024-05-02", vec![1.0], "rankine").unwrap_err();
        assert_eq!(
            err,
            TemperatureError::UnsupportedScale {
                scale: "rankine".into()
            }
        );
    }

    #[test]
    fn summary_of_readings() {
        let summary = may_first().summary();
        assert_eq!(summary.date, "2024-05-01");
        assert_eq!(summary.scale, Scale::Celsius);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 15.0);
        assert_eq!(summary.avg, 12.5);
    }

    #[test]
    fn summary_rounds_only_the_average() {
        let record = TemperatureRecord::with_scale("d", vec![1.111, 2.0, 3.456], Scale::Kelvin);
        let summary = record.summary();
        assert_eq!(summary.min, 1.111);
        assert_eq!(summary.max, 3.456);
        assert_eq!(summary.avg, 2.19);
    }

    #[test]
    fn summary_average_ties_round_to_even() {
        let record = TemperatureRecord::with_scale("d", vec![10.0, 10.25], Scale::Celsius);
        assert_eq!(record.summary().avg, 10.12);
    }

    #[test]
    fn empty_summary_is_zeroed() {
        let record = TemperatureRecord::new("2024-05-04", Vec::new(), "celsius").unwrap();
        assert_eq!(
            record.summary(),
            Summary {
                date: "2024-05-04".into(),
                scale: Scale::Celsius,
                min: 0.0,
                max: 0.0,
                avg: 0.0,
            }
        );
    }

    #[test]
    fn threshold_requires_every_reading() {
        let record = may_first();
        // 10.0 itself is not strictly above 10.0
        assert!(!record.is_above_threshold(10.0));
        assert!(record.is_above_threshold(9.99));
        assert!(!record.is_above_threshold(15.0));
    }

    #[test]
    fn threshold_on_empty_record_is_false() {
        let record = TemperatureRecord::with_scale("2024-05-04", Vec::new(), Scale::Celsius);
        assert!(!record.is_above_threshold(0.0));
        assert!(!record.is_above_threshold(f64::NEG_INFINITY));
    }

    #[test]
    fn convert_updates_readings_and_scale() {
        let mut record = may_first();
        record.convert_to("fahrenheit").unwrap();
        assert_eq!(record.scale(), Scale::Fahrenheit);
        assert_eq!(record.readings(), &[50.0, 54.5, 59.0]);

        record.convert_to("KELVIN").unwrap();
        assert_eq!(record.scale(), Scale::Kelvin);
        assert_eq!(record.readings(), &[283.15, 285.65, 288.15]);

        record.convert_to("celsius").unwrap();
        assert_eq!(record.readings(), &[10.0, 12.5, 15.0]);
    }

    #[test]
    fn convert_to_same_scale_keeps_raw_readings() {
        let mut record = TemperatureRecord::with_scale("d", vec![10.123456], Scale::Celsius);
        record.convert_to("Celsius").unwrap();
        assert_eq!(record.readings(), &[10.123456]);
    }

    #[test]
    fn failed_convert_leaves_record_untouched() {
        let mut record = may_first();
        let before = record.clone();
        assert!(record.convert_to("mars").is_err());
        assert_eq!(record, before);
    }

    #[test]
    fn convert_empty_record_changes_scale_only() {
        let mut record = TemperatureRecord::with_scale("2024-05-07", Vec::new(), Scale::Celsius);
        record.convert_to_scale(Scale::Fahrenheit);
        assert_eq!(record.scale(), Scale::Fahrenheit);
        assert!(!record.has_readings());
        assert_eq!(record.summary().avg, 0.0);
    }
}
