//! Shared fixtures for integration tests
//!
//! A week of records across all three scales, including one day without
//! readings.

#![allow(dead_code)]

use thermokit_core::{Scale, TemperatureRecord};

/// Dates of the fixture week, in fixture order
pub const WEEK_DATES: [&str; 6] = [
    "2024-05-01",
    "2024-05-02",
    "2024-05-03",
    "2024-05-04",
    "2024-05-05",
    "2024-05-06",
];

/// Six days of readings:
///
/// | date       | scale      | readings (°C approx) |
/// |------------|------------|----------------------|
/// | 2024-05-01 | celsius    | 10, 12.5, 15         |
/// | 2024-05-02 | fahrenheit | 10, 12, 14           |
/// | 2024-05-03 | kelvin     | 10, 12, 14           |
/// | 2024-05-04 | celsius    | (none)               |
/// | 2024-05-05 | celsius    | 25, 25, 25           |
/// | 2024-05-06 | fahrenheit | 21.11, 23.89, 26.67  |
pub fn sample_week() -> Vec<TemperatureRecord> {
    vec![
        record("2024-05-01", &[10.0, 12.5, 15.0], "celsius"),
        record("2024-05-02", &[50.0, 53.6, 57.2], "fahrenheit"),
        record("2024-05-03", &[283.15, 285.15, 287.15], "kelvin"),
        record("2024-05-04", &[], "celsius"),
        record("2024-05-05", &[25.0, 25.0, 25.0], "celsius"),
        record("2024-05-06", &[70.0, 75.0, 80.0], "fahrenheit"),
    ]
}

/// Build a record from a scale name, panicking on a bad name
pub fn record(date: &str, readings: &[f64], scale: &str) -> TemperatureRecord {
    TemperatureRecord::new(date, readings.to_vec(), scale)
        .unwrap_or_else(|e| panic!("fixture record {date}: {e}"))
}

/// `days` consecutive records cycling through every scale
pub fn generated_month(days: usize) -> Vec<TemperatureRecord> {
    (0..days)
        .map(|day| {
            let scale = Scale::ALL[day % Scale::ALL.len()];
            let base = 10.0 + (day % 7) as f64;
            let readings: Vec<f64> = (0..24)
                .map(|hour| scale.from_celsius(base + (hour % 12) as f64 * 0.5))
                .collect();
            TemperatureRecord::with_scale(format!("day-{day:02}"), readings, scale)
        })
        .collect()
}

/// Assert two floats agree to within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
