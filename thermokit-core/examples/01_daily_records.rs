//! Daily Records Walkthrough
//!
//! Builds a week of sample records in mixed scales and prints the output of
//! every record method and every aggregation.
//!
//! ## What You'll Learn
//!
//! - Creating records from scale names
//! - Converting a record between scales
//! - Converting single values
//! - Aggregating across records in different scales
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_daily_records
//! ```

use thermokit_core::{
    analytics::{
        average_across_records, detect_extreme_days, detect_spike, detect_spike_default,
        hottest_day, temperature_range_for_each_day, temperature_trend,
    },
    convert, TemperatureRecord, TemperatureResult,
};

fn main() -> TemperatureResult<()> {
    println!("Thermokit Daily Records Example");
    println!("===============================\n");

    let mut record1 = TemperatureRecord::new("2024-05-01", vec![10.0, 12.5, 15.0], "celsius")?;
    let record2 = TemperatureRecord::new("2024-05-02", vec![50.0, 53.6, 57.2], "fahrenheit")?;
    let record3 = TemperatureRecord::new("2024-05-03", vec![283.15, 285.15, 287.15], "kelvin")?;
    let record4 = TemperatureRecord::new("2024-05-04", Vec::new(), "celsius")?;
    let record5 = TemperatureRecord::new("2024-05-05", vec![25.0, 25.0, 25.0], "celsius")?;
    let record6 = TemperatureRecord::new("2024-05-06", vec![70.0, 75.0, 80.0], "fahrenheit")?;

    println!("--- Records ---");
    println!("Record 1 summary: {:?}", record1.summary());

    for target in ["fahrenheit", "kelvin", "celsius"] {
        record1.convert_to(target)?;
        println!("Record 1 in {target}: {:?}", record1.summary());
    }

    println!("Record 1 above 10°C? {}", record1.is_above_threshold(10.0));
    println!("Record 1 above 9°C? {}", record1.is_above_threshold(9.0));
    println!("Record 4 (empty) above 0°C? {}", record4.is_above_threshold(0.0));

    println!("\n--- Conversions ---");
    let conversions = [
        (100.0, "celsius", "fahrenheit"),
        (32.0, "fahrenheit", "celsius"),
        (0.0, "celsius", "kelvin"),
        (273.15, "kelvin", "celsius"),
        (100.0, "fahrenheit", "kelvin"),
        (300.0, "kelvin", "fahrenheit"),
        (25.0, "celsius", "celsius"),
    ];
    for (value, from, to) in conversions {
        println!("{value} {from} -> {to}: {}", convert(value, from, to)?);
    }
    match convert(5.0, "celsius", "mars") {
        Ok(value) => println!("5 celsius -> mars: {value}"),
        Err(e) => println!("5 celsius -> mars: {e}"),
    }

    println!("\n--- Analytics ---");
    let records = [record1, record2, record3, record4, record5, record6];

    println!("Average across days (°C): {}", average_across_records(&records));
    println!("Hottest day: {:?}", hottest_day(&records));
    for threshold in [15.0, 25.0, 100.0] {
        println!(
            "Days above {threshold}°C: {:?}",
            detect_extreme_days(&records, threshold)
        );
    }

    println!("Ranges per day:");
    for (date, range) in temperature_range_for_each_day(&records) {
        println!("  {date}: {} .. {}", range.min, range.max);
    }

    let trend_temps = [10.0, 12.5, 11.5, 15.0, 15.0, 14.0];
    let trend: Vec<String> = temperature_trend(&trend_temps)
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Trend for {trend_temps:?}: {trend:?}");

    let spiky = [10.0, 12.0, 11.0, 18.0, 19.0, 20.0];
    let calm = [10.0, 12.0, 11.0, 13.0, 14.0, 15.0];
    println!("Spike in {spiky:?} (default 5.0): {}", detect_spike_default(&spiky));
    println!("Spike in {spiky:?} (threshold 10): {}", detect_spike(&spiky, 10.0));
    println!("Spike in {calm:?} (threshold 5): {}", detect_spike(&calm, 5.0));
    println!("Spike in [10, 15] (threshold 5): {}", detect_spike(&[10.0, 15.0], 5.0));

    println!("\n--- Empty record ---");
    let mut empty = TemperatureRecord::new("2024-05-07", Vec::new(), "celsius")?;
    println!("Summary: {:?}", empty.summary());
    empty.convert_to("fahrenheit")?;
    println!("Summary after conversion: {:?}", empty.summary());

    Ok(())
}
