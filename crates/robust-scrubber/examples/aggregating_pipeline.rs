//! Windowing a noisy step signal and relaying detected shifts
//!
//! Run with `RUST_LOG=robust_scrubber=debug` to see every window boundary.

use robust_scrubber::aggregators::{Range, Variance};
use robust_scrubber::{
    detector_fn, scrub, AggregatingParameters, AggregatingScrubber, LinearParameters,
    LinearScrubber, Scrubber, ScrubberScenario,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Scrubber Examples ===\n");

    // Level shifts at 60 and 150, with a small deterministic wobble
    let data: Vec<f64> = (0..240)
        .map(|i| {
            let level = if (60..150).contains(&i) { 8.0 } else { 0.0 };
            level + ((i * 7919) % 13) as f64 * 0.05
        })
        .collect();

    let scenario = ScrubberScenario::from_json(r#"{"max_window_cp_number": 3, "to_localize": true}"#)?;

    // A detector that flags any step larger than 4
    let mut detector = detector_fn(|window: &[f64]| {
        Ok(window
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| (pair[1] - pair[0]).abs() > 4.0)
            .map(|(i, _)| i + 1)
            .collect())
    });

    // Example 1: cut windows where the range exceeds 4
    println!("1. Aggregating scrubber (range >= 4, length 5..50)");
    let params = AggregatingParameters::new(4.0)
        .with_min_window_length(5)
        .with_max_window_length(50);
    let mut scrubber = AggregatingScrubber::new(Range, params)?;
    scrubber.assign_data(&data);
    scrubber.set_scenario(Some(scenario));

    for window in scrubber.windows() {
        println!("  window of {} values", window?.len());
    }

    scrubber.restart();
    let summary = scrub(&mut scrubber, &mut detector)?;
    println!(
        "  {} windows, change points: {:?}",
        summary.windows_processed, summary.change_points
    );

    // Example 2: variance-driven windows
    println!("\n2. Aggregating scrubber (variance >= 1.0)");
    let mut scrubber = AggregatingScrubber::new(Variance, AggregatingParameters::new(1.0))?;
    scrubber.assign_data(&data);
    scrubber.set_scenario(Some(scenario));
    let summary = scrub(&mut scrubber, &mut detector)?;
    println!(
        "  {} windows, change points: {:?}",
        summary.windows_processed, summary.change_points
    );

    // Example 3: overlapping sliding windows
    println!("\n3. Linear scrubber (length 40, shift 1/4)");
    let mut scrubber = LinearScrubber::new(LinearParameters::new(40, 0.25))?;
    scrubber.assign_data(&data);
    scrubber.set_scenario(Some(scenario));
    let summary = scrub(&mut scrubber, &mut detector)?;
    println!(
        "  {} windows, change points: {:?}",
        summary.windows_processed, summary.change_points
    );

    Ok(())
}
