//! End-to-end tests: scrubber windows fed to a detector and merged back

mod common;

use common::{assert_sorted, jump_offsets, step_signal};
use robust_core::Error;
use robust_scrubber::aggregators::{Range, WindowLength};
use robust_scrubber::{
    detector_fn, scrub, AggregatingParameters, AggregatingScrubber, LinearParameters,
    LinearScrubber, Scrubber, ScrubberScenario, WindowSpan,
};

fn range_scrubber<'a>() -> AggregatingScrubber<'a, f64, Range> {
    let params = AggregatingParameters::new(5.0)
        .with_min_window_length(2)
        .with_max_window_length(40);
    AggregatingScrubber::new(Range, params).unwrap()
}

#[test]
fn test_aggregating_windows_cut_at_level_shifts() {
    let data = step_signal(200, &[50, 120], 10.0, 0.1, 7);
    let mut scrubber = range_scrubber();
    scrubber.assign_data(&data);
    scrubber.set_scenario(Some(ScrubberScenario::new(5, true)));

    let mut spans = Vec::new();
    while let Some(window) = scrubber.next_window().unwrap() {
        let span = scrubber.current_window();
        spans.push(span);
        scrubber
            .add_change_points(&jump_offsets(window, 5.0))
            .unwrap();
    }

    assert_eq!(
        spans,
        vec![
            WindowSpan::new(0, 40),
            WindowSpan::new(40, 11),
            WindowSpan::new(51, 40),
            WindowSpan::new(91, 30),
            WindowSpan::new(121, 40),
            WindowSpan::new(161, 39),
        ]
    );
    assert_eq!(scrubber.change_points(), &[50, 120]);
}

#[test]
fn test_scrub_matches_manual_loop() {
    let data = step_signal(200, &[50, 120], 10.0, 0.1, 11);
    let mut scrubber = range_scrubber();
    scrubber.assign_data(&data);
    scrubber.set_scenario(Some(ScrubberScenario::new(5, true)));

    let mut detector = detector_fn(|w: &[f64]| Ok(jump_offsets(w, 5.0)));
    let summary = scrub(&mut scrubber, &mut detector).unwrap();

    assert_eq!(summary.windows_processed, 6);
    assert_eq!(summary.change_points, vec![50, 120]);
    assert_eq!(summary.change_points, scrubber.change_points());
}

#[test]
fn test_linear_overlap_with_and_without_localization() {
    let data = step_signal(200, &[50, 120], 10.0, 0.1, 3);
    let params = LinearParameters::new(40, 0.5);

    let mut localized = LinearScrubber::new(params).unwrap();
    localized.assign_data(&data);
    localized.set_scenario(Some(ScrubberScenario::new(5, true)));
    let mut detector = detector_fn(|w: &[f64]| Ok(jump_offsets(w, 5.0)));
    let summary = scrub(&mut localized, &mut detector).unwrap();
    assert_eq!(summary.windows_processed, 9);
    assert_eq!(summary.change_points, vec![50, 120]);

    let mut duplicated = LinearScrubber::new(params).unwrap();
    duplicated.assign_data(&data);
    duplicated.set_scenario(Some(ScrubberScenario::new(5, false)));
    let summary = scrub(&mut duplicated, &mut detector).unwrap();
    assert_eq!(summary.change_points, vec![50, 50, 120]);
    assert_sorted(&summary.change_points, false);
}

#[test]
fn test_cap_keeps_first_points_of_each_window() {
    let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut scrubber =
        AggregatingScrubber::new(WindowLength, AggregatingParameters::new(5.0)).unwrap();
    scrubber.assign_data(&data);
    scrubber.set_scenario(Some(ScrubberScenario::new(2, false)));

    let mut detector = detector_fn(|_: &[f64]| Ok(vec![4, 3, 2, 1, 0]));
    let summary = scrub(&mut scrubber, &mut detector).unwrap();
    assert_eq!(summary.change_points, vec![3, 4, 8, 9]);
}

#[test]
fn test_out_of_range_offsets_are_dropped() {
    let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut scrubber =
        AggregatingScrubber::new(WindowLength, AggregatingParameters::new(3.0)).unwrap();
    scrubber.assign_data(&data);
    scrubber.set_scenario(Some(ScrubberScenario::new(10, false)));

    let mut detector = detector_fn(|w: &[f64]| Ok(vec![w.len(), 0, w.len() + 7]));
    let summary = scrub(&mut scrubber, &mut detector).unwrap();
    assert_eq!(summary.change_points, vec![0, 3, 6, 9]);
}

#[test]
fn test_reassigning_data_resets_everything() {
    let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut scrubber =
        AggregatingScrubber::new(WindowLength, AggregatingParameters::new(3.0)).unwrap();
    scrubber.assign_data(&data);
    scrubber.set_scenario(Some(ScrubberScenario::new(10, false)));

    let mut detector = detector_fn(|_: &[f64]| Ok(vec![0]));
    scrub(&mut scrubber, &mut detector).unwrap();
    scrubber.stop();
    assert!(!scrubber.change_points().is_empty());

    let other: Vec<f64> = vec![1.0; 4];
    scrubber.assign_data(&other);
    assert!(scrubber.change_points().is_empty());
    assert!(scrubber.is_running());
    assert_eq!(scrubber.current_window(), WindowSpan::default());
    assert_eq!(scrubber.next_window().unwrap(), Some(&other[..3]));

    // Scenario survives a reset
    assert_eq!(scrubber.scenario(), Some(&ScrubberScenario::new(10, false)));

    scrubber.assign_data(&data);
    let summary = scrub(&mut scrubber, &mut detector).unwrap();
    assert_eq!(summary.change_points, vec![0, 3, 6, 9]);
}

#[test]
fn test_stopping_mid_pass() {
    let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut scrubber =
        AggregatingScrubber::new(WindowLength, AggregatingParameters::new(3.0)).unwrap();
    scrubber.assign_data(&data);
    scrubber.set_scenario(Some(ScrubberScenario::new(10, false)));

    let mut seen = 0;
    while let Some(_window) = scrubber.next_window().unwrap() {
        seen += 1;
        scrubber.add_change_points(&[2]).unwrap();
        if seen == 2 {
            scrubber.stop();
        }
    }
    assert_eq!(seen, 2);
    assert_eq!(scrubber.change_points(), &[2, 5]);
}

#[test]
fn test_missing_scenario_is_a_configuration_error() {
    let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut scrubber =
        AggregatingScrubber::new(WindowLength, AggregatingParameters::new(3.0)).unwrap();
    scrubber.assign_data(&data);
    scrubber.next_window().unwrap();

    let err = scrubber.add_change_points(&[0]).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));

    scrubber.set_scenario(Some(ScrubberScenario::new(1, true)));
    scrubber.add_change_points(&[0]).unwrap();
    assert_eq!(scrubber.change_points(), &[0]);

    scrubber.set_scenario(None);
    assert!(scrubber.add_change_points(&[1]).is_err());
}
