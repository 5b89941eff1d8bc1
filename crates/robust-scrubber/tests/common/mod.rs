//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::prelude::*;
use rand_distr::Normal;

/// Piecewise-constant signal with Gaussian noise
///
/// Level `i` spans `[boundaries[i-1], boundaries[i])`; levels alternate
/// between 0 and `jump`.
pub fn step_signal(len: usize, boundaries: &[usize], jump: f64, noise: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, noise).unwrap();
    (0..len)
        .map(|i| {
            let level = boundaries.iter().filter(|&&b| b <= i).count();
            let base = if level % 2 == 0 { 0.0 } else { jump };
            base + rng.sample(normal)
        })
        .collect()
}

/// Offsets inside `window` where consecutive values differ by more than `min_jump`
pub fn jump_offsets(window: &[f64], min_jump: f64) -> Vec<usize> {
    window
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| (pair[1] - pair[0]).abs() > min_jump)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Assert the list is ascending and, if `strict`, free of repeats
pub fn assert_sorted(points: &[usize], strict: bool) {
    for pair in points.windows(2) {
        if strict {
            assert!(pair[0] < pair[1], "not strictly ascending: {:?}", points);
        } else {
            assert!(pair[0] <= pair[1], "not ascending: {:?}", points);
        }
    }
}
