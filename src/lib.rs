//! # Robust Scrubbing
//!
//! Windowing layer for changepoint detection pipelines. Detectors run on
//! individual windows; the scrubbers in this workspace pick the window
//! boundaries and fold each window's change points back into one ordered
//! list for the whole dataset.
//!
//! ## Crates
//!
//! - [`robust_core`]: error type and numeric element trait
//! - [`robust_scrubber`]: the `Scrubber` contract, the aggregating and linear
//!   scrubbers, built-in aggregators and the detection driver
//!
//! ## Example
//!
//! ```rust
//! use robust_scrubbing::prelude::*;
//!
//! let data = vec![0.0, 0.1, 0.0, 5.0, 5.1, 4.9, 5.0, 0.0];
//! let params = AggregatingParameters::new(2.0).with_max_window_length(4);
//! let mut scrubber = AggregatingScrubber::new(Range, params).unwrap();
//! scrubber.assign_data(&data);
//! scrubber.set_scenario(Some(ScrubberScenario::new(1, true)));
//!
//! let mut detector = detector_fn(|w: &[f64]| Ok(vec![w.len() - 1]));
//! let summary = scrub(&mut scrubber, &mut detector).unwrap();
//! assert_eq!(summary.change_points, vec![3, 7]);
//! ```

pub use robust_core;
pub use robust_scrubber;

pub use robust_core::{Error, Numeric, Result};

/// Commonly used items
pub mod prelude {
    pub use robust_core::{Error, Numeric, Result};
    pub use robust_scrubber::aggregators::{
        aggregator_fn, AbsoluteSum, Aggregator, Range, Sum, Variance, WindowLength,
    };
    pub use robust_scrubber::{
        detector_fn, scrub, AggregatingParameters, AggregatingScrubber, LinearParameters,
        LinearScrubber, ScrubSummary, Scrubber, ScrubberScenario, WindowDetector, WindowSpan,
    };
}
