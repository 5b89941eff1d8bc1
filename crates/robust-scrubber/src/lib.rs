//! Dataset windowing for changepoint detection
//!
//! Changepoint detectors work on bounded windows of data. A *scrubber*
//! decides where those windows start and end, hands them out one at a time,
//! and translates the window-local change points a detector reports back
//! into indices of the full dataset.
//!
//! # Scrubbers
//!
//! - [`AggregatingScrubber`]: grows each window until an aggregation
//!   function reaches a threshold or a maximum length is hit. Windows
//!   partition the data.
//! - [`LinearScrubber`]: slides a fixed-length window with a configurable
//!   shift. Windows may overlap.
//!
//! Both share the merge policy in [`ScrubberState`]: at most
//! `max_window_cp_number` points are taken from each window, out-of-range
//! offsets are dropped, and the global list stays sorted (and free of
//! duplicates when the scenario asks for localization).
//!
//! ## Usage
//!
//! ```rust
//! use robust_scrubber::{
//!     aggregators::WindowLength, detector_fn, scrub, AggregatingParameters,
//!     AggregatingScrubber, Scrubber, ScrubberScenario,
//! };
//!
//! let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
//!
//! let mut scrubber =
//!     AggregatingScrubber::new(WindowLength, AggregatingParameters::new(3.0)).unwrap();
//! scrubber.assign_data(&data);
//! scrubber.set_scenario(Some(ScrubberScenario::new(5, false)));
//!
//! // Report the middle of every window of length 3
//! let mut detector = detector_fn(|window: &[f64]| {
//!     Ok(if window.len() == 3 { vec![1] } else { vec![] })
//! });
//!
//! let summary = scrub(&mut scrubber, &mut detector).unwrap();
//! assert_eq!(summary.windows_processed, 4);
//! assert_eq!(summary.change_points, vec![1, 4, 7]);
//! ```

pub mod aggregating;
pub mod aggregators;
pub mod linear;
pub mod pipeline;
pub mod state;
pub mod traits;
pub mod types;

pub use aggregating::{AggregatingParameters, AggregatingScrubber};
pub use aggregators::{aggregator_fn, Aggregator};
pub use linear::{LinearParameters, LinearScrubber};
pub use pipeline::{detector_fn, scrub, ScrubSummary, WindowDetector};
pub use state::ScrubberState;
pub use traits::{Scrubber, Windows};
pub use types::{ScrubberScenario, WindowSpan};
