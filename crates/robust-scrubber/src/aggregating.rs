//! Threshold-driven windowing
//!
//! [`AggregatingScrubber`] grows each window one element at a time and cuts
//! it as soon as the aggregator's score reaches the threshold, or the window
//! hits its maximum length. Windows never overlap and together cover the
//! whole dataset.

use crate::aggregators::Aggregator;
use crate::state::ScrubberState;
use crate::traits::Scrubber;
use crate::types::WindowSpan;
use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

fn default_min_window_length() -> usize {
    1
}

fn default_max_window_length() -> usize {
    100
}

/// Aggregating scrubber parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatingParameters {
    /// Score at which a candidate window is accepted
    pub threshold: f64,
    /// Candidates shorter than this are never scored
    #[serde(default = "default_min_window_length")]
    pub min_window_length: usize,
    /// Candidates are accepted at this length regardless of score
    #[serde(default = "default_max_window_length")]
    pub max_window_length: usize,
}

impl AggregatingParameters {
    /// Parameters with the default window length bounds (1 to 100)
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            min_window_length: default_min_window_length(),
            max_window_length: default_max_window_length(),
        }
    }

    pub fn with_min_window_length(mut self, min_window_length: usize) -> Self {
        self.min_window_length = min_window_length;
        self
    }

    pub fn with_max_window_length(mut self, max_window_length: usize) -> Self {
        self.max_window_length = max_window_length;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_nan() {
            return Err(Error::InvalidParameter(
                "threshold must not be NaN".to_string(),
            ));
        }
        if self.max_window_length == 0 {
            return Err(Error::InvalidParameter(
                "max_window_length must be at least 1".to_string(),
            ));
        }
        if self.min_window_length > self.max_window_length {
            return Err(Error::InvalidParameter(format!(
                "min_window_length ({}) exceeds max_window_length ({})",
                self.min_window_length, self.max_window_length
            )));
        }
        Ok(())
    }
}

/// Scrubber that cuts windows where an aggregation function crosses a threshold
///
/// For every window the scrubber starts at the first unconsumed element and
/// grows a candidate. Each candidate at least `min_window_length` long is
/// scored; the first one scoring `>= threshold` or reaching
/// `max_window_length` becomes the window. If the data runs out first, the
/// remaining tail is produced as a final window, even when it is shorter
/// than `min_window_length`.
///
/// # Example
///
/// ```rust
/// use robust_scrubber::{
///     aggregators::WindowLength, AggregatingParameters, AggregatingScrubber, Scrubber,
///     ScrubberScenario,
/// };
///
/// let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
/// let mut scrubber =
///     AggregatingScrubber::new(WindowLength, AggregatingParameters::new(3.0)).unwrap();
/// scrubber.assign_data(&data);
/// scrubber.set_scenario(Some(ScrubberScenario::new(5, false)));
///
/// let first = scrubber.next_window().unwrap().unwrap();
/// assert_eq!(first, &[0.0, 1.0, 2.0]);
///
/// let second = scrubber.next_window().unwrap().unwrap();
/// assert_eq!(second, &[3.0, 4.0, 5.0]);
/// scrubber.add_change_points(&[1]).unwrap();
/// assert_eq!(scrubber.change_points(), &[4]);
/// ```
pub struct AggregatingScrubber<'a, T, A> {
    state: ScrubberState<'a, T>,
    aggregator: A,
    params: AggregatingParameters,
    window_start: usize,
    current: WindowSpan,
}

impl<T, A> std::fmt::Debug for AggregatingScrubber<'_, T, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregatingScrubber")
            .field("params", &self.params)
            .field("data_len", &self.state.data().len())
            .field("window_start", &self.window_start)
            .field("current", &self.current)
            .field("change_points", &self.state.change_points())
            .finish()
    }
}

impl<'a, T, A> AggregatingScrubber<'a, T, A>
where
    A: Aggregator<T>,
{
    /// Create a scrubber with no data assigned
    pub fn new(aggregator: A, params: AggregatingParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            state: ScrubberState::new(),
            aggregator,
            params,
            window_start: 0,
            current: WindowSpan::default(),
        })
    }

    pub fn parameters(&self) -> &AggregatingParameters {
        &self.params
    }

    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    fn accept(&mut self, span: WindowSpan) -> &'a [T] {
        self.current = span;
        self.window_start = span.end();
        &self.state.data()[span.range()]
    }
}

impl<'a, T, A> Scrubber<'a, T> for AggregatingScrubber<'a, T, A>
where
    A: Aggregator<T>,
    T: 'a,
{
    fn state(&self) -> &ScrubberState<'a, T> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ScrubberState<'a, T> {
        &mut self.state
    }

    fn restart(&mut self) {
        self.state.reset();
        self.window_start = 0;
        self.current = WindowSpan::default();
    }

    /// Grow and emit the next window
    ///
    /// The running flag is only consulted before a new window is started;
    /// growth of a candidate already in progress runs to completion. An
    /// aggregator failure is returned as `Error::Aggregator` and leaves the
    /// cursor on the window that failed.
    fn next_window(&mut self) -> Result<Option<&'a [T]>> {
        let data = self.state.data();
        if !self.state.is_running() || self.window_start >= data.len() {
            return Ok(None);
        }

        let start = self.window_start;
        let min_len = self.params.min_window_length.max(1);
        for end in start.saturating_add(min_len)..=data.len() {
            let candidate = &data[start..end];
            let length = candidate.len();
            let score = self
                .aggregator
                .aggregate(candidate)
                .map_err(Error::aggregator)?;
            trace!("Candidate [{}, {}) scored {}", start, end, score);

            if score >= self.params.threshold || length >= self.params.max_window_length {
                debug!(
                    "Accepted window [{}, {}) with score {} (threshold {})",
                    start, end, score, self.params.threshold
                );
                return Ok(Some(self.accept(WindowSpan::new(start, length))));
            }
        }

        let tail = WindowSpan::new(start, data.len() - start);
        debug!("No candidate accepted, emitting tail window {}", tail);
        Ok(Some(self.accept(tail)))
    }

    fn current_window(&self) -> WindowSpan {
        self.current
    }
}
