//! Aggregation functions used to decide where windows end
//!
//! An aggregator maps a candidate window to a single score. The
//! [`AggregatingScrubber`](crate::AggregatingScrubber) grows a window until
//! that score reaches its threshold.
//!
//! Custom aggregators are plain closures wrapped with [`aggregator_fn`]:
//!
//! ```rust
//! use robust_scrubber::aggregators::{aggregator_fn, Aggregator};
//!
//! let peak = aggregator_fn(|window: &[f64]| {
//!     Ok(window.iter().cloned().fold(f64::MIN, f64::max))
//! });
//! assert_eq!(peak.aggregate(&[1.0, 7.0, 3.0]).unwrap(), 7.0);
//! ```

use robust_core::{Error, Numeric};

/// Scores a candidate window
pub trait Aggregator<T> {
    /// Compute the score of `window`
    ///
    /// Failures are reported to the scrubber's caller as
    /// `Error::Aggregator` and stop window production.
    fn aggregate(&self, window: &[T]) -> anyhow::Result<f64>;
}

/// Aggregator backed by a closure
#[derive(Clone, Copy, Debug)]
pub struct FnAggregator<F>(F);

/// Wrap a closure as an [`Aggregator`]
pub fn aggregator_fn<T, F>(f: F) -> FnAggregator<F>
where
    F: Fn(&[T]) -> anyhow::Result<f64>,
{
    FnAggregator(f)
}

impl<T, F> Aggregator<T> for FnAggregator<F>
where
    F: Fn(&[T]) -> anyhow::Result<f64>,
{
    fn aggregate(&self, window: &[T]) -> anyhow::Result<f64> {
        (self.0)(window)
    }
}

fn check_finite<T: Numeric>(window: &[T]) -> anyhow::Result<()> {
    if window.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("window").into());
    }
    Ok(())
}

/// Number of elements in the window
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowLength;

impl<T> Aggregator<T> for WindowLength {
    fn aggregate(&self, window: &[T]) -> anyhow::Result<f64> {
        Ok(window.len() as f64)
    }
}

/// Sum of the window's values
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum;

impl<T: Numeric> Aggregator<T> for Sum {
    fn aggregate(&self, window: &[T]) -> anyhow::Result<f64> {
        check_finite(window)?;
        Ok(window.iter().map(Numeric::to_f64).sum())
    }
}

/// Sum of absolute values
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsoluteSum;

impl<T: Numeric> Aggregator<T> for AbsoluteSum {
    fn aggregate(&self, window: &[T]) -> anyhow::Result<f64> {
        check_finite(window)?;
        Ok(window.iter().map(|x| x.to_f64().abs()).sum())
    }
}

/// Difference between the largest and smallest value
#[derive(Clone, Copy, Debug, Default)]
pub struct Range;

impl<T: Numeric> Aggregator<T> for Range {
    fn aggregate(&self, window: &[T]) -> anyhow::Result<f64> {
        check_finite(window)?;
        if window.is_empty() {
            return Ok(0.0);
        }
        let (min, max) = window
            .iter()
            .map(Numeric::to_f64)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
        Ok(max - min)
    }
}

/// Population variance, computed with Welford's algorithm
#[derive(Clone, Copy, Debug, Default)]
pub struct Variance;

impl<T: Numeric> Aggregator<T> for Variance {
    fn aggregate(&self, window: &[T]) -> anyhow::Result<f64> {
        check_finite(window)?;
        if window.is_empty() {
            return Ok(0.0);
        }

        let mut mean = 0.0;
        let mut m2 = 0.0;
        for (count, value) in window.iter().enumerate() {
            let x = value.to_f64();
            let delta = x - mean;
            mean += delta / (count + 1) as f64;
            m2 += delta * (x - mean);
        }
        Ok(m2 / window.len() as f64)
    }
}
