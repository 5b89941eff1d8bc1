//! Driving a change point detector over scrubber windows

use crate::traits::Scrubber;
use robust_core::{Error, Result};
use tracing::{debug, instrument};

/// External change point detector applied to one window at a time
pub trait WindowDetector<T> {
    /// Detect change points in `window`, returned as offsets into `window`
    fn detect(&mut self, window: &[T]) -> anyhow::Result<Vec<usize>>;
}

/// Detector backed by a closure
#[derive(Clone, Copy, Debug)]
pub struct FnDetector<F>(F);

/// Wrap a closure as a [`WindowDetector`]
pub fn detector_fn<T, F>(f: F) -> FnDetector<F>
where
    F: FnMut(&[T]) -> anyhow::Result<Vec<usize>>,
{
    FnDetector(f)
}

impl<T, F> WindowDetector<T> for FnDetector<F>
where
    F: FnMut(&[T]) -> anyhow::Result<Vec<usize>>,
{
    fn detect(&mut self, window: &[T]) -> anyhow::Result<Vec<usize>> {
        (self.0)(window)
    }
}

/// Outcome of a full pass over the data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrubSummary {
    /// Windows handed to the detector
    pub windows_processed: usize,
    /// Accepted change points in dataset coordinates
    pub change_points: Vec<usize>,
}

/// Run `detector` on every remaining window of `scrubber`
///
/// Each window's result is merged before the next window is requested.
/// Stops when the scrubber is exhausted or its running flag is cleared.
/// The scrubber is not restarted first; assign data (or call `restart`)
/// before a new pass.
#[instrument(skip_all)]
pub fn scrub<'a, T, S, D>(scrubber: &mut S, detector: &mut D) -> Result<ScrubSummary>
where
    T: 'a,
    S: Scrubber<'a, T>,
    D: WindowDetector<T>,
{
    if scrubber.scenario().is_none() {
        return Err(Error::no_scenario());
    }

    let mut windows_processed = 0;
    while let Some(window) = scrubber.next_window()? {
        let span = scrubber.current_window();
        let local = detector
            .detect(window)
            .map_err(|e| Error::detection(span.start, e))?;
        scrubber.add_change_points(&local)?;
        windows_processed += 1;
    }

    debug!(
        "Scrubbed {} windows, {} change points accepted",
        windows_processed,
        scrubber.change_points().len()
    );
    Ok(ScrubSummary {
        windows_processed,
        change_points: scrubber.change_points().to_vec(),
    })
}
