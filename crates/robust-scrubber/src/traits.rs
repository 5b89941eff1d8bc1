//! The scrubber contract
//!
//! A scrubber splits a dataset into windows for a change point detector and
//! maps the detector's window-local results back onto the full dataset.
//!
//! The expected cycle is:
//!
//! 1. [`Scrubber::assign_data`] (always resets the scrubber)
//! 2. [`Scrubber::set_scenario`]
//! 3. repeatedly pull a window with [`Scrubber::next_window`], run the
//!    detector on it and hand the result to [`Scrubber::add_change_points`]
//!    before pulling the next window
//! 4. read [`Scrubber::change_points`]

use crate::state::ScrubberState;
use crate::types::{ScrubberScenario, WindowSpan};
use robust_core::Result;
use std::marker::PhantomData;

/// Windowing policy over a borrowed dataset
///
/// Implementors provide the window cursor; the dataset, scenario, running
/// flag and accepted change points live in the embedded [`ScrubberState`].
pub trait Scrubber<'a, T: 'a> {
    /// Shared state
    fn state(&self) -> &ScrubberState<'a, T>;

    /// Shared state, mutable
    fn state_mut(&mut self) -> &mut ScrubberState<'a, T>;

    /// Reset the window cursor, clear change points and set the running flag
    fn restart(&mut self);

    /// Produce the next window, or `None` once the data is exhausted or the
    /// running flag is cleared
    ///
    /// Windows come out in increasing start order. Exhaustion is final until
    /// [`Scrubber::restart`] is called.
    fn next_window(&mut self) -> Result<Option<&'a [T]>>;

    /// Span of the most recently produced window
    fn current_window(&self) -> WindowSpan;

    /// Map change points detected in the current window into the global list
    ///
    /// Fails with a configuration error if no scenario is attached.
    fn add_change_points(&mut self, window_change_points: &[usize]) -> Result<()> {
        let window = self.current_window();
        self.state_mut().merge(window, window_change_points)
    }

    /// Replace the dataset and reset the scrubber
    fn assign_data(&mut self, data: &'a [T]) {
        self.state_mut().set_data(data);
        self.restart();
    }

    fn data(&self) -> &'a [T] {
        self.state().data()
    }

    fn scenario<'s>(&'s self) -> Option<&'s ScrubberScenario>
    where
        'a: 's,
    {
        self.state().scenario()
    }

    fn set_scenario(&mut self, scenario: Option<ScrubberScenario>) {
        self.state_mut().set_scenario(scenario);
    }

    fn is_running(&self) -> bool {
        self.state().is_running()
    }

    fn set_running(&mut self, running: bool) {
        self.state_mut().set_running(running);
    }

    /// Stop window production at the next window boundary
    fn stop(&mut self) {
        self.set_running(false);
    }

    /// Accepted change points, ascending, in dataset coordinates
    fn change_points<'s>(&'s self) -> &'s [usize]
    where
        'a: 's,
    {
        self.state().change_points()
    }

    /// Iterate over the remaining windows
    ///
    /// The iterator holds the scrubber mutably, so change points cannot be
    /// added while it is alive. Use [`Scrubber::next_window`] or
    /// [`crate::pipeline::scrub`] to drive detection.
    fn windows(&mut self) -> Windows<'_, 'a, Self, T>
    where
        Self: Sized,
    {
        Windows::new(self)
    }
}

/// Iterator over the windows a scrubber still has to produce
///
/// Fused after the first error.
pub struct Windows<'s, 'a, S, T> {
    scrubber: &'s mut S,
    failed: bool,
    _marker: PhantomData<&'a [T]>,
}

impl<'s, 'a, S, T> Windows<'s, 'a, S, T>
where
    S: Scrubber<'a, T>,
    T: 'a,
{
    pub fn new(scrubber: &'s mut S) -> Self {
        Self {
            scrubber,
            failed: false,
            _marker: PhantomData,
        }
    }
}

impl<'a, S, T> Iterator for Windows<'_, 'a, S, T>
where
    S: Scrubber<'a, T>,
    T: 'a,
{
    type Item = Result<&'a [T]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let next = self.scrubber.next_window().transpose();
        if matches!(next, Some(Err(_))) {
            self.failed = true;
        }
        next
    }
}
