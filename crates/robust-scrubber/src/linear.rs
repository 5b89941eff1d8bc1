//! Fixed-length sliding windows

use crate::state::ScrubberState;
use crate::traits::Scrubber;
use crate::types::WindowSpan;
use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Linear scrubber parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearParameters {
    /// Number of elements in every window
    pub window_length: usize,
    /// Window advance as a fraction of `window_length`
    pub shift_factor: f64,
}

impl Default for LinearParameters {
    fn default() -> Self {
        Self {
            window_length: 100,
            shift_factor: 1.0 / 3.0,
        }
    }
}

impl LinearParameters {
    pub fn new(window_length: usize, shift_factor: f64) -> Self {
        Self {
            window_length,
            shift_factor,
        }
    }

    /// Distance between consecutive window starts, never less than one
    pub fn shift(&self) -> usize {
        ((self.window_length as f64 * self.shift_factor) as usize).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_length == 0 {
            return Err(Error::InvalidParameter(
                "window_length must be at least 1".to_string(),
            ));
        }
        if !self.shift_factor.is_finite() || self.shift_factor <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "shift_factor must be positive and finite, got {}",
                self.shift_factor
            )));
        }
        Ok(())
    }
}

/// Scrubber that slides a fixed-length window across the data
///
/// Windows start at 0 and move forward by [`LinearParameters::shift`]
/// while a full window still fits. With a shift smaller than the window
/// length consecutive windows overlap, so the same change point can be
/// reported twice; set `to_localize` on the scenario to keep one copy.
///
/// A dataset shorter than `window_length` yields one short window covering
/// all of it. Elements after the last full window are not visited.
pub struct LinearScrubber<'a, T> {
    state: ScrubberState<'a, T>,
    params: LinearParameters,
    window_start: usize,
    current: WindowSpan,
}

impl<T> Clone for LinearScrubber<'_, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            params: self.params,
            window_start: self.window_start,
            current: self.current,
        }
    }
}

impl<T> std::fmt::Debug for LinearScrubber<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearScrubber")
            .field("state", &self.state)
            .field("params", &self.params)
            .field("window_start", &self.window_start)
            .field("current", &self.current)
            .finish()
    }
}

impl<'a, T> LinearScrubber<'a, T> {
    pub fn new(params: LinearParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            state: ScrubberState::new(),
            params,
            window_start: 0,
            current: WindowSpan::default(),
        })
    }

    pub fn parameters(&self) -> &LinearParameters {
        &self.params
    }
}

impl<'a, T: 'a> Scrubber<'a, T> for LinearScrubber<'a, T> {
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

    fn next_window(&mut self) -> Result<Option<&'a [T]>> {
        let data = self.state.data();
        let start = self.window_start;
        let full_window_fits = start
            .checked_add(self.params.window_length)
            .is_some_and(|end| end <= data.len());
        let short_first_window = start == 0 && !data.is_empty();
        if !self.state.is_running() || !(full_window_fits || short_first_window) {
            return Ok(None);
        }

        let end = start.saturating_add(self.params.window_length).min(data.len());
        self.current = WindowSpan::new(start, end - start);
        self.window_start = start.saturating_add(self.params.shift());
        debug!("Sliding window {}", self.current);
        Ok(Some(&data[start..end]))
    }

    fn current_window(&self) -> WindowSpan {
        self.current
    }
}
