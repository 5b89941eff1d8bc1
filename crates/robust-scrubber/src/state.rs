//! State shared by every scrubber implementation
//!
//! Concrete scrubbers embed a [`ScrubberState`] and only add their own
//! window cursor on top of it. The change point merge lives here so every
//! windowing policy folds window results the same way.

use crate::types::{ScrubberScenario, WindowSpan};
use robust_core::{Error, Result};
use tracing::debug;

/// Dataset reference, scenario, running flag and accepted change points
pub struct ScrubberState<'a, T> {
    data: &'a [T],
    scenario: Option<ScrubberScenario>,
    is_running: bool,
    change_points: Vec<usize>,
}

impl<T> Clone for ScrubberState<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            scenario: self.scenario,
            is_running: self.is_running,
            change_points: self.change_points.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ScrubberState<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrubberState")
            .field("data_len", &self.data.len())
            .field("scenario", &self.scenario)
            .field("is_running", &self.is_running)
            .field("change_points", &self.change_points)
            .finish()
    }
}

impl<T> Default for ScrubberState<'_, T> {
    fn default() -> Self {
        Self {
            data: &[],
            scenario: None,
            is_running: true,
            change_points: Vec::new(),
        }
    }
}

impl<'a, T> ScrubberState<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear accepted change points and allow window production again
    pub fn reset(&mut self) {
        self.change_points.clear();
        self.is_running = true;
    }

    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Replace the dataset reference
    ///
    /// Does not reset; callers go through `Scrubber::assign_data`, which
    /// also resets the policy's cursor.
    pub(crate) fn set_data(&mut self, data: &'a [T]) {
        self.data = data;
    }

    pub fn scenario(&self) -> Option<&ScrubberScenario> {
        self.scenario.as_ref()
    }

    pub fn set_scenario(&mut self, scenario: Option<ScrubberScenario>) {
        self.scenario = scenario;
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn set_running(&mut self, running: bool) {
        self.is_running = running;
    }

    pub fn change_points(&self) -> &[usize] {
        &self.change_points
    }

    /// Fold change points detected in `window` into the global list
    ///
    /// Only the first `max_window_cp_number` entries are considered. Local
    /// indices outside the window are dropped without error. The list is
    /// sorted ascending afterwards; with `to_localize` set, indices already
    /// present are not added again.
    pub fn merge(&mut self, window: WindowSpan, window_change_points: &[usize]) -> Result<()> {
        let scenario = self.scenario.ok_or_else(Error::no_scenario)?;

        let capped_len = window_change_points
            .len()
            .min(scenario.max_window_cp_number);
        if capped_len < window_change_points.len() {
            debug!(
                "Window {} reported {} change points, keeping the first {}",
                window,
                window_change_points.len(),
                capped_len
            );
        }

        let capped = &window_change_points[..capped_len];
        let translated: Vec<usize> = capped
            .iter()
            .filter_map(|&local| window.to_global(local))
            .collect();
        if translated.len() < capped.len() {
            debug!(
                "Dropped {} out-of-range change points from window {}",
                capped.len() - translated.len(),
                window
            );
        }

        if scenario.to_localize {
            // Everything before `existing` is sorted from the previous merge
            let existing = self.change_points.len();
            for point in translated {
                let seen = self.change_points[..existing].binary_search(&point).is_ok()
                    || self.change_points[existing..].contains(&point);
                if !seen {
                    self.change_points.push(point);
                }
            }
        } else {
            self.change_points.extend(translated);
        }

        self.change_points.sort_unstable();
        Ok(())
    }
}
