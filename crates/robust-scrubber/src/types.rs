//! Types shared by all scrubbers

use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Policy values supplied by the detection scenario
///
/// Controls how change points reported for a single window are folded
/// into the run-wide list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrubberScenario {
    /// Maximum number of change points accepted from one window
    pub max_window_cp_number: usize,
    /// Deduplicate change points across the whole run
    pub to_localize: bool,
}

impl ScrubberScenario {
    /// Create a new scenario
    pub fn new(max_window_cp_number: usize, to_localize: bool) -> Self {
        Self {
            max_window_cp_number,
            to_localize,
        }
    }

    /// Load a scenario from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidInput(format!("Malformed scrubber scenario: {e}")))
    }
}

/// Position of a window inside the full dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowSpan {
    /// Global index of the first element
    pub start: usize,
    /// Number of elements
    pub length: usize,
}

impl WindowSpan {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// One past the last global index covered
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Translate a window-local index into the dataset's coordinates
    ///
    /// Returns `None` when `local` falls outside the window.
    pub fn to_global(&self, local: usize) -> Option<usize> {
        (local < self.length).then(|| self.start + local)
    }
}

impl fmt::Display for WindowSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}
