//! Error types for the windowing layer
//!
//! Provides a unified error type for all robust-scrubbing crates.

use thiserror::Error;

/// Core error type for windowing and change point merge operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a constructor or builder
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Required configuration missing at call time
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied aggregation function failed during boundary search
    #[error("Aggregator function error: {source}")]
    Aggregator {
        #[source]
        source: anyhow::Error,
    },

    /// External change point detector failed on a window
    #[error("Detection error in window starting at {window_start}: {source}")]
    Detection {
        window_start: usize,
        #[source]
        source: anyhow::Error,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a scrubber with no scenario attached
    pub fn no_scenario() -> Self {
        Self::Configuration("Scrubber has no associated scenario".to_string())
    }

    /// Wrap an aggregator failure
    pub fn aggregator(source: impl Into<anyhow::Error>) -> Self {
        Self::Aggregator {
            source: source.into(),
        }
    }

    /// Wrap a detector failure for the window starting at `window_start`
    pub fn detection(window_start: usize, source: impl Into<anyhow::Error>) -> Self {
        Self::Detection {
            window_start,
            source: source.into(),
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}
