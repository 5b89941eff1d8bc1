//! Core types shared by the robust scrubbing crates
//!
//! This crate holds the pieces every windowing policy depends on:
//!
//! - [`Error`] / [`Result`]: the unified error type for configuration,
//!   aggregator and detector failures
//! - [`Numeric`]: the element trait used by the built-in window aggregators
//!
//! # Example
//!
//! ```rust
//! use robust_core::{Error, Numeric};
//!
//! let window = [1.0f64, 2.0, 3.0];
//! let sum: f64 = window.iter().map(Numeric::to_f64).sum();
//! assert_eq!(sum, 6.0);
//!
//! let err = Error::no_scenario();
//! assert!(err.to_string().starts_with("Configuration error"));
//! ```

pub mod error;
pub mod numeric;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::Numeric;
