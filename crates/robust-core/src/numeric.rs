//! Numeric element trait for window aggregation
//!
//! Datasets handed to the numeric aggregators can hold any of the common
//! primitive types. Aggregation itself always happens in `f64` so integer
//! windows cannot overflow while summing.

use num_traits::Num;
use std::fmt::Debug;

/// Element type accepted by the built-in window aggregators
pub trait Numeric: Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Convert to f64 for aggregation
    fn to_f64(&self) -> f64;
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn is_finite(&self) -> bool {
                    <$t>::is_finite(*self)
                }

                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn is_finite(&self) -> bool {
                    true
                }

                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_float!(f64, f32);
impl_numeric_int!(i32, u32, i64, u64, usize);
