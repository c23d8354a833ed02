//! Error types for the numerical core.
//!
//! Every precondition violation is reported as a typed error carrying the
//! offending values. Nothing here asserts or aborts: a bad input always
//! comes back to the caller as a `MathError`, never as a wrong number.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for core math operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors from the quadrature engine and combinatorial primitive.
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MathError {
    /// Integration bounds fail `lower < upper` (or are not finite).
    #[error("invalid integration bounds: lower = {lower}, upper = {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    /// The trapezoid engine was configured with zero intervals.
    #[error("interval count must be positive, got {intervals}")]
    InvalidIntervalCount { intervals: u32 },

    /// A combinatorial argument was negative.
    #[error("choose({n}, {k}): arguments must be non-negative")]
    NegativeArgument { n: i64, k: i64 },

    /// `k > n` in a combinatorial query.
    #[error("choose({n}, {k}): k exceeds n")]
    KTooLarge { n: i64, k: i64 },

    /// The exact binomial coefficient does not fit in the result type.
    #[error("choose({n}, {k}) exceeds the u64 range")]
    Overflow { n: i64, k: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_values() {
        let err = MathError::InvalidBounds {
            lower: 5.0,
            upper: 2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("5"));
        assert!(msg.contains("2"));

        let err = MathError::KTooLarge { n: 10, k: 11 };
        assert!(err.to_string().contains("11"));
    }

    #[test]
    fn errors_are_copy_and_comparable() {
        let err = MathError::Overflow { n: 68, k: 34 };
        let copy = err;
        assert_eq!(err, copy);
        assert_ne!(err, MathError::Overflow { n: 68, k: 33 });
    }
}
