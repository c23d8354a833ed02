//! Error types for the distribution library.

use proba_math::MathError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for distribution operations.
pub type Result<T> = std::result::Result<T, DistError>;

/// Errors from mass/density function evaluation.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistError {
    /// A probability parameter is outside its distribution's domain.
    #[error("probability {value} outside {domain}")]
    InvalidProbability { value: f64, domain: &'static str },

    /// Any other parameter domain violation.
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Failure propagated from the numerical core.
    #[error(transparent)]
    Math(#[from] MathError),
}
