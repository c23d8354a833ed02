//! Closed-form probability mass and density functions.
//!
//! Continuous densities pair each PDF with an `interval_prob` helper that
//! binds the distribution parameters into a single-variable closure and
//! hands it to the trapezoidal engine from `proba-math`; discrete
//! distributions build on the exact `choose` primitive, with log-domain
//! variants for arguments past the exact integer range.

pub mod continuous;
pub mod discrete;
pub mod error;

pub use error::{DistError, Result};

// Re-exported so callers can configure integration resolution without
// depending on proba-math directly.
pub use proba_math::Trapezoid;
