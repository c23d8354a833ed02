//! Numerical core for probability calculations: trapezoidal quadrature
//! over density functions and exact binomial coefficients.

pub mod error;
pub mod math;

pub use error::{MathError, Result};
pub use math::choose::choose;
pub use math::quadrature::{Trapezoid, DEFAULT_INTERVALS};
pub use math::stable::{log_choose, log_factorial, log_gamma};
