//! Continuous densities and their numerically integrated cumulative
//! probabilities.

pub mod exponential;
pub mod normal;
pub mod uniform;
