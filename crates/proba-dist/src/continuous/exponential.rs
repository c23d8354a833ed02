//! Exponential distribution with rate `lambda`.

use proba_math::Trapezoid;

use crate::error::{DistError, Result};

fn validate(lambda: f64) -> Result<()> {
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(DistError::InvalidParameter {
            name: "lambda",
            value: lambda,
            reason: "rate must be positive and finite",
        });
    }
    Ok(())
}

fn density(lambda: f64, x: f64) -> f64 {
    if x >= 0.0 {
        lambda * (-lambda * x).exp()
    } else {
        0.0
    }
}

/// Exponential density at `x`: `lambda * exp(-lambda * x)` for `x >= 0`.
pub fn pdf(lambda: f64, x: f64) -> Result<f64> {
    validate(lambda)?;
    Ok(density(lambda, x))
}

/// Probability that an exponential variate falls in `[lower, upper]`, by
/// trapezoidal integration of the density.
pub fn interval_prob(lambda: f64, lower: f64, upper: f64, quad: &Trapezoid) -> Result<f64> {
    validate(lambda)?;
    let p = quad.integrate(|x| density(lambda, x), lower, upper)?;
    Ok(p)
}
