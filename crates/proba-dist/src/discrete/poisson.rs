//! Poisson distribution with mean `mean`.

use crate::error::{DistError, Result};

fn validate(mean: f64, successes: i64) -> Result<()> {
    if !mean.is_finite() || mean <= 0.0 {
        return Err(DistError::InvalidParameter {
            name: "mean",
            value: mean,
            reason: "must be positive and finite",
        });
    }
    if successes < 0 {
        return Err(DistError::InvalidParameter {
            name: "successes",
            value: successes as f64,
            reason: "must be non-negative",
        });
    }
    Ok(())
}

/// P(X = successes) = e^-mean · mean^k / k!.
///
/// `mean^k / k!` is accumulated one factor at a time (`acc · mean / i`), so
/// neither the power nor the factorial is ever materialized on its own.
pub fn pmf(mean: f64, successes: i64) -> Result<f64> {
    validate(mean, successes)?;
    let mut mean_over_factorial = 1.0;
    for i in 1..=successes {
        mean_over_factorial = mean_over_factorial * mean / (i as f64);
    }
    Ok((-mean).exp() * mean_over_factorial)
}

/// P(X <= successes), by summation of the mass function.
pub fn cdf(mean: f64, successes: i64) -> Result<f64> {
    validate(mean, successes)?;
    let mut term = (-mean).exp();
    let mut total = term;
    for i in 1..=successes {
        term = term * mean / (i as f64);
        total += term;
    }
    Ok(total.min(1.0))
}
