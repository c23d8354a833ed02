//! Geometric distribution: trial number of the first success.

use crate::error::{DistError, Result};

fn validate(p: f64, trial: i64) -> Result<()> {
    if !(p > 0.0 && p < 1.0) {
        return Err(DistError::InvalidProbability {
            value: p,
            domain: "(0, 1)",
        });
    }
    if trial < 1 {
        return Err(DistError::InvalidParameter {
            name: "trial",
            value: trial as f64,
            reason: "first success cannot occur before trial 1",
        });
    }
    Ok(())
}

/// P(first success on trial `trial`) = (1-p)^(t-1) · p.
pub fn pmf(p: f64, trial: i64) -> Result<f64> {
    validate(p, trial)?;
    Ok((1.0 - p).powf((trial - 1) as f64) * p)
}

/// P(first success on or before trial `trial`) = 1 - (1-p)^t.
pub fn cdf(p: f64, trial: i64) -> Result<f64> {
    validate(p, trial)?;
    Ok(1.0 - (1.0 - p).powf(trial as f64))
}
