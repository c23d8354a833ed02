//! Binomial distribution: successes in `trials` independent Bernoulli(p)
//! trials.

use proba_math::{choose, log_choose};

use crate::error::{DistError, Result};

fn validate(trials: i64, p: f64, successes: i64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(DistError::InvalidProbability {
            value: p,
            domain: "[0, 1]",
        });
    }
    if trials < 0 {
        return Err(DistError::InvalidParameter {
            name: "trials",
            value: trials as f64,
            reason: "must be non-negative",
        });
    }
    if successes < 0 || successes > trials {
        return Err(DistError::InvalidParameter {
            name: "successes",
            value: successes as f64,
            reason: "must satisfy 0 <= successes <= trials",
        });
    }
    Ok(())
}

/// P(X = successes) = C(trials, successes) · p^k · (1-p)^(n-k).
///
/// Uses the exact integer coefficient; fails with `Overflow` past the u64
/// envelope. Use [`log_pmf`] for large `trials`.
pub fn pmf(trials: i64, p: f64, successes: i64) -> Result<f64> {
    validate(trials, p, successes)?;
    let coeff = choose(trials, successes)? as f64;
    Ok(coeff * p.powf(successes as f64) * (1.0 - p).powf((trials - successes) as f64))
}

/// log P(X = successes) via `log_choose`; robust for large `trials`.
pub fn log_pmf(trials: i64, p: f64, successes: i64) -> Result<f64> {
    validate(trials, p, successes)?;
    let k = successes;
    let n = trials;
    // Degenerate p: all mass on k = 0 (p = 0) or k = n (p = 1).
    if p == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }
    if p == 1.0 {
        return Ok(if k == n { 0.0 } else { f64::NEG_INFINITY });
    }
    let lc = log_choose(n as u64, k as u64);
    Ok(lc + (k as f64) * p.ln() + ((n - k) as f64) * (1.0 - p).ln())
}

/// P(X <= successes), by summation of the mass function.
pub fn cdf(trials: i64, p: f64, successes: i64) -> Result<f64> {
    validate(trials, p, successes)?;
    let mut total = 0.0;
    for k in 0..=successes {
        total += pmf(trials, p, k)?;
    }
    Ok(total.min(1.0))
}
