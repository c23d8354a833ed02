//! Negative binomial distribution: trial number of the r-th success.

use proba_math::{choose, log_choose};

use crate::error::{DistError, Result};

fn validate(r: i64, p: f64, trials: i64) -> Result<()> {
    if !(p > 0.0 && p < 1.0) {
        return Err(DistError::InvalidProbability {
            value: p,
            domain: "(0, 1)",
        });
    }
    if r < 1 {
        return Err(DistError::InvalidParameter {
            name: "r",
            value: r as f64,
            reason: "success count must be at least 1",
        });
    }
    if trials < r {
        return Err(DistError::InvalidParameter {
            name: "trials",
            value: trials as f64,
            reason: "r-th success needs at least r trials",
        });
    }
    Ok(())
}

/// P(r-th success on trial `trials`) = C(trials-1, r-1) · p^r · (1-p)^(t-r).
pub fn pmf(r: i64, p: f64, trials: i64) -> Result<f64> {
    validate(r, p, trials)?;
    let coeff = choose(trials - 1, r - 1)? as f64;
    Ok(coeff * p.powf(r as f64) * (1.0 - p).powf((trials - r) as f64))
}

/// log P(r-th success on trial `trials`); robust for large `trials`.
pub fn log_pmf(r: i64, p: f64, trials: i64) -> Result<f64> {
    validate(r, p, trials)?;
    let lc = log_choose((trials - 1) as u64, (r - 1) as u64);
    Ok(lc + (r as f64) * p.ln() + ((trials - r) as f64) * (1.0 - p).ln())
}

/// P(r-th success on or before trial `trials`), by summation.
pub fn cdf(r: i64, p: f64, trials: i64) -> Result<f64> {
    validate(r, p, trials)?;
    let mut total = 0.0;
    for t in r..=trials {
        total += pmf(r, p, t)?;
    }
    Ok(total.min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn reduces_to_geometric_for_r_one() {
        for t in 1..=10 {
            let nb = pmf(1, 0.35, t).unwrap();
            let geo = crate::discrete::geometric::pmf(0.35, t).unwrap();
            assert!(approx_eq(nb, geo, 1e-12), "t = {}", t);
        }
    }

    #[test]
    fn known_value() {
        // Third success on the fifth trial, p = 0.5:
        // C(4, 2) · 0.5^3 · 0.5^2 = 6 / 32
        assert!(approx_eq(pmf(3, 0.5, 5).unwrap(), 6.0 / 32.0, 1e-12));
    }

    #[test]
    fn log_pmf_agrees_with_pmf() {
        for t in 3..=20 {
            let direct = pmf(3, 0.4, t).unwrap();
            let logged = log_pmf(3, 0.4, t).unwrap().exp();
            assert!(approx_eq(direct, logged, 1e-10), "t = {}", t);
        }
    }

    #[test]
    fn cdf_is_monotone_and_bounded() {
        let mut prev = 0.0;
        for t in 4..=60 {
            let c = cdf(4, 0.3, t).unwrap();
            assert!(c >= prev && c <= 1.0);
            prev = c;
        }
        assert!(prev > 0.99);
    }

    #[test]
    fn rejects_out_of_domain() {
        assert!(matches!(
            pmf(0, 0.5, 5),
            Err(DistError::InvalidParameter { name: "r", .. })
        ));
        assert!(matches!(
            pmf(3, 0.5, 2),
            Err(DistError::InvalidParameter { name: "trials", .. })
        ));
        assert!(matches!(
            pmf(3, 1.0, 5),
            Err(DistError::InvalidProbability { .. })
        ));
    }
}
