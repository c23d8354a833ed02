//! Normal (Gaussian) distribution.

use std::f64::consts::PI;

use proba_math::Trapezoid;

use crate::error::{DistError, Result};

fn validate(mean: f64, sd: f64) -> Result<()> {
    if !mean.is_finite() {
        return Err(DistError::InvalidParameter {
            name: "mean",
            value: mean,
            reason: "must be finite",
        });
    }
    if !sd.is_finite() || sd <= 0.0 {
        return Err(DistError::InvalidParameter {
            name: "sd",
            value: sd,
            reason: "standard deviation must be positive and finite",
        });
    }
    Ok(())
}

fn density(mean: f64, sd: f64, x: f64) -> f64 {
    let z = (x - mean) / sd;
    (-0.5 * z * z).exp() / ((2.0 * PI).sqrt() * sd)
}

/// Normal density at `x`.
pub fn pdf(mean: f64, sd: f64, x: f64) -> Result<f64> {
    validate(mean, sd)?;
    Ok(density(mean, sd, x))
}

/// Probability that a normal variate falls in `[lower, upper]`, by
/// trapezoidal integration of the density.
pub fn interval_prob(mean: f64, sd: f64, lower: f64, upper: f64, quad: &Trapezoid) -> Result<f64> {
    validate(mean, sd)?;
    let p = quad.integrate(|x| density(mean, sd, x), lower, upper)?;
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_peak_at_mean() {
        let at_mean = pdf(0.0, 1.0, 0.0).unwrap();
        assert!((at_mean - 1.0 / (2.0 * PI).sqrt()).abs() < 1e-12);
        assert!(pdf(0.0, 1.0, 1.0).unwrap() < at_mean);
    }

    #[test]
    fn one_sigma_interval() {
        // P(-1 <= Z <= 1) for the standard normal.
        let quad = Trapezoid::default();
        let p = interval_prob(0.0, 1.0, -1.0, 1.0, &quad).unwrap();
        assert!((p - 0.6827).abs() < 1e-3, "got {}", p);
    }

    #[test]
    fn wide_interval_is_nearly_one() {
        let quad = Trapezoid::default();
        let p = interval_prob(0.0, 1.0, -8.0, 8.0, &quad).unwrap();
        assert!((p - 1.0).abs() < 1e-6, "got {}", p);
    }

    #[test]
    fn location_scale_invariance() {
        let quad = Trapezoid::default();
        let standard = interval_prob(0.0, 1.0, -1.0, 1.0, &quad).unwrap();
        let shifted = interval_prob(10.0, 3.0, 7.0, 13.0, &quad).unwrap();
        assert!((standard - shifted).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_sd() {
        assert!(matches!(
            pdf(0.0, 0.0, 1.0),
            Err(DistError::InvalidParameter { name: "sd", .. })
        ));
        assert!(matches!(
            pdf(0.0, -1.0, 1.0),
            Err(DistError::InvalidParameter { name: "sd", .. })
        ));
    }
}
