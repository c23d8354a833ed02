//! Continuous uniform distribution on `[support_lower, support_upper]`.

use proba_math::Trapezoid;

use crate::error::{DistError, Result};

fn validate(support_lower: f64, support_upper: f64) -> Result<()> {
    if !support_lower.is_finite() || !support_upper.is_finite() || support_lower >= support_upper {
        return Err(DistError::InvalidParameter {
            name: "support_upper",
            value: support_upper,
            reason: "support requires lower < upper, both finite",
        });
    }
    Ok(())
}

fn density(support_lower: f64, support_upper: f64, x: f64) -> f64 {
    if support_lower < x && x < support_upper {
        1.0 / (support_upper - support_lower)
    } else {
        0.0
    }
}

/// Uniform density at `x`: `1 / (upper - lower)` inside the support, 0
/// outside.
pub fn pdf(support_lower: f64, support_upper: f64, x: f64) -> Result<f64> {
    validate(support_lower, support_upper)?;
    Ok(density(support_lower, support_upper, x))
}

/// Probability that a uniform variate falls in `[lower, upper]`, by
/// trapezoidal integration of the density.
pub fn interval_prob(
    support_lower: f64,
    support_upper: f64,
    lower: f64,
    upper: f64,
    quad: &Trapezoid,
) -> Result<f64> {
    validate(support_lower, support_upper)?;
    let p = quad.integrate(|x| density(support_lower, support_upper, x), lower, upper)?;
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_inside_and_outside_support() {
        assert_eq!(pdf(0.0, 4.0, 2.0).unwrap(), 0.25);
        assert_eq!(pdf(0.0, 4.0, -1.0).unwrap(), 0.0);
        assert_eq!(pdf(0.0, 4.0, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn full_support_integrates_to_one() {
        let quad = Trapezoid::default();
        let p = interval_prob(-2.0, 3.0, -2.0, 3.0, &quad).unwrap();
        assert!((p - 1.0).abs() < 1e-6);
    }

    #[test]
    fn half_support_integrates_to_half() {
        let quad = Trapezoid::default();
        let p = interval_prob(0.0, 10.0, 0.0, 5.0, &quad).unwrap();
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rejects_degenerate_support() {
        assert!(matches!(
            pdf(1.0, 1.0, 0.5),
            Err(DistError::InvalidParameter { .. })
        ));
        assert!(matches!(
            pdf(3.0, 1.0, 0.5),
            Err(DistError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn inverted_integration_bounds_propagate() {
        let quad = Trapezoid::default();
        assert!(matches!(
            interval_prob(0.0, 1.0, 0.8, 0.2, &quad),
            Err(DistError::Math(_))
        ));
    }
}
