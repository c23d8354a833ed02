//! Exact binomial coefficients.
//!
//! `choose(n, k)` uses the multiplicative recurrence
//! `result = result * (n - k + i) / i` for `i = 1..=k`. After `i` steps the
//! accumulator holds `C(n - k + i, i)`, a product of `i` consecutive
//! integers over `i!`, so every division is exact. The multiply/divide
//! order must not be rearranged: dividing before the matching multiply
//! truncates.
//!
//! The accumulator is `u128` with checked multiplication and the result
//! must fit `u64`, so an out-of-range coefficient is reported as
//! [`MathError::Overflow`] instead of wrapping. The result is exact for
//! every `(n, k)` whose true value fits `u64`; in particular all `n <= 67`
//! succeed for every `k`, and central `k` starts overflowing at `n = 68`.

use crate::error::{MathError, Result};

/// Number of unordered size-`k` subsets of an `n`-element set.
///
/// Domain: `n >= 0`, `0 <= k <= n`.
///
/// # Example
/// ```
/// use proba_math::choose;
///
/// assert_eq!(choose(5, 2).unwrap(), 10);
/// assert_eq!(choose(10, 0).unwrap(), 1);
/// ```
pub fn choose(n: i64, k: i64) -> Result<u64> {
    if n < 0 || k < 0 {
        return Err(MathError::NegativeArgument { n, k });
    }
    if k > n {
        return Err(MathError::KTooLarge { n, k });
    }

    if k == 0 {
        return Ok(1);
    }
    if k == 1 {
        return Ok(n as u64);
    }

    let overflow = MathError::Overflow { n, k };

    // Symmetry: C(n, k) = C(n, n - k); take the shorter product.
    let k = (if k > n / 2 { n - k } else { k }) as u128;
    let n = n as u128;

    let mut result: u128 = 1;
    for i in 1..=k {
        result = result.checked_mul(n - k + i).ok_or(overflow)? / i;
    }

    u64::try_from(result).map_err(|_| overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(choose(5, 2).unwrap(), 10);
        assert_eq!(choose(10, 5).unwrap(), 252);
        assert_eq!(choose(52, 5).unwrap(), 2_598_960);
        assert_eq!(choose(0, 0).unwrap(), 1);
    }

    #[test]
    fn boundary_values() {
        for n in 0..=20 {
            assert_eq!(choose(n, 0).unwrap(), 1);
            assert_eq!(choose(n, n).unwrap(), 1);
            if n >= 1 {
                assert_eq!(choose(n, 1).unwrap(), n as u64);
            }
        }
    }

    #[test]
    fn symmetry() {
        for k in 0..=10 {
            assert_eq!(choose(10, k).unwrap(), choose(10, 10 - k).unwrap());
        }
    }

    #[test]
    fn pascal_identity() {
        for n in 2..=30i64 {
            for k in 1..n {
                let lhs = choose(n, k).unwrap();
                let rhs = choose(n - 1, k - 1).unwrap() + choose(n - 1, k).unwrap();
                assert_eq!(lhs, rhs, "Pascal failed at C({}, {})", n, k);
            }
        }
    }

    #[test]
    fn rejects_negative_arguments() {
        assert_eq!(
            choose(-1, 0),
            Err(MathError::NegativeArgument { n: -1, k: 0 })
        );
        assert_eq!(
            choose(5, -2),
            Err(MathError::NegativeArgument { n: 5, k: -2 })
        );
    }

    #[test]
    fn rejects_k_larger_than_n() {
        assert_eq!(choose(10, 11), Err(MathError::KTooLarge { n: 10, k: 11 }));
    }

    #[test]
    fn u64_envelope() {
        // C(67, 33) is the largest central coefficient that fits u64.
        assert_eq!(choose(67, 33).unwrap(), 14_226_520_737_620_288_370);
        assert!(matches!(choose(68, 34), Err(MathError::Overflow { .. })));
        // Far-from-central k still fits at much larger n.
        assert_eq!(choose(1_000, 2).unwrap(), 499_500);
    }
}
