//! Fuzz target for the discrete mass functions.
//!
//! Every PMF validates eagerly; malformed parameters must come back as
//! errors, and accepted parameters must yield a probability in [0, 1]
//! (up to rounding).

#![no_main]

use libfuzzer_sys::fuzz_target;
use proba_dist::discrete::{binomial, geometric, hypergeometric, negative_binomial, poisson};

fuzz_target!(|args: (i64, i64, i64, i64, f64)| {
    let (a, b, c, d, p) = args;

    let in_unit = |v: f64| (0.0..=1.0 + 1e-9).contains(&v);

    if let Ok(v) = binomial::pmf(a, p, b) {
        assert!(in_unit(v), "binomial pmf out of range: {v}");
    }
    // Poisson cost is O(successes); cap it so an iteration stays cheap.
    if let Ok(v) = poisson::pmf(p.abs(), a.min(10_000)) {
        assert!(in_unit(v), "poisson pmf out of range: {v}");
    }
    if let Ok(v) = geometric::pmf(p, a) {
        assert!(in_unit(v), "geometric pmf out of range: {v}");
    }
    if let Ok(v) = negative_binomial::pmf(a, p, b) {
        assert!(in_unit(v), "negative binomial pmf out of range: {v}");
    }
    if let Ok(v) = hypergeometric::pmf(a, b, c, d) {
        assert!(in_unit(v), "hypergeometric pmf out of range: {v}");
    }
});
