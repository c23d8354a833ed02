//! Fuzz target for the combinatorial primitive.
//!
//! `choose` must never panic or wrap: any input pair yields either an exact
//! coefficient or a typed error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use proba_math::choose;

fuzz_target!(|args: (i64, i64)| {
    let (n, k) = args;
    if let Ok(value) = choose(n, k) {
        // Anything that computed must satisfy the symmetry law.
        assert_eq!(Ok(value), choose(n, n - k));
    }
});
