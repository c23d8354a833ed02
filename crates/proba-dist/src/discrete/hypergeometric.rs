//! Hypergeometric distribution: successes when drawing without replacement.
//!
//! Parameters follow the sampling picture: a population of `population`
//! items containing `pop_successes` marked ones, from which `sample_size`
//! items are drawn.

use proba_math::{choose, log_choose};

use crate::error::{DistError, Result};

fn validate(
    sample_size: i64,
    population: i64,
    pop_successes: i64,
    sample_successes: i64,
) -> Result<()> {
    if population < 0 {
        return Err(DistError::InvalidParameter {
            name: "population",
            value: population as f64,
            reason: "must be non-negative",
        });
    }
    if sample_size < 0 || sample_size > population {
        return Err(DistError::InvalidParameter {
            name: "sample_size",
            value: sample_size as f64,
            reason: "must satisfy 0 <= sample_size <= population",
        });
    }
    if pop_successes < 0 || pop_successes > population {
        return Err(DistError::InvalidParameter {
            name: "pop_successes",
            value: pop_successes as f64,
            reason: "must satisfy 0 <= pop_successes <= population",
        });
    }
    // The count must be drawable: no more successes than exist, no more
    // failures than exist.
    if sample_successes < 0
        || sample_successes > sample_size
        || sample_successes > pop_successes
        || sample_size - sample_successes > population - pop_successes
    {
        return Err(DistError::InvalidParameter {
            name: "sample_successes",
            value: sample_successes as f64,
            reason: "count is not drawable from the given population",
        });
    }
    Ok(())
}

/// P(X = sample_successes) =
/// C(K, k) · C(N-K, n-k) / C(N, n).
///
/// All three coefficients are computed exactly and converted to `f64` once
/// each; for populations past the exact envelope use [`log_pmf`].
pub fn pmf(
    sample_size: i64,
    population: i64,
    pop_successes: i64,
    sample_successes: i64,
) -> Result<f64> {
    validate(sample_size, population, pop_successes, sample_successes)?;
    let ways_successes = choose(pop_successes, sample_successes)? as f64;
    let ways_failures = choose(
        population - pop_successes,
        sample_size - sample_successes,
    )? as f64;
    let ways_total = choose(population, sample_size)? as f64;
    Ok(ways_successes * ways_failures / ways_total)
}

/// log P(X = sample_successes) via `log_choose`; robust for large
/// populations.
pub fn log_pmf(
    sample_size: i64,
    population: i64,
    pop_successes: i64,
    sample_successes: i64,
) -> Result<f64> {
    validate(sample_size, population, pop_successes, sample_successes)?;
    let lc = log_choose(pop_successes as u64, sample_successes as u64)
        + log_choose(
            (population - pop_successes) as u64,
            (sample_size - sample_successes) as u64,
        )
        - log_choose(population as u64, sample_size as u64);
    Ok(lc)
}

/// P(X <= sample_successes), by summation over drawable counts.
pub fn cdf(
    sample_size: i64,
    population: i64,
    pop_successes: i64,
    sample_successes: i64,
) -> Result<f64> {
    validate(sample_size, population, pop_successes, sample_successes)?;
    // Smallest drawable count: failures are capped by the population.
    let k_min = (sample_size - (population - pop_successes)).max(0);
    let mut total = 0.0;
    for k in k_min..=sample_successes {
        total += pmf(sample_size, population, pop_successes, k)?;
    }
    Ok(total.min(1.0))
}
