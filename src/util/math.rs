//! Sweep-length arithmetic shared by every iteration strategy.

use std::f64::consts::TAU;

use crate::util::{DriftError, DriftResult};

/// Smallest accepted increment in radians (about 6.3e9 samples per sweep).
pub const MIN_INCREMENT: f64 = 1e-9;

/// Absolute tolerance on the endpoint test, a few ulps of 2π.
const ENDPOINT_TOLERANCE: f64 = 4.0 * f64::EPSILON * TAU;

/// Rejects increments that would produce an empty or unbounded sweep.
pub fn validate_increment(increment: f64) -> DriftResult<f64> {
    if !increment.is_finite() || increment < MIN_INCREMENT {
        return Err(DriftError::InvalidIncrement {
            increment,
            min: MIN_INCREMENT,
        });
    }
    Ok(increment)
}

/// Returns the number of samples in a sweep over `[0, 2π]`.
///
/// A sweep visits every index `i` with `i * increment <= 2π`, so the count is
/// `floor(2π / increment) + 1`. The quotient is corrected against the product
/// `steps * increment`, so exact divisors of 2π keep their endpoint while no
/// sample lands past 2π by more than a few ulps.
pub fn sweep_len(increment: f64) -> DriftResult<usize> {
    let increment = validate_increment(increment)?;
    let limit = TAU + ENDPOINT_TOLERANCE;
    let mut steps = (TAU / increment).floor();
    while steps > 0.0 && steps * increment > limit {
        steps -= 1.0;
    }
    while (steps + 1.0) * increment <= limit {
        steps += 1.0;
    }
    Ok(steps as usize + 1)
}
