//! Repeated rotation of the previous sample.

use std::time::{Duration, Instant};

use crate::geom::{rotate, Vector2D};
use crate::sweep::Sweep;
use crate::util::{sweep_len, DriftResult};

/// Sweep whose vector and angle are both advanced incrementally.
pub struct AccumulatingSweep;

impl Sweep for AccumulatingSweep {
    const NAME: &'static str = "Vector Rotation";

    fn run<F>(increment: f64, consumer: F) -> DriftResult<Duration>
    where
        F: FnMut(Vector2D, f64) -> DriftResult<()>,
    {
        rotation_inc_iteration(increment, consumer)
    }
}

/// Starts at `(1, 0)` with `θ = 0`, emits the current state, then rotates the
/// vector by `increment` and adds `increment` to `θ`.
///
/// Rounding error from each rotation and each addition is carried into the
/// next step, which is what this sweep exists to measure. The sample count is
/// fixed by the index, not by the drifting `θ`.
pub fn rotation_inc_iteration<F>(increment: f64, mut consumer: F) -> DriftResult<Duration>
where
    F: FnMut(Vector2D, f64) -> DriftResult<()>,
{
    let len = sweep_len(increment)?;
    let mut vector = Vector2D::UNIT_X;
    let mut theta = 0.0f64;
    let start = Instant::now();
    for _ in 0..len {
        consumer(vector, theta)?;
        vector = rotate(vector, increment);
        theta += increment;
    }
    Ok(start.elapsed())
}
