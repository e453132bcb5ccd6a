//! Rotation of the reference vector by an exact per-step angle.

use std::time::{Duration, Instant};

use crate::angle::clamp_signed;
use crate::geom::{rotate, Vector2D};
use crate::sweep::Sweep;
use crate::util::{sweep_len, DriftResult};

/// Sweep that recomputes every sample from its index.
pub struct DirectSweep;

impl Sweep for DirectSweep {
    const NAME: &'static str = "Direct Rotation";

    fn run<F>(increment: f64, consumer: F) -> DriftResult<Duration>
    where
        F: FnMut(Vector2D, f64) -> DriftResult<()>,
    {
        rotation_iteration(increment, consumer)
    }
}

/// Visits `θ_i = i * increment` and emits `rotate((1, 0), clamp_signed(θ_i))`.
///
/// The consumer receives the unclamped `θ_i` as the true angle.
pub fn rotation_iteration<F>(increment: f64, mut consumer: F) -> DriftResult<Duration>
where
    F: FnMut(Vector2D, f64) -> DriftResult<()>,
{
    let len = sweep_len(increment)?;
    let start = Instant::now();
    for idx in 0..len {
        let theta = idx as f64 * increment;
        let vector = rotate(Vector2D::UNIT_X, clamp_signed(theta));
        consumer(vector, theta)?;
    }
    Ok(start.elapsed())
}
