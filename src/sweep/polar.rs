//! Construction of samples from polar coordinates.

use std::time::{Duration, Instant};

use crate::geom::Vector2D;
use crate::sweep::Sweep;
use crate::util::{sweep_len, DriftResult};

/// Sweep that builds `(cos θ, sin θ)` without a rotation matrix.
pub struct PolarSweep;

impl Sweep for PolarSweep {
    const NAME: &'static str = "Polar Rotation";

    fn run<F>(increment: f64, consumer: F) -> DriftResult<Duration>
    where
        F: FnMut(Vector2D, f64) -> DriftResult<()>,
    {
        polar_iteration(increment, consumer)
    }
}

/// Visits `θ_i = i * increment` and emits `(cos θ_i, sin θ_i)`.
pub fn polar_iteration<F>(increment: f64, mut consumer: F) -> DriftResult<Duration>
where
    F: FnMut(Vector2D, f64) -> DriftResult<()>,
{
    let len = sweep_len(increment)?;
    let start = Instant::now();
    for idx in 0..len {
        let theta = idx as f64 * increment;
        consumer(Vector2D::from_polar(theta), theta)?;
    }
    Ok(start.elapsed())
}
