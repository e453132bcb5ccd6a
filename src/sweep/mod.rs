//! Iteration strategies that walk a unit vector once around the circle.
//!
//! Every strategy visits the indices `0..sweep_len(increment)` in order and
//! hands `(vector, true_angle)` to a consumer. They differ only in how the
//! vector is produced and therefore in how rounding error builds up:
//!
//! - `Direct` rotates `(1, 0)` by the exact per-step angle.
//! - `Accumulating` rotates the previous vector again, so error compounds.
//! - `Polar` builds `(cos θ, sin θ)` directly.
//!
//! The returned duration is wall-clock time around the strategy's own loop,
//! consumer calls included. A consumer error stops the sweep immediately.

use std::time::Duration;

use crate::geom::Vector2D;
use crate::util::DriftResult;

pub mod accumulating;
pub mod direct;
pub mod polar;

pub use accumulating::{rotation_inc_iteration, AccumulatingSweep};
pub use direct::{rotation_iteration, DirectSweep};
pub use polar::{polar_iteration, PolarSweep};

/// Sweep trait implemented by each iteration strategy.
pub trait Sweep {
    /// Human-readable name used in reports and traces.
    const NAME: &'static str;

    /// Runs one full sweep with the given angular `increment`.
    fn run<F>(increment: f64, consumer: F) -> DriftResult<Duration>
    where
        F: FnMut(Vector2D, f64) -> DriftResult<()>;
}

/// Closed set of iteration strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Rotate the reference vector by `i * increment`.
    Direct,
    /// Rotate the previous vector by `increment`.
    Accumulating,
    /// Construct `(cos θ, sin θ)` for `θ = i * increment`.
    Polar,
}

impl Strategy {
    /// All strategies in report order.
    pub const ALL: [Strategy; 3] = [Strategy::Direct, Strategy::Accumulating, Strategy::Polar];

    /// Runs one sweep of this strategy.
    pub fn sweep<F>(self, increment: f64, consumer: F) -> DriftResult<Duration>
    where
        F: FnMut(Vector2D, f64) -> DriftResult<()>,
    {
        match self {
            Strategy::Direct => DirectSweep::run(increment, consumer),
            Strategy::Accumulating => AccumulatingSweep::run(increment, consumer),
            Strategy::Polar => PolarSweep::run(increment, consumer),
        }
    }

    /// Report title for the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Direct => DirectSweep::NAME,
            Strategy::Accumulating => AccumulatingSweep::NAME,
            Strategy::Polar => PolarSweep::NAME,
        }
    }
}
