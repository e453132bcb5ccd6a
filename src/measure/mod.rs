//! Measurement engine: one sweep, one recovery method, one clamp.
//!
//! For every sample the engine recovers an angle from the vector, maps the
//! true swept angle into the chosen convention, and reports
//! `|reference - computed|` to a [`Sink`]. Deltas are folded into a
//! [`DeltaAccumulator`] owned by the run, so independent runs never share
//! state.

use crate::angle::{Convention, Recovery};
use crate::sweep::Strategy;
use crate::trace::{trace_event, trace_span};
use crate::util::{validate_increment, DriftResult};

pub mod batch;
pub mod sink;
pub mod stats;

pub use batch::measure_all;
pub use sink::{Collector, NullSink, SampleRecord, Sink};
pub use stats::{DeltaAccumulator, RunStatistics};

/// Default angular step: one centiradian.
pub const DEFAULT_INCREMENT: f64 = 1.0e-2;

/// A `(strategy, recovery, clamp)` triple plus the sweep increment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// How samples are generated.
    pub strategy: Strategy,
    /// How an angle is recovered from each sample.
    pub recovery: Recovery,
    /// Convention the true angle is clamped into before comparison.
    pub convention: Convention,
    /// Angular step per sample in radians.
    pub increment: f64,
}

impl Measurement {
    /// Builds a measurement using the convention that matches `recovery`.
    pub fn paired(strategy: Strategy, recovery: Recovery, increment: f64) -> Self {
        Self {
            strategy,
            recovery,
            convention: recovery.convention(),
            increment,
        }
    }

    /// Returns true if the clamp convention matches the recovery method.
    pub fn is_paired(&self) -> bool {
        self.recovery.convention() == self.convention
    }
}

/// Runs one full sweep, streaming records into `sink`.
///
/// The increment is validated before any sample is produced. If angle
/// recovery fails the sweep stops, the error is returned, and `on_finish` is
/// not called.
pub fn measure<S>(measurement: &Measurement, sink: &mut S) -> DriftResult<RunStatistics>
where
    S: Sink + ?Sized,
{
    let increment = validate_increment(measurement.increment)?;
    let Measurement {
        strategy,
        recovery,
        convention,
        ..
    } = *measurement;

    let _span = trace_span!(
        "measure",
        strategy = strategy.name(),
        recovery = recovery.label(),
        increment = increment
    )
    .entered();

    let mut acc = DeltaAccumulator::new();
    let elapsed = strategy.sweep(increment, |vector, true_angle| {
        let computed = recovery.recover(vector)?;
        let reference = convention.clamp(true_angle);
        let delta = (reference - computed).abs();
        let record = SampleRecord {
            index: acc.count(),
            vector,
            computed,
            reference,
            delta,
        };
        acc.observe(delta);
        sink.on_sample(&record);
        Ok(())
    })?;

    let stats = acc.finalize(elapsed);
    trace_event!(
        "measure_done",
        samples = stats.sample_count,
        mean_delta = stats.mean_delta(),
        max_delta = stats.max_delta,
        elapsed_ns = stats.elapsed.as_nanos() as u64
    );
    sink.on_finish(&stats);
    Ok(stats)
}
