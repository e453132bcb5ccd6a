//! Independent measurement runs, optionally in parallel (rayon).

use crate::measure::{measure, Measurement, NullSink, RunStatistics};
use crate::util::DriftResult;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Runs every measurement with a [`NullSink`] and returns results in input order.
///
/// With the `rayon` feature and `parallel = true` the runs are distributed over
/// the rayon pool. Each run owns its accumulator, so results match the
/// sequential path apart from `elapsed`. Without the feature `parallel` is
/// ignored.
pub fn measure_all(
    measurements: &[Measurement],
    parallel: bool,
) -> Vec<DriftResult<RunStatistics>> {
    #[cfg(feature = "rayon")]
    {
        if parallel {
            return measurements
                .par_iter()
                .map(|m| measure(m, &mut NullSink))
                .collect();
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;

    measurements
        .iter()
        .map(|m| measure(m, &mut NullSink))
        .collect()
}
