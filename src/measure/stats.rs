//! Running delta statistics for one measurement run.

use std::time::Duration;

/// Final statistics of a measurement run.
///
/// `sum_delta`, `min_delta` and `max_delta` exclude the first sample, which
/// serves as the reference point of the sweep. With a single sample nothing is
/// folded and the extrema stay at `+∞` / `-∞`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStatistics {
    /// Number of samples visited, including the first.
    pub sample_count: usize,
    /// Sum of deltas over samples `1..sample_count`.
    pub sum_delta: f64,
    /// Smallest delta over samples `1..sample_count`.
    pub min_delta: f64,
    /// Largest delta over samples `1..sample_count`.
    pub max_delta: f64,
    /// Wall-clock time reported by the iteration strategy.
    pub elapsed: Duration,
}

impl RunStatistics {
    /// Mean delta, dividing by the total sample count.
    pub fn mean_delta(&self) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        self.sum_delta / self.sample_count as f64
    }

    /// Number of deltas folded into sum, min and max.
    pub fn folded_count(&self) -> usize {
        self.sample_count.saturating_sub(1)
    }

    /// Returns true if every statistic except `elapsed` matches `other`.
    pub fn same_deltas(&self, other: &RunStatistics) -> bool {
        self.sample_count == other.sample_count
            && self.sum_delta == other.sum_delta
            && self.min_delta == other.min_delta
            && self.max_delta == other.max_delta
    }
}

/// Incremental accumulator replacing shared running totals.
#[derive(Clone, Debug)]
pub struct DeltaAccumulator {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl Default for DeltaAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl DeltaAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Number of deltas observed so far; also the index of the next sample.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Records one delta. The first observation only advances the count.
    pub fn observe(&mut self, delta: f64) {
        if self.count != 0 {
            self.sum += delta;
            self.min = self.min.min(delta);
            self.max = self.max.max(delta);
        }
        self.count += 1;
    }

    /// Freezes the accumulator into run statistics.
    pub fn finalize(self, elapsed: Duration) -> RunStatistics {
        RunStatistics {
            sample_count: self.count,
            sum_delta: self.sum,
            min_delta: self.min,
            max_delta: self.max,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeltaAccumulator;
    use std::time::Duration;

    #[test]
    fn first_delta_is_excluded() {
        let mut acc = DeltaAccumulator::new();
        for delta in [100.0, 1.0, 3.0, 2.0] {
            acc.observe(delta);
        }
        let stats = acc.finalize(Duration::from_nanos(42));
        assert_eq!(stats.sample_count, 4);
        assert_eq!(stats.folded_count(), 3);
        assert_eq!(stats.sum_delta, 6.0);
        assert_eq!(stats.min_delta, 1.0);
        assert_eq!(stats.max_delta, 3.0);
        assert_eq!(stats.mean_delta(), 1.5);
        assert_eq!(stats.elapsed, Duration::from_nanos(42));
    }

    #[test]
    fn single_sample_leaves_extrema_unset() {
        let mut acc = DeltaAccumulator::new();
        acc.observe(0.5);
        let stats = acc.finalize(Duration::ZERO);
        assert_eq!(stats.sum_delta, 0.0);
        assert_eq!(stats.min_delta, f64::INFINITY);
        assert_eq!(stats.max_delta, f64::NEG_INFINITY);
        assert_eq!(stats.mean_delta(), 0.0);
    }

    #[test]
    fn empty_accumulator_has_zero_mean() {
        let stats = DeltaAccumulator::default().finalize(Duration::ZERO);
        assert_eq!(stats.sample_count, 0);
        assert_eq!(stats.mean_delta(), 0.0);
    }
}
