//! Consumers of per-sample records and final statistics.

use crate::geom::Vector2D;
use crate::measure::stats::RunStatistics;

/// One evaluated step of a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRecord {
    /// Zero-based step index.
    pub index: usize,
    /// Vector produced by the iteration strategy.
    pub vector: Vector2D,
    /// Angle recovered from `vector`.
    pub computed: f64,
    /// True swept angle mapped into the recovery's convention.
    pub reference: f64,
    /// `|reference - computed|`.
    pub delta: f64,
}

/// Receives the output of a measurement run.
///
/// `on_sample` is called once per step in index order; `on_finish` once after
/// a sweep that completed without error.
pub trait Sink {
    /// Handles one sample record.
    fn on_sample(&mut self, record: &SampleRecord);

    /// Handles the final statistics.
    fn on_finish(&mut self, stats: &RunStatistics);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn on_sample(&mut self, record: &SampleRecord) {
        (**self).on_sample(record);
    }

    fn on_finish(&mut self, stats: &RunStatistics) {
        (**self).on_finish(stats);
    }
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    #[inline]
    fn on_sample(&mut self, _record: &SampleRecord) {}

    #[inline]
    fn on_finish(&mut self, _stats: &RunStatistics) {}
}

/// Sink that keeps every record and the final statistics in memory.
#[derive(Clone, Debug, Default)]
pub struct Collector {
    records: Vec<SampleRecord>,
    stats: Option<RunStatistics>,
}

impl Collector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far.
    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    /// Final statistics, if the run finished.
    pub fn stats(&self) -> Option<&RunStatistics> {
        self.stats.as_ref()
    }

    /// Consumes the collector and returns its records.
    pub fn into_records(self) -> Vec<SampleRecord> {
        self.records
    }
}

impl Sink for Collector {
    fn on_sample(&mut self, record: &SampleRecord) {
        self.records.push(*record);
    }

    fn on_finish(&mut self, stats: &RunStatistics) {
        self.stats = Some(*stats);
    }
}
