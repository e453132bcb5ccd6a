//! angledrift measures how well two angle-recovery methods track a unit
//! vector swept once around the circle.
//!
//! A sweep produces `(vector, true_angle)` samples using one of three
//! iteration strategies. For each sample the engine recovers the angle with
//! either `acos` of the normalized x component or `atan2`, compares it to the
//! true angle mapped into the matching convention, and streams the per-sample
//! delta to a sink while folding it into run statistics. Markdown and SVG
//! sinks are included; parallel batch runs are available with the `rayon`
//! feature.

pub mod angle;
pub mod geom;
pub mod lowlevel;
pub mod measure;
pub mod report;
pub mod sweep;
mod trace;
pub mod util;

pub use angle::{Convention, Recovery};
pub use geom::Vector2D;
pub use measure::{
    measure, measure_all, Collector, Measurement, NullSink, RunStatistics, SampleRecord, Sink,
    DEFAULT_INCREMENT,
};
pub use report::{MarkdownReport, SvgFan};
pub use sweep::Strategy;
pub use util::{DriftError, DriftResult};
