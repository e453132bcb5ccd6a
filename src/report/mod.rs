//! Report sinks rendering measurement runs as markdown or SVG.
//!
//! Both renderers write into an in-memory `String`; opening and writing files
//! is left to the caller. A renderer can hold several runs: call
//! `begin_run` before each `measure` and `finish` once at the end.

pub mod markdown;
pub mod svg;

pub use markdown::{table_header, MarkdownReport};
pub use svg::SvgFan;

use crate::geom::Vector2D;
use crate::measure::Measurement;

/// Formats a number with 16 fractional digits.
pub(crate) fn fmt_f64(value: f64) -> String {
    format!("{value:.16}")
}

/// Formats a vector as `x , y`.
pub(crate) fn fmt_vector(vector: Vector2D) -> String {
    format!("{} , {}", fmt_f64(vector.x), fmt_f64(vector.y))
}

/// Title of a run, e.g. `Polar Rotation / Dot`.
pub(crate) fn run_title(measurement: &Measurement) -> String {
    let mut title = format!(
        "{} / {}",
        measurement.strategy.name(),
        measurement.recovery.label()
    );
    if !measurement.is_paired() {
        title.push_str(match measurement.convention {
            crate::angle::Convention::Unsigned => " (unsigned clamp)",
            crate::angle::Convention::Signed => " (signed clamp)",
        });
    }
    title
}

/// Lowercase ASCII slug for anchors: alphanumerics kept, runs of anything
/// else collapsed into one `-`.
pub(crate) fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut dash = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            dash = false;
        } else if !dash && !out.is_empty() {
            out.push('-');
            dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
