//! SVG line fan: one line from the centre to every sampled vector.
//!
//! Each run is drawn in its own square panel, panels laid out left to right.
//! Line colour goes from blue (zero delta) to red (largest delta of the run).
//! The y axis is flipped so counter-clockwise angles render as usual.

use std::fmt::Write;

use crate::geom::Vector2D;
use crate::measure::{Measurement, RunStatistics, SampleRecord, Sink};
use crate::report::{fmt_f64, run_title};

/// Default panel edge length in pixels.
pub const DEFAULT_PANEL_SIZE: u32 = 512;
/// Smallest panel edge length in pixels.
pub const MIN_PANEL_SIZE: u32 = 64;
/// Largest panel edge length in pixels.
pub const MAX_PANEL_SIZE: u32 = 8192;

const CAPTION_HEIGHT: u32 = 56;
const MARGIN: f64 = 16.0;

#[derive(Debug)]
struct Panel {
    title: String,
    samples: Vec<(Vector2D, f64)>,
    stats: Option<RunStatistics>,
}

/// SVG renderer holding the samples of one or more runs.
#[derive(Debug)]
pub struct SvgFan {
    panel_size: u32,
    panels: Vec<Panel>,
}

impl Default for SvgFan {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_SIZE)
    }
}

impl SvgFan {
    /// Creates a renderer with square panels of `panel_size` pixels, clamped
    /// to `[MIN_PANEL_SIZE, MAX_PANEL_SIZE]`.
    pub fn new(panel_size: u32) -> Self {
        Self {
            panel_size: panel_size.clamp(MIN_PANEL_SIZE, MAX_PANEL_SIZE),
            panels: Vec::new(),
        }
    }

    /// Number of panels started so far.
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Starts a new panel for `measurement`.
    pub fn begin_run(&mut self, measurement: &Measurement) {
        self.panels.push(Panel {
            title: run_title(measurement),
            samples: Vec::new(),
            stats: None,
        });
    }

    /// Renders the complete SVG document.
    pub fn finish(self) -> String {
        let size = self.panel_size;
        let width = u64::from(size) * self.panels.len().max(1) as u64;
        let height = u64::from(size) + u64::from(CAPTION_HEIGHT);
        let half = f64::from(size) / 2.0;
        let radius = half - MARGIN;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        let _ = writeln!(
            out,
            "<rect width=\"{width}\" height=\"{height}\" fill=\"white\"/>"
        );

        for (idx, panel) in self.panels.iter().enumerate() {
            let offset = f64::from(size) * idx as f64;
            let cx = offset + half;
            let cy = half;
            let max_delta = panel
                .samples
                .iter()
                .map(|&(_, delta)| delta)
                .filter(|delta| delta.is_finite())
                .fold(0.0f64, f64::max);

            let _ = writeln!(out, "<g>");
            let _ = writeln!(
                out,
                "<circle cx=\"{cx:.3}\" cy=\"{cy:.3}\" r=\"{radius:.3}\" fill=\"none\" stroke=\"#cccccc\"/>"
            );
            for &(vector, delta) in &panel.samples {
                let x2 = cx + vector.x * radius;
                let y2 = cy - vector.y * radius;
                let t = if max_delta > 0.0 && delta.is_finite() {
                    (delta / max_delta).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let red = (t * 255.0).round() as u8;
                let blue = 255 - red;
                let _ = writeln!(
                    out,
                    "<line x1=\"{cx:.3}\" y1=\"{cy:.3}\" x2=\"{x2:.3}\" y2=\"{y2:.3}\" stroke=\"rgb({red},0,{blue})\" stroke-width=\"0.5\"/>"
                );
            }
            let _ = writeln!(
                out,
                "<text x=\"{:.3}\" y=\"{}\" font-family=\"monospace\" font-size=\"12\">{}</text>",
                offset + MARGIN,
                size + 18,
                escape(&panel.title)
            );
            if let Some(stats) = &panel.stats {
                let max = if stats.folded_count() == 0 {
                    String::from("n/a")
                } else {
                    fmt_f64(stats.max_delta)
                };
                let _ = writeln!(
                    out,
                    "<text x=\"{:.3}\" y=\"{}\" font-family=\"monospace\" font-size=\"10\">samples {} mean {} max {} ({}ns)</text>",
                    offset + MARGIN,
                    size + 38,
                    stats.sample_count,
                    fmt_f64(stats.mean_delta()),
                    max,
                    stats.elapsed.as_nanos()
                );
            }
            let _ = writeln!(out, "</g>");
        }

        out.push_str("</svg>\n");
        out
    }
}

impl Sink for SvgFan {
    fn on_sample(&mut self, record: &SampleRecord) {
        if self.panels.is_empty() {
            self.panels.push(Panel {
                title: String::from("Run"),
                samples: Vec::new(),
                stats: None,
            });
        }
        if let Some(panel) = self.panels.last_mut() {
            panel.samples.push((record.vector, record.delta));
        }
    }

    fn on_finish(&mut self, stats: &RunStatistics) {
        if let Some(panel) = self.panels.last_mut() {
            panel.stats = Some(*stats);
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
