//! Markdown report: TOC, per-strategy headings, one table per run.

use std::fmt::Write;

use crate::measure::{Measurement, RunStatistics, SampleRecord, Sink};
use crate::report::{fmt_f64, fmt_vector, run_title, slug};
use crate::sweep::Strategy;

const SAMPLE_ALIGN: &str = "rlrrr";
const SAMPLE_HEADERS: [&str; 5] = ["Index", "Vector", "Radians", "Reference", "Delta"];
const SUMMARY_ALIGN: &str = "rrrr";
const SUMMARY_HEADERS: [&str; 4] = ["Samples", "Mean Delta", "Min Delta", "Max Delta"];

/// Writes a markdown table header and its alignment row.
///
/// Each character of `align` is one column: `l` left, `r` right, `c` centre.
/// Any other character still emits a header cell but no alignment cell.
/// Missing headers are left blank.
pub fn table_header(out: &mut String, align: &str, headers: &[&str]) {
    for idx in 0..align.chars().count() {
        let _ = write!(out, "| {} ", headers.get(idx).copied().unwrap_or(""));
    }
    out.push_str("|\n");
    for ch in align.chars() {
        match ch {
            'l' => out.push_str("|:--- "),
            'r' => out.push_str("| ---:"),
            'c' => out.push_str("|:---:"),
            _ => {}
        }
    }
    out.push_str("|\n");
}

/// Markdown document covering any number of runs.
#[derive(Debug, Default)]
pub struct MarkdownReport {
    body: String,
    toc: Vec<(String, String)>,
    section: Option<Strategy>,
    in_table: bool,
}

impl MarkdownReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of runs started so far.
    pub fn run_count(&self) -> usize {
        self.toc.len()
    }

    /// Opens a run: strategy heading when the strategy changes, run heading
    /// with anchor and back link, and the sample table header.
    pub fn begin_run(&mut self, measurement: &Measurement) {
        if self.section != Some(measurement.strategy) {
            let _ = writeln!(self.body, "# {}\n", measurement.strategy.name());
            self.section = Some(measurement.strategy);
        }

        let title = run_title(measurement);
        let anchor = format!("run-{}-{}", self.toc.len() + 1, slug(&title));
        let label = title
            .split_once(" / ")
            .map(|(_, label)| label)
            .unwrap_or(title.as_str());
        let _ = writeln!(self.body, "<a id=\"{anchor}\"></a>\n");
        let _ = writeln!(self.body, "## {label} Results\n");
        let _ = writeln!(self.body, "[back to top](#top)\n");
        let _ = writeln!(
            self.body,
            "Increment: {} rad\n",
            fmt_f64(measurement.increment)
        );
        table_header(&mut self.body, SAMPLE_ALIGN, &SAMPLE_HEADERS);
        self.toc.push((title, anchor));
        self.in_table = true;
    }

    /// Returns the finished document with the table of contents prepended.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.body.len() + 64 * (self.toc.len() + 1));
        out.push_str("<a id=\"top\"></a>\n\n[TOC]\n\n");
        for (title, anchor) in &self.toc {
            let _ = writeln!(out, "- [{title}](#{anchor})");
        }
        if !self.toc.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.body);
        out
    }
}

impl Sink for MarkdownReport {
    fn on_sample(&mut self, record: &SampleRecord) {
        if !self.in_table {
            table_header(&mut self.body, SAMPLE_ALIGN, &SAMPLE_HEADERS);
            self.in_table = true;
        }
        let _ = writeln!(
            self.body,
            "| {} | {} | {} | {} | {} |",
            record.index,
            fmt_vector(record.vector),
            fmt_f64(record.computed),
            fmt_f64(record.reference),
            fmt_f64(record.delta)
        );
    }

    fn on_finish(&mut self, stats: &RunStatistics) {
        let _ = writeln!(self.body, "\n### Duration: {}ns\n", stats.elapsed.as_nanos());
        table_header(&mut self.body, SUMMARY_ALIGN, &SUMMARY_HEADERS);
        let (min, max) = if stats.folded_count() == 0 {
            ("n/a".to_string(), "n/a".to_string())
        } else {
            (fmt_f64(stats.min_delta), fmt_f64(stats.max_delta))
        };
        let _ = writeln!(
            self.body,
            "| {} | {} | {} | {} |\n",
            stats.sample_count,
            fmt_f64(stats.mean_delta()),
            min,
            max
        );
        self.in_table = false;
    }
}
