use angledrift::{
    measure, measure_all, Convention, MarkdownReport, Measurement, Recovery, RunStatistics,
    Strategy, SvgFan, DEFAULT_INCREMENT,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Angle recovery drift harness (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file. Built-in defaults when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for each measurement run.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum StrategyConfig {
    Direct,
    Accumulating,
    Polar,
}

impl From<StrategyConfig> for Strategy {
    fn from(value: StrategyConfig) -> Self {
        match value {
            StrategyConfig::Direct => Strategy::Direct,
            StrategyConfig::Accumulating => Strategy::Accumulating,
            StrategyConfig::Polar => Strategy::Polar,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RecoveryConfig {
    Dot,
    #[serde(alias = "trig")]
    Atan2,
}

impl From<RecoveryConfig> for Recovery {
    fn from(value: RecoveryConfig) -> Self {
        match value {
            RecoveryConfig::Dot => Recovery::Dot,
            RecoveryConfig::Atan2 => Recovery::Atan2,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ConventionConfig {
    Unsigned,
    Signed,
}

impl From<ConventionConfig> for Convention {
    fn from(value: ConventionConfig) -> Self {
        match value {
            ConventionConfig::Unsigned => Convention::Unsigned,
            ConventionConfig::Signed => Convention::Signed,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum FormatConfig {
    #[default]
    Markdown,
    Svg,
    Json,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RunConfig {
    strategy: StrategyConfig,
    recovery: RecoveryConfig,
    /// Clamp convention; the one matching `recovery` when absent.
    #[serde(default)]
    convention: Option<ConventionConfig>,
}

impl RunConfig {
    fn measurement(&self, increment: f64) -> Measurement {
        let paired = Measurement::paired(self.strategy.into(), self.recovery.into(), increment);
        match self.convention {
            Some(convention) => Measurement {
                convention: convention.into(),
                ..paired
            },
            None => paired,
        }
    }
}

fn default_runs() -> Vec<RunConfig> {
    let mut runs = Vec::new();
    for strategy in [
        StrategyConfig::Accumulating,
        StrategyConfig::Direct,
        StrategyConfig::Polar,
    ] {
        for recovery in [RecoveryConfig::Dot, RecoveryConfig::Atan2] {
            runs.push(RunConfig {
                strategy,
                recovery,
                convention: None,
            });
        }
    }
    runs
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    increment: f64,
    format: FormatConfig,
    output_path: Option<String>,
    parallel: bool,
    svg_size: u32,
    runs: Vec<RunConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            increment: DEFAULT_INCREMENT,
            format: FormatConfig::Markdown,
            output_path: None,
            parallel: false,
            svg_size: angledrift::report::svg::DEFAULT_PANEL_SIZE,
            runs: default_runs(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RunRecord {
    strategy: &'static str,
    recovery: &'static str,
    paired: bool,
    samples: usize,
    sum_delta: f64,
    mean_delta: f64,
    min_delta: Option<f64>,
    max_delta: Option<f64>,
    elapsed_ns: u64,
}

impl RunRecord {
    fn new(measurement: &Measurement, stats: &RunStatistics) -> Self {
        let folded = stats.folded_count() > 0;
        Self {
            strategy: measurement.strategy.name(),
            recovery: measurement.recovery.label(),
            paired: measurement.is_paired(),
            samples: stats.sample_count,
            sum_delta: stats.sum_delta,
            mean_delta: stats.mean_delta(),
            min_delta: folded.then_some(stats.min_delta),
            max_delta: folded.then_some(stats.max_delta),
            elapsed_ns: stats.elapsed.as_nanos() as u64,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    increment: f64,
    runs: Vec<RunRecord>,
}

fn render_markdown(measurements: &[Measurement]) -> Result<String, Box<dyn std::error::Error>> {
    let mut report = MarkdownReport::new();
    for m in measurements {
        report.begin_run(m);
        measure(m, &mut report)?;
    }
    Ok(report.finish())
}

fn render_svg(
    measurements: &[Measurement],
    panel_size: u32,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut fan = SvgFan::new(panel_size);
    for m in measurements {
        fan.begin_run(m);
        measure(m, &mut fan)?;
    }
    Ok(fan.finish())
}

fn render_json(
    measurements: &[Measurement],
    increment: f64,
    parallel: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut runs = Vec::with_capacity(measurements.len());
    for (m, result) in measurements.iter().zip(measure_all(measurements, parallel)) {
        runs.push(RunRecord::new(m, &result?));
    }
    let output = Output { increment, runs };
    Ok(serde_json::to_string_pretty(&output)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive("angledrift=info".parse()?)
                    .add_directive("angledrift_cli=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config: Config = match &cli.config {
        Some(path) => {
            let config_text = fs::read_to_string(path)?;
            serde_json::from_str(&config_text)?
        }
        None => Config::default(),
    };
    if config.runs.is_empty() {
        return Err("runs must contain at least one entry".into());
    }

    let measurements: Vec<Measurement> = config
        .runs
        .iter()
        .map(|run| run.measurement(config.increment))
        .collect();

    let rendered = match config.format {
        FormatConfig::Markdown => render_markdown(&measurements)?,
        FormatConfig::Svg => render_svg(&measurements, config.svg_size)?,
        FormatConfig::Json => render_json(&measurements, config.increment, config.parallel)?,
    };

    match config.output_path {
        Some(path) => {
            fs::write(&path, rendered)?;
            tracing::info!(path = %path, runs = measurements.len(), "report written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Config, EXAMPLE_JSON};

    #[test]
    fn example_config_parses() {
        let config: Config = serde_json::from_str(EXAMPLE_JSON).unwrap();
        assert!(!config.runs.is_empty());
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{ "incremnt": 0.5 }"#).is_err());
        let bad_run = r#"{ "runs": [{ "strategy": "polar", "recovery": "dot", "clamp": "signed" }] }"#;
        assert!(serde_json::from_str::<Config>(bad_run).is_err());
    }

    #[test]
    fn omitted_keys_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "format": "json" }"#).unwrap();
        assert_eq!(config.increment, angledrift::DEFAULT_INCREMENT);
        assert_eq!(config.runs.len(), 6);
    }
}
