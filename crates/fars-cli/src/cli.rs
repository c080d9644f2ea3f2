//! CLI argument definitions for the FARS explorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fars_analysis::DEFAULT_HOTSPOT_SAMPLE;
use fars_ingest::{DEFAULT_FARS_URL, DataSource};
use fars_model::CodeTableKind;

pub const DEFAULT_OUTPUT_DIR: &str = "fars-output";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser)]
#[command(
    name = "fars-explore",
    version,
    about = "Descriptive analysis of FARS fatal traffic accident data",
    long_about = "Descriptive analysis of FARS fatal traffic accident data.\n\n\
                  Loads the FARS 2016 accident table, prints time, weather, road,\n\
                  severity and geographic breakdowns, and writes SVG charts."
)]
pub struct Cli {
    /// Runs `analyze` with default options when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the accident table and print the full analysis.
    Analyze(AnalyzeArgs),

    /// Print the code-to-label table for one coded column.
    Codes(CodesArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// URL of the accident CSV.
    #[arg(long = "url", value_name = "URL", default_value = DEFAULT_FARS_URL)]
    pub url: String,

    /// Read the accident CSV from a local file instead of downloading it.
    #[arg(long = "input", value_name = "PATH", conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Directory for chart files and the JSON summary.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Skip writing SVG charts.
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Also write the full report as `summary.json` in the output directory.
    #[arg(long = "json")]
    pub json: bool,

    /// Seed for the coordinate sample (random when omitted).
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Rows sampled when checking coordinate availability.
    #[arg(long = "sample-size", value_name = "ROWS", default_value_t = DEFAULT_HOTSPOT_SAMPLE)]
    pub sample_size: usize,

    /// HTTP timeout in seconds.
    #[arg(long = "timeout", value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            url: DEFAULT_FARS_URL.to_string(),
            input: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            no_charts: false,
            json: false,
            seed: None,
            sample_size: DEFAULT_HOTSPOT_SAMPLE,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AnalyzeArgs {
    /// A local `--input` wins over `--url`.
    pub fn source(&self) -> DataSource {
        match &self.input {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Url(self.url.clone()),
        }
    }
}

#[derive(Parser)]
pub struct CodesArgs {
    /// Coded column to describe.
    #[arg(value_enum)]
    pub table: CodeTableArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CodeTableArg {
    Weather,
    Atmospheric,
    Light,
    RuralUrban,
    WorkZone,
    RoadType,
    State,
}

impl From<CodeTableArg> for CodeTableKind {
    fn from(arg: CodeTableArg) -> Self {
        match arg {
            CodeTableArg::Weather => CodeTableKind::Weather,
            CodeTableArg::Atmospheric => CodeTableKind::Atmospheric,
            CodeTableArg::Light => CodeTableKind::Light,
            CodeTableArg::RuralUrban => CodeTableKind::RuralUrban,
            CodeTableArg::WorkZone => CodeTableKind::WorkZone,
            CodeTableArg::RoadType => CodeTableKind::FunctionalSystem,
            CodeTableArg::State => CodeTableKind::State,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults_match_parser() {
        let cli = Cli::try_parse_from(["fars-explore", "analyze"]).unwrap();
        let Some(Command::Analyze(parsed)) = cli.command else {
            panic!("expected analyze");
        };
        let default = AnalyzeArgs::default();
        assert_eq!(parsed.url, default.url);
        assert_eq!(parsed.output_dir, default.output_dir);
        assert_eq!(parsed.sample_size, default.sample_size);
        assert_eq!(parsed.timeout, default.timeout);
        assert_eq!(parsed.source(), DataSource::default());
    }

    #[test]
    fn test_input_selects_file_source() {
        let cli = Cli::try_parse_from([
            "fars-explore",
            "analyze",
            "--input",
            "accident.csv",
            "--seed",
            "7",
            "--no-charts",
        ])
        .unwrap();
        let Some(Command::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.source(), DataSource::File(PathBuf::from("accident.csv")));
        assert_eq!(args.seed, Some(7));
        assert!(args.no_charts);
    }

    #[test]
    fn test_url_and_input_conflict() {
        let result = Cli::try_parse_from([
            "fars-explore",
            "analyze",
            "--url",
            "https://example.org/a.csv",
            "--input",
            "a.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_codes_table_names() {
        let cli = Cli::try_parse_from(["fars-explore", "codes", "road-type"]).unwrap();
        let Some(Command::Codes(args)) = cli.command else {
            panic!("expected codes");
        };
        assert_eq!(CodeTableKind::from(args.table), CodeTableKind::FunctionalSystem);
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["fars-explore", "-v"]).unwrap();
        assert!(cli.command.is_none());
    }
}
