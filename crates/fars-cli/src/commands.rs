//! Subcommand handlers.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use fars_analysis::{AnalysisOptions, AnalysisReport, analyze};
use fars_cli::summary::{code_table, print_banner, print_completion, print_report};
use fars_ingest::{LoadOptions, load_dataset};
use fars_model::CodeTableKind;
use fars_report::render_charts;

use crate::cli::{AnalyzeArgs, CodesArgs};

pub const SUMMARY_FILE: &str = "summary.json";

pub fn run_codes(args: &CodesArgs) -> Result<()> {
    let table = CodeTableKind::from(args.table).table();
    println!("{} ({})", table.title, table.column);
    println!("{}", code_table(table));
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let source = args.source();
    let span = info_span!("run", source = %source);
    let _guard = span.enter();

    print_banner();
    let options = LoadOptions::default().with_timeout(Duration::from_secs(args.timeout));
    let dataset = load_dataset(&source, &options).with_context(|| format!("load {source}"))?;

    let report = analyze(
        &dataset,
        &AnalysisOptions {
            hotspot_sample_size: args.sample_size,
            seed: args.seed,
        },
    );
    print_report(&report);

    if !args.no_charts {
        let charts = render_charts(&report, &args.output_dir)?;
        println!();
        println!("Charts: {} files in {}", charts.len(), args.output_dir.display());
    }
    if args.json {
        let path = write_summary_json(&report, &args.output_dir)?;
        println!("Summary: {}", path.display());
    }

    print_completion();
    Ok(())
}

/// Writes the report as pretty JSON and returns the file path.
pub fn write_summary_json(report: &AnalysisReport, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(SUMMARY_FILE);
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "summary written");
    Ok(path)
}
