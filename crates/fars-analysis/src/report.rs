//! Whole-dataset analysis entry point.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, info_span};

use fars_ingest::Dataset;
use fars_model::FarsColumn;

use crate::conditions::Conditions;
use crate::distribution::Distribution;
use crate::geography::{DEFAULT_HOTSPOT_SAMPLE, HotspotSample, top_states};
use crate::insights::KeyInsights;
use crate::roads::RoadConditions;
use crate::severity::Severity;
use crate::temporal::TemporalPatterns;

/// Options for [`analyze`].
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Rows sampled for the coordinate check.
    pub hotspot_sample_size: usize,
    /// Seed for the coordinate sample; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            hotspot_sample_size: DEFAULT_HOTSPOT_SAMPLE,
            seed: None,
        }
    }
}

/// Everything computed from one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub origin: String,
    pub total_records: usize,
    pub columns: Vec<String>,
    /// Consumed columns absent from the input.
    pub missing_columns: Vec<FarsColumn>,
    pub temporal: TemporalPatterns,
    pub conditions: Conditions,
    pub roads: RoadConditions,
    pub severity: Severity,
    pub states: Option<Distribution<&'static str>>,
    pub hotspots: Option<HotspotSample>,
    pub insights: KeyInsights,
}

/// Runs every descriptive pass over `dataset`.
///
/// Passes are independent; any whose columns are missing is skipped and
/// left as `None` in the report.
pub fn analyze(dataset: &Dataset, options: &AnalysisOptions) -> AnalysisReport {
    let span = info_span!("analyze", rows = dataset.height());
    let _guard = span.enter();
    let started = Instant::now();

    let missing_columns: Vec<FarsColumn> = FarsColumn::ALL
        .into_iter()
        .filter(|column| !dataset.has_column(*column))
        .collect();
    for column in &missing_columns {
        debug!(column = %column, "column missing, dependent sections skipped");
    }

    let temporal = TemporalPatterns::from_dataset(dataset);
    let conditions = Conditions::from_dataset(dataset);
    let roads = RoadConditions::from_dataset(dataset);
    let severity = Severity::from_dataset(dataset);
    let states = dataset
        .codes(FarsColumn::State)
        .map(|codes| top_states(&codes));
    let hotspots =
        HotspotSample::from_dataset(dataset, options.hotspot_sample_size, options.seed);
    let top_state = states
        .as_ref()
        .and_then(|states| states.first())
        .map(|bucket| bucket.key);
    let insights = KeyInsights::from_parts(dataset, &temporal, &conditions, top_state);

    info!(
        missing_columns = missing_columns.len(),
        duration_ms = started.elapsed().as_millis(),
        "analysis complete"
    );

    AnalysisReport {
        origin: dataset.origin().to_string(),
        total_records: dataset.height(),
        columns: dataset.column_names(),
        missing_columns,
        temporal,
        conditions,
        roads,
        severity,
        states,
        hotspots,
        insights,
    }
}
