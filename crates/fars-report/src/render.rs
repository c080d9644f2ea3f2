//! Chart files for an [`AnalysisReport`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use fars_analysis::{AnalysisReport, Distribution};
use fars_model::{day_name, month_name};

use crate::charts::{BarChart, Chart, HorizontalBarChart, LineChart, PieChart};

/// Builds every chart the report has data for, keyed by file stem.
pub fn build_charts(report: &AnalysisReport) -> Vec<(&'static str, Box<dyn Chart>)> {
    let mut charts: Vec<(&'static str, Box<dyn Chart>)> = Vec::new();

    let temporal = &report.temporal;
    if let Some(hourly) = &temporal.hourly {
        let chart = BarChart::new("Accidents by Hour of Day", "skyblue")
            .x_label("Hour (24h format)")
            .bars(pairs(hourly));
        charts.push(("hourly", Box::new(chart)));
    }
    if let Some(weekly) = &temporal.weekly {
        let chart = BarChart::new("Accidents by Day of Week", "lightcoral")
            .x_label("Day of Week")
            .rotate_labels()
            .bars(named(weekly, day_name));
        charts.push(("weekly", Box::new(chart)));
    }
    if let Some(monthly) = &temporal.monthly {
        let chart = BarChart::new("Accidents by Month", "lightgreen")
            .x_label("Month")
            .bars(named(monthly, month_name));
        charts.push(("monthly", Box::new(chart)));
    }

    let conditions = &report.conditions;
    if let Some(weather) = &conditions.weather {
        let chart = BarChart::new("Accidents by Weather Condition", "steelblue")
            .x_label("Weather Condition")
            .rotate_labels()
            .bars(pairs(&weather.distribution));
        charts.push(("weather", Box::new(chart)));
    }
    if let Some(light) = &conditions.light {
        let chart = PieChart::new("Light Conditions During Accidents")
            .legend_title("Light Conditions")
            .slices(pairs(&light.distribution));
        charts.push(("light", Box::new(chart)));
    }
    if let Some(atmospheric) = &conditions.atmospheric {
        let chart = HorizontalBarChart::new("Atmospheric Conditions", "orange").bars(pairs(atmospheric));
        charts.push(("atmospheric", Box::new(chart)));
    }
    if let Some(by_hour) = &conditions.weather_by_hour {
        let chart = by_hour.series.iter().fold(
            LineChart::new("Weather Patterns by Hour").x_label("Hour of Day"),
            |chart, series| chart.series(series.label, series.points.clone()),
        );
        charts.push(("weather_by_hour", Box::new(chart)));
    }

    let roads = &report.roads;
    if let Some(rural_urban) = &roads.rural_urban {
        let chart = PieChart::new("Rural vs Urban Accidents")
            .colors(&["lightblue", "orange"])
            .slices(pairs(rural_urban));
        charts.push(("rural_urban", Box::new(chart)));
    }
    if let Some(work_zone) = &roads.work_zone {
        let chart = PieChart::new("Work Zone Related Accidents")
            .colors(&["lightcoral", "yellow"])
            .slices(pairs(work_zone));
        charts.push(("work_zone", Box::new(chart)));
    }

    let severity = &report.severity;
    if let Some(persons) = &severity.persons {
        let chart = BarChart::new("Distribution of People Involved", "red")
            .x_label("Number of People")
            .opacity(0.7)
            .bars(pairs(persons));
        charts.push(("persons", Box::new(chart)));
    }
    if let Some(vehicles) = &severity.vehicles {
        let chart = BarChart::new("Vehicles Involved in Accidents", "purple")
            .x_label("Number of Vehicles")
            .opacity(0.7)
            .bars(pairs(vehicles));
        charts.push(("vehicles", Box::new(chart)));
    }

    if let Some(states) = &report.states {
        let chart = HorizontalBarChart::new("Top 15 States with Most Fatal Accidents (2016)", "darkblue")
            .x_label("Number of Fatal Accidents")
            .y_label("State")
            .opacity(0.7)
            .bars(pairs(states));
        charts.push(("states", Box::new(chart)));
    }
    if let Some(road_type) = &roads.functional_system {
        let chart = HorizontalBarChart::new("Fatal Accidents by Road Type", "green")
            .opacity(0.7)
            .bars(pairs(road_type));
        charts.push(("road_type", Box::new(chart)));
    }

    charts
}

/// Writes one SVG per available chart into `dir`, creating it if needed.
///
/// Returns the written paths in section order.
pub fn render_charts(report: &AnalysisReport, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;

    let mut written = Vec::new();
    for (stem, chart) in build_charts(report) {
        let path = dir.join(format!("{stem}.svg"));
        let svg = chart
            .to_svg()
            .with_context(|| format!("render chart {}", chart.title()))?;
        fs::write(&path, svg).with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), title = chart.title(), "wrote chart");
        written.push(path);
    }

    info!(charts = written.len(), dir = %dir.display(), "charts written");
    Ok(written)
}

fn pairs<K: Copy>(distribution: &Distribution<K>) -> Vec<(K, usize)> {
    distribution
        .iter()
        .map(|bucket| (bucket.key, bucket.count))
        .collect()
}

/// Code buckets relabelled through `name`, unknown codes kept as numbers.
fn named(distribution: &Distribution<i64>, name: fn(i64) -> Option<&'static str>) -> Vec<(String, usize)> {
    distribution
        .iter()
        .map(|bucket| {
            let label = name(bucket.key).map_or_else(|| bucket.key.to_string(), str::to_string);
            (label, bucket.count)
        })
        .collect()
}
