//! Console rendering of an [`AnalysisReport`].

use std::fmt::Display;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fars_analysis::{
    AnalysisReport, ConditionShare, Distribution, HotspotSample, KeyInsights, Peak, percent,
};
use fars_model::{CodeTable, RECOMMENDATIONS};

pub const DATA_SOURCE_NOTE: &str = "Data source: FARS (Fatality Analysis Reporting System) 2016";

pub fn print_banner() {
    println!("=== TRAFFIC ACCIDENT DATA ANALYSIS ===");
    println!("Loading real traffic accident data from FARS database...");
}

pub fn print_report(report: &AnalysisReport) {
    print_overview(report);
    print_time_patterns(report);
    print_weather(report);
    print_road_conditions(report);
    print_severity(report);
    print_hotspots(report);
    print_roadway(report);

    println!();
    println!("=== KEY INSIGHTS ===");
    for line in key_insight_lines(&report.insights) {
        println!("{line}");
    }

    println!();
    println!("SAFETY RECOMMENDATIONS:");
    for recommendation in RECOMMENDATIONS {
        println!("• {recommendation}");
    }

    println!();
    println!("ACCIDENT HOTSPOT MAP:");
    for line in hotspot_lines(report.hotspots.as_ref()) {
        println!("{line}");
    }
}

pub fn print_completion() {
    println!();
    println!("=== ANALYSIS COMPLETE ===");
    println!("{DATA_SOURCE_NOTE}");
}

fn print_overview(report: &AnalysisReport) {
    println!("✓ Successfully loaded FARS accident data from {}", report.origin);
    println!(
        "Dataset shape: {} accidents, {} columns",
        format_count(report.total_records),
        report.columns.len()
    );
    println!();
    println!("Columns available: {}", report.columns.join(", "));
}

fn print_time_patterns(report: &AnalysisReport) {
    println!();
    println!("=== 1. TIME PATTERNS ===");
    let insights = &report.insights;
    print_peak("Peak accident hour", insights.peak_hour.as_ref());
    print_peak("Peak accident day", insights.peak_day.as_ref());
    print_peak("Peak accident month", insights.peak_month.as_ref());
}

fn print_peak(title: &str, peak: Option<&Peak>) {
    if let Some(peak) = peak {
        println!("{title}: {} ({} accidents)", peak.label, format_count(peak.count));
    }
}

fn print_weather(report: &AnalysisReport) {
    println!();
    println!("=== 2. WEATHER CONDITIONS ===");
    let total = report.total_records;
    let conditions = &report.conditions;
    if let Some(weather) = &conditions.weather {
        print_distribution("Weather", &weather.distribution, total);
        if let Some(most_common) = weather.most_common {
            println!("Most common weather during accidents: {most_common}");
        }
        print_share(weather.share, "Clear weather accidents", "Bad weather accidents");
    }
    if let Some(light) = &conditions.light {
        print_distribution("Light Condition", &light.distribution, total);
        print_share(light.share, "Daylight accidents", "Dark condition accidents");
    }
    if let Some(atmospheric) = &conditions.atmospheric {
        print_distribution("Atmospheric Condition", atmospheric, total);
    }
}

fn print_share(share: Option<ConditionShare>, baseline: &str, adverse: &str) {
    if let Some(share) = share {
        println!("{baseline}: {:.1}%", share.baseline_pct());
        println!("{adverse}: {:.1}%", share.adverse_pct());
    }
}

fn print_road_conditions(report: &AnalysisReport) {
    println!();
    println!("=== 3. ROAD CONDITIONS ===");
    let roads = &report.roads;
    if let Some(rural_urban) = &roads.rural_urban {
        print_distribution("Location", rural_urban, report.total_records);
    }
    if let Some(work_zone) = &roads.work_zone {
        print_distribution("Work Zone", work_zone, report.total_records);
    }
}

fn print_severity(report: &AnalysisReport) {
    println!();
    println!("=== 4. ACCIDENT SEVERITY ===");
    let severity = &report.severity;
    if let Some(persons) = &severity.persons {
        print_distribution("People Involved", persons, report.total_records);
    }
    if let Some(vehicles) = &severity.vehicles {
        print_distribution("Vehicles Involved", vehicles, report.total_records);
    }
}

fn print_hotspots(report: &AnalysisReport) {
    println!();
    println!("=== 5. ACCIDENT HOTSPOTS ===");
    let Some(states) = &report.states else {
        return;
    };
    print_distribution("State", states, report.total_records);
    if let Some(top) = states.first() {
        println!("Top accident state: {} ({} accidents)", top.key, format_count(top.count));
    }
}

fn print_roadway(report: &AnalysisReport) {
    println!();
    println!("=== 6. ROADWAY ANALYSIS ===");
    if let Some(road_type) = &report.roads.functional_system {
        print_distribution("Road Type", road_type, report.total_records);
    }
}

fn print_distribution<K: Display>(title: &str, distribution: &Distribution<K>, total: usize) {
    println!("{}", distribution_table(title, distribution, total));
}

/// Category, count and share-of-all-records table.
pub fn distribution_table<K: Display>(title: &str, distribution: &Distribution<K>, total: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(title),
        header_cell("Accidents"),
        header_cell("% of records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for bucket in distribution.iter() {
        table.add_row(vec![
            Cell::new(&bucket.key),
            count_cell(bucket.count),
            dim_cell(format!("{:.1}", percent(bucket.count, total))),
        ]);
    }
    table
}

/// Code and label rows for one lookup table.
pub fn code_table(codes: &CodeTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell(codes.title)]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (code, label) in codes.entries() {
        table.add_row(vec![Cell::new(code), Cell::new(label)]);
    }
    table
}

/// The numbered key-insight lines.
///
/// Items 7 to 10 are left out when their column is missing; the others
/// fall back to `N/A`.
pub fn key_insight_lines(insights: &KeyInsights) -> Vec<String> {
    let label = |peak: Option<&Peak>| peak.map_or_else(|| "N/A".to_string(), |peak| peak.label.clone());
    let mut lines = vec![
        format!("1. Total fatal accidents analyzed: {}", format_count(insights.total_accidents)),
        format!("2. Peak accident hour: {}", label(insights.peak_hour.as_ref())),
        format!("3. Peak accident day: {}", label(insights.peak_day.as_ref())),
        format!("4. Deadliest month: {}", label(insights.peak_month.as_ref())),
        format!("5. Most common weather: {}", insights.most_common_weather.unwrap_or("N/A")),
        format!("6. Highest accident state: {}", insights.top_state.unwrap_or("N/A")),
    ];
    if let (Some(rural), Some(urban)) = (insights.rural_pct, insights.urban_pct()) {
        lines.push(format!("7. Rural vs Urban: {rural:.1}% rural, {urban:.1}% urban"));
    }
    if let Some(rate) = insights.bad_weather_pct {
        lines.push(format!("8. Bad weather accidents: {rate:.1}%"));
    }
    if let Some(rate) = insights.dark_pct {
        lines.push(format!("9. Dark condition accidents: {rate:.1}%"));
    }
    if let Some(rate) = insights.single_vehicle_pct {
        lines.push(format!("10. Single vehicle accidents: {rate:.1}%"));
    }
    lines.push(match insights.average_persons {
        Some(mean) => format!("11. Average people per accident: {mean:.1}"),
        None => "11. Average people per accident: N/A".to_string(),
    });
    lines
}

pub fn hotspot_lines(hotspots: Option<&HotspotSample>) -> Vec<String> {
    match hotspots {
        Some(sample) => vec![
            format!("Valid coordinates available for {} accidents", format_count(sample.valid)),
            "Use LATITUDE and LONGITUD columns for mapping hotspots".to_string(),
        ],
        None => vec!["Geographic coordinates not available in this dataset".to_string()],
    }
}

/// Formats a count with comma thousands separators.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    Cell::new(format_count(count)).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(34_439), "34,439");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_hotspot_lines() {
        let sample = HotspotSample { sampled: 1000, valid: 1000 };
        assert_eq!(
            hotspot_lines(Some(&sample))[0],
            "Valid coordinates available for 1,000 accidents"
        );
        assert_eq!(
            hotspot_lines(None),
            vec!["Geographic coordinates not available in this dataset"]
        );
    }

    #[test]
    fn test_distribution_table_rows() {
        let dist = Distribution::from_values([Some(1i64), Some(1), Some(2)]);
        let table = distribution_table("Vehicles", &dist, 4);
        let rendered = table.to_string();
        assert!(rendered.contains("Vehicles"));
        assert!(rendered.contains("50.0"));
        assert!(rendered.contains("25.0"));
    }
}
