//! End-to-end tests for `analyze` over small synthetic datasets.

use polars::prelude::*;

use fars_analysis::{AnalysisOptions, analyze};
use fars_ingest::Dataset;
use fars_model::FarsColumn;

fn dataset(df: DataFrame) -> Dataset {
    Dataset::new(df, "synthetic")
}

fn options() -> AnalysisOptions {
    AnalysisOptions {
        seed: Some(42),
        ..AnalysisOptions::default()
    }
}

#[test]
fn test_hourly_scenario() {
    let df = df! { "HOUR" => &[8i64, 8, 17] }.unwrap();
    let report = analyze(&dataset(df), &options());

    let hourly = report.temporal.hourly.as_ref().unwrap();
    let buckets: Vec<(i64, usize)> = hourly.iter().map(|b| (b.key, b.count)).collect();
    assert_eq!(buckets, vec![(8, 2), (17, 1)]);

    let peak = report.insights.peak_hour.as_ref().unwrap();
    assert_eq!(peak.code, 8);
    assert_eq!(peak.count, 2);
}

#[test]
fn test_weather_scenario() {
    let df = df! { "WEATHER" => &[1i64, 1, 2, 99] }.unwrap();
    let report = analyze(&dataset(df), &options());

    let weather = report.conditions.weather.as_ref().unwrap();
    let share = weather.share.unwrap();
    assert_eq!(share.reported, 3);
    assert_eq!(format!("{:.1}", share.baseline_pct()), "66.7");
    assert_eq!(format!("{:.1}", share.adverse_pct()), "33.3");
    assert_eq!(weather.most_common, Some("Clear"));

    // Key-insight rate uses every non-missing row, sentinel included
    assert_eq!(
        format!("{:.1}", report.insights.bad_weather_pct.unwrap()),
        "25.0"
    );
}

#[test]
fn test_missing_columns_skip_sections() {
    let df = df! { "HOUR" => &[8i64, 9] }.unwrap();
    let report = analyze(&dataset(df), &options());

    assert!(report.temporal.hourly.is_some());
    assert!(report.temporal.weekly.is_none());
    assert!(report.temporal.monthly.is_none());
    assert!(report.conditions.weather.is_none());
    assert!(report.conditions.light.is_none());
    assert!(report.conditions.atmospheric.is_none());
    assert!(report.conditions.weather_by_hour.is_none());
    assert!(report.roads.rural_urban.is_none());
    assert!(report.severity.persons.is_none());
    assert!(report.states.is_none());
    assert!(report.hotspots.is_none());
    assert!(report.insights.average_persons.is_none());
    assert!(report.insights.top_state.is_none());
    assert_eq!(report.missing_columns.len(), FarsColumn::ALL.len() - 1);
    assert!(!report.missing_columns.contains(&FarsColumn::Hour));
}

#[test]
fn test_full_report() {
    let df = df! {
        "STATE" => &[6i64, 6, 48, 1, 6],
        "HOUR" => &[18i64, 18, 2, 99, 7],
        "DAY_WEEK" => &[7i64, 1, 7, 6, 1],
        "MONTH" => &[12i64, 12, 7, 1, 7],
        "WEATHER" => &[Some(1i64), Some(2), Some(10), Some(98), None],
        "LGT_COND" => &[1i64, 3, 2, 1, 9],
        "ATMOSPH_COND" => &[1i64, 2, 10, 1, 1],
        "RUR_URB" => &[1i64, 2, 1, 1, 9],
        "WRK_ZONE" => &[0i64, 0, 0, 1, 0],
        "PERSONS" => &[1i64, 2, 3, 2, 2],
        "VE_TOTAL" => &[1i64, 2, 1, 1, 3],
        "FUNC_SYS" => &[1i64, 7, 7, 3, 99],
        "LATITUDE" => &[34.0f64, 36.1, 30.2, 99.9, 33.5],
        "LONGITUD" => &[-118.2f64, -115.1, -97.7, 999.9, -86.8],
    }
    .unwrap();
    let report = analyze(&dataset(df), &options());

    assert_eq!(report.total_records, 5);
    assert!(report.missing_columns.is_empty());

    // Temporal: Sunday and Saturday tie on 2, Sunday has the lower code
    let insights = &report.insights;
    assert_eq!(insights.peak_hour.as_ref().unwrap().label, "18:00");
    assert_eq!(insights.peak_day.as_ref().unwrap().label, "Sunday");
    // July and December tie on 2, July has the lower code
    assert_eq!(insights.peak_month.as_ref().unwrap().label, "Jul");

    assert_eq!(insights.most_common_weather, Some("Clear"));
    assert_eq!(insights.top_state, Some("California"));
    assert_eq!(format!("{:.1}", insights.rural_pct.unwrap()), "60.0");
    assert_eq!(format!("{:.1}", insights.urban_pct().unwrap()), "40.0");
    assert_eq!(format!("{:.1}", insights.single_vehicle_pct.unwrap()), "60.0");
    assert_eq!(format!("{:.1}", insights.average_persons.unwrap()), "2.0");
    // dark = {2, 3} of 5 present light codes
    assert_eq!(format!("{:.1}", insights.dark_pct.unwrap()), "40.0");

    let light = report.conditions.light.as_ref().unwrap();
    let light_share = light.share.unwrap();
    assert_eq!(light_share.reported, 4);
    assert_eq!(light_share.baseline, 2);
    assert_eq!(light_share.adverse, 2);

    let by_hour = report.conditions.weather_by_hour.as_ref().unwrap();
    assert_eq!(by_hour.table.rows(), &[2, 18]);
    let labels: Vec<&str> = by_hour.series.iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["Clear", "Rain", "Cloudy"]);

    let road_types = report.roads.functional_system.as_ref().unwrap();
    assert_eq!(road_types.first().unwrap().key, "Local");
    assert_eq!(road_types.total(), 4);

    let persons = report.severity.persons.as_ref().unwrap();
    let keys: Vec<i64> = persons.iter().map(|b| b.key).collect();
    assert_eq!(keys, vec![1, 2, 3]);

    let hotspots = report.hotspots.unwrap();
    assert_eq!(hotspots.sampled, 5);
    assert_eq!(hotspots.valid, 4);
}

#[test]
fn test_report_serializes() {
    let df = df! {
        "HOUR" => &[8i64, 8, 17],
        "STATE" => &[6i64, 6, 48],
    }
    .unwrap();
    let report = analyze(&dataset(df), &options());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_records"], 3);
    assert_eq!(json["temporal"]["hourly"][0]["key"], 8);
    assert_eq!(json["temporal"]["hourly"][0]["count"], 2);
    assert_eq!(json["states"][0]["key"], "California");
    assert!(json["conditions"]["weather"].is_null());
}
