//! Weather, light and atmospheric condition analysis.

use serde::Serialize;

use fars_ingest::Dataset;
use fars_model::{
    CLEAR_WEATHER_CODE, CodeTableKind, DAYLIGHT_CODE, FarsColumn, LIGHT_REPORTED_LIMIT,
    MAIN_WEATHER_LABELS, MAX_WEATHER_SERIES, VALID_HOUR_LIMIT, WEATHER_REPORTED_LIMIT,
    is_bad_weather, is_dark_light,
};

use crate::distribution::{CrossTab, Distribution};

/// Number of weather labels charted.
pub const WEATHER_TOP_N: usize = 8;

/// Number of light labels charted.
pub const LIGHT_TOP_N: usize = 6;

/// Atmospheric conditions kept after sorting by count.
pub const ATMOSPHERIC_TOP_N: usize = 6;

/// Split of reported records into a baseline and an adverse group.
///
/// Both groups are disjoint subsets of `reported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionShare {
    /// Records with a reported (non-sentinel) code.
    pub reported: usize,
    /// Records in the baseline condition (clear weather, daylight).
    pub baseline: usize,
    /// Records in the adverse condition set (bad weather, dark).
    pub adverse: usize,
}

impl ConditionShare {
    /// Computes the share over codes below `reported_limit`.
    ///
    /// Returns `None` when no record is reported.
    pub fn compute<B, A>(
        codes: &[Option<i64>],
        reported_limit: i64,
        is_baseline: B,
        is_adverse: A,
    ) -> Option<Self>
    where
        B: Fn(i64) -> bool,
        A: Fn(i64) -> bool,
    {
        let present = || codes.iter().flatten().copied();
        let reported = present().filter(|code| *code < reported_limit).count();
        if reported == 0 {
            return None;
        }
        Some(Self {
            reported,
            baseline: present().filter(|code| is_baseline(*code)).count(),
            adverse: present().filter(|code| is_adverse(*code)).count(),
        })
    }

    pub fn baseline_pct(&self) -> f64 {
        percent(self.baseline, self.reported)
    }

    pub fn adverse_pct(&self) -> f64 {
        percent(self.adverse, self.reported)
    }
}

/// Weather condition findings.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSummary {
    /// Labelled counts, highest first, at most [`WEATHER_TOP_N`].
    pub distribution: Distribution<&'static str>,
    /// Most frequent labelled weather (sentinel labels included).
    pub most_common: Option<&'static str>,
    /// Clear vs bad weather over reported records.
    pub share: Option<ConditionShare>,
}

impl WeatherSummary {
    pub fn from_codes(codes: &[Option<i64>]) -> Self {
        let labeled = labeled_by_count(codes, CodeTableKind::Weather);
        Self {
            most_common: labeled.first().map(|bucket| bucket.key),
            distribution: labeled.head(WEATHER_TOP_N),
            share: weather_share(codes),
        }
    }
}

/// Light condition findings.
#[derive(Debug, Clone, Serialize)]
pub struct LightSummary {
    /// Labelled counts, highest first, at most [`LIGHT_TOP_N`].
    pub distribution: Distribution<&'static str>,
    /// Daylight vs dark over reported records.
    pub share: Option<ConditionShare>,
}

impl LightSummary {
    pub fn from_codes(codes: &[Option<i64>]) -> Self {
        Self {
            distribution: labeled_by_count(codes, CodeTableKind::Light).head(LIGHT_TOP_N),
            share: light_share(codes),
        }
    }
}

/// One plotted weather series over the hour of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherSeries {
    pub label: &'static str,
    pub points: Vec<(i64, usize)>,
}

/// Accidents by hour of day for the main weather conditions.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherByHour {
    pub table: CrossTab,
    /// Main weather labels present in the table, at most [`MAX_WEATHER_SERIES`].
    pub series: Vec<WeatherSeries>,
}

impl WeatherByHour {
    /// Cross-tabulates valid hours against labelled weather.
    ///
    /// Rows with a missing hour, missing weather, or unmapped weather code
    /// are left out. Returns `None` when no main weather label occurs.
    pub fn from_codes(hours: &[Option<i64>], weather: &[Option<i64>]) -> Option<Self> {
        let labels = CodeTableKind::Weather.table();
        let pairs = hours
            .iter()
            .zip(weather)
            .filter_map(|(hour, code)| Some(((*hour)?, labels.label((*code)?)?)));
        let table = CrossTab::from_pairs(pairs).retain_rows(|hour| hour < VALID_HOUR_LIMIT);

        let series: Vec<WeatherSeries> = MAIN_WEATHER_LABELS
            .iter()
            .filter_map(|label| {
                table.series(label).map(|points| WeatherSeries {
                    label: *label,
                    points,
                })
            })
            .take(MAX_WEATHER_SERIES)
            .collect();
        if series.is_empty() {
            return None;
        }
        Some(Self { table, series })
    }
}

/// All condition sections, each present only when its columns are.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Conditions {
    pub weather: Option<WeatherSummary>,
    pub light: Option<LightSummary>,
    pub atmospheric: Option<Distribution<&'static str>>,
    pub weather_by_hour: Option<WeatherByHour>,
}

impl Conditions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let weather_codes = dataset.codes(FarsColumn::Weather);
        let hours = dataset.codes(FarsColumn::Hour);
        let weather_by_hour = match (&hours, &weather_codes) {
            (Some(hours), Some(weather)) => WeatherByHour::from_codes(hours, weather),
            _ => None,
        };
        Self {
            weather: weather_codes
                .as_deref()
                .map(WeatherSummary::from_codes),
            light: dataset
                .codes(FarsColumn::LightCondition)
                .as_deref()
                .map(LightSummary::from_codes),
            atmospheric: dataset
                .codes(FarsColumn::AtmosphericCondition)
                .map(|codes| labeled_by_count(&codes, CodeTableKind::Atmospheric).head(ATMOSPHERIC_TOP_N)),
            weather_by_hour,
        }
    }
}

/// Clear (code 1) and bad weather shares over codes below 90.
pub fn weather_share(codes: &[Option<i64>]) -> Option<ConditionShare> {
    ConditionShare::compute(
        codes,
        WEATHER_REPORTED_LIMIT,
        |code| code == CLEAR_WEATHER_CODE,
        is_bad_weather,
    )
}

/// Daylight (code 1) and dark shares over codes below 8.
pub fn light_share(codes: &[Option<i64>]) -> Option<ConditionShare> {
    ConditionShare::compute(
        codes,
        LIGHT_REPORTED_LIMIT,
        |code| code == DAYLIGHT_CODE,
        is_dark_light,
    )
}

/// Labels the codes with `kind`'s table and orders by descending count.
pub fn labeled_by_count(codes: &[Option<i64>], kind: CodeTableKind) -> Distribution<&'static str> {
    Distribution::from_values(codes.iter().copied())
        .labeled(kind.table())
        .by_count()
}

/// `part` as a percentage of `whole`; zero when `whole` is zero.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
