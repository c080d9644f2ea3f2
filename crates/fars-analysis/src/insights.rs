//! Headline figures for the key-insights summary.

use serde::Serialize;

use fars_ingest::Dataset;
use fars_model::{FarsColumn, RURAL_CODE, SINGLE_VEHICLE_COUNT, is_bad_weather, is_dark_light};

use crate::conditions::{Conditions, percent};
use crate::temporal::{Peak, TemporalPatterns};

/// Key insights, each absent when its source column is.
///
/// Rates here use different denominators from the condition shares:
/// rural and single-vehicle rates divide by every record, bad-weather and
/// dark rates by the non-missing records of their column (sentinel codes
/// included).
#[derive(Debug, Clone, Default, Serialize)]
pub struct KeyInsights {
    pub total_accidents: usize,
    pub peak_hour: Option<Peak>,
    pub peak_day: Option<Peak>,
    pub peak_month: Option<Peak>,
    pub most_common_weather: Option<&'static str>,
    pub top_state: Option<&'static str>,
    /// Percent of records with `RUR_URB == 1`; urban is the remainder.
    pub rural_pct: Option<f64>,
    pub bad_weather_pct: Option<f64>,
    pub dark_pct: Option<f64>,
    pub single_vehicle_pct: Option<f64>,
    /// Mean of `PERSONS`, missing values skipped.
    pub average_persons: Option<f64>,
}

impl KeyInsights {
    pub fn from_parts(
        dataset: &Dataset,
        temporal: &TemporalPatterns,
        conditions: &Conditions,
        top_state: Option<&'static str>,
    ) -> Self {
        let total = dataset.height();
        Self {
            total_accidents: total,
            peak_hour: temporal.peak_hour(),
            peak_day: temporal.peak_day(),
            peak_month: temporal.peak_month(),
            most_common_weather: conditions
                .weather
                .as_ref()
                .and_then(|weather| weather.most_common),
            top_state,
            rural_pct: dataset
                .codes(FarsColumn::RuralUrban)
                .and_then(|codes| share_of_all(&codes, |code| code == RURAL_CODE)),
            bad_weather_pct: dataset
                .codes(FarsColumn::Weather)
                .and_then(|codes| share_of_present(&codes, is_bad_weather)),
            dark_pct: dataset
                .codes(FarsColumn::LightCondition)
                .and_then(|codes| share_of_present(&codes, is_dark_light)),
            single_vehicle_pct: dataset
                .codes(FarsColumn::VehicleTotal)
                .and_then(|codes| share_of_all(&codes, |count| count == SINGLE_VEHICLE_COUNT)),
            average_persons: dataset
                .values(FarsColumn::Persons)
                .and_then(|values| mean(&values)),
        }
    }

    /// Urban share implied by the rural share.
    pub fn urban_pct(&self) -> Option<f64> {
        self.rural_pct.map(|rural| 100.0 - rural)
    }
}

/// Percent of all rows (missing included) matching `predicate`.
pub fn share_of_all<P>(codes: &[Option<i64>], predicate: P) -> Option<f64>
where
    P: Fn(i64) -> bool,
{
    if codes.is_empty() {
        return None;
    }
    let matching = codes.iter().flatten().filter(|code| predicate(**code)).count();
    Some(percent(matching, codes.len()))
}

/// Percent of non-missing rows matching `predicate`.
pub fn share_of_present<P>(codes: &[Option<i64>], predicate: P) -> Option<f64>
where
    P: Fn(i64) -> bool,
{
    let present = codes.iter().flatten().count();
    if present == 0 {
        return None;
    }
    let matching = codes.iter().flatten().filter(|code| predicate(**code)).count();
    Some(percent(matching, present))
}

/// Arithmetic mean of the non-missing values.
pub fn mean(values: &[Option<f64>]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_of_all_counts_missing_in_denominator() {
        let pct = share_of_all(&[Some(1), Some(2), None, Some(1)], |c| c == 1).unwrap();
        assert!((pct - 50.0).abs() < 1e-9);
        assert_eq!(share_of_all(&[], |c| c == 1), None);
    }

    #[test]
    fn test_share_of_present_includes_sentinels() {
        // 99 is kept in the denominator, unlike the reported-only shares
        let pct = share_of_present(&[Some(2), Some(1), Some(99), None], is_bad_weather).unwrap();
        assert!((pct - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(share_of_present(&[None, None], is_bad_weather), None);
    }

    #[test]
    fn test_mean_skips_missing() {
        assert_eq!(mean(&[Some(1.0), None, Some(2.0)]), Some(1.5));
        assert_eq!(mean(&[None]), None);
    }
}
