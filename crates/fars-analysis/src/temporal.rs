//! Hour, day-of-week and month distributions.

use serde::Serialize;

use fars_ingest::Dataset;
use fars_model::{FarsColumn, VALID_HOUR_LIMIT, day_name, month_name};

use crate::distribution::Distribution;

/// The busiest bucket of a temporal distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Peak {
    pub code: i64,
    pub label: String,
    pub count: usize,
}

/// Temporal distributions, each in ascending key order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemporalPatterns {
    /// Accidents per hour; unknown-hour sentinels (>= 24) removed.
    pub hourly: Option<Distribution<i64>>,
    /// Accidents per `DAY_WEEK` code (1 = Sunday).
    pub weekly: Option<Distribution<i64>>,
    /// Accidents per `MONTH` code.
    pub monthly: Option<Distribution<i64>>,
}

impl TemporalPatterns {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            hourly: dataset
                .codes(FarsColumn::Hour)
                .map(|codes| hourly_distribution(&codes)),
            weekly: dataset.codes(FarsColumn::DayOfWeek).map(Distribution::from_values),
            monthly: dataset.codes(FarsColumn::Month).map(Distribution::from_values),
        }
    }

    pub fn peak_hour(&self) -> Option<Peak> {
        peak_of(self.hourly.as_ref(), |code| format!("{code}:00"))
    }

    pub fn peak_day(&self) -> Option<Peak> {
        peak_of(self.weekly.as_ref(), |code| {
            day_name(code).map_or_else(|| code.to_string(), str::to_string)
        })
    }

    pub fn peak_month(&self) -> Option<Peak> {
        peak_of(self.monthly.as_ref(), |code| {
            month_name(code).map_or_else(|| code.to_string(), str::to_string)
        })
    }
}

/// Hourly counts restricted to valid hours (0..=23).
pub fn hourly_distribution(codes: &[Option<i64>]) -> Distribution<i64> {
    Distribution::from_values(codes.iter().copied()).retain_keys(|hour| *hour < VALID_HOUR_LIMIT)
}

fn peak_of<F>(distribution: Option<&Distribution<i64>>, label: F) -> Option<Peak>
where
    F: Fn(i64) -> String,
{
    let bucket = distribution?.peak()?;
    Some(Peak {
        code: bucket.key,
        label: label(bucket.key),
        count: bucket.count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_drops_unknown_hours() {
        let dist = hourly_distribution(&[Some(8), Some(8), Some(17), Some(99), None]);
        assert_eq!(dist.get(&8), Some(2));
        assert_eq!(dist.get(&17), Some(1));
        assert_eq!(dist.get(&99), None);
        assert_eq!(dist.total(), 3);
    }

    #[test]
    fn test_peaks_resolve_ties_to_lowest_code() {
        let patterns = TemporalPatterns {
            hourly: Some(hourly_distribution(&[Some(18), Some(6), Some(18), Some(6)])),
            weekly: Some(Distribution::from_values(vec![Some(7i64), Some(1)])),
            monthly: Some(Distribution::from_values(vec![Some(12i64), Some(12), Some(3)])),
        };

        let hour = patterns.peak_hour().unwrap();
        assert_eq!(hour.code, 6);
        assert_eq!(hour.label, "6:00");
        assert_eq!(hour.count, 2);

        assert_eq!(patterns.peak_day().unwrap().label, "Sunday");
        assert_eq!(patterns.peak_month().unwrap().label, "Dec");
    }

    #[test]
    fn test_peak_label_falls_back_to_code() {
        let patterns = TemporalPatterns {
            weekly: Some(Distribution::from_values(vec![Some(9i64)])),
            ..TemporalPatterns::default()
        };
        assert_eq!(patterns.peak_day().unwrap().label, "9");
        assert_eq!(patterns.peak_hour(), None);
    }
}
