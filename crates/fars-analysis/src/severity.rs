//! People and vehicles involved per accident.

use serde::Serialize;

use fars_ingest::Dataset;
use fars_model::FarsColumn;

use crate::distribution::Distribution;

/// Number of `PERSONS` values charted.
pub const PERSONS_TOP_N: usize = 10;

/// Number of `VE_TOTAL` values charted.
pub const VEHICLES_TOP_N: usize = 8;

/// Severity distributions: the most frequent values, re-sorted by value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Severity {
    pub persons: Option<Distribution<i64>>,
    pub vehicles: Option<Distribution<i64>>,
}

impl Severity {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            persons: dataset
                .codes(FarsColumn::Persons)
                .map(|values| top_by_value(&values, PERSONS_TOP_N)),
            vehicles: dataset
                .codes(FarsColumn::VehicleTotal)
                .map(|values| top_by_value(&values, VEHICLES_TOP_N)),
        }
    }
}

/// The `n` most frequent values, returned in ascending value order.
pub fn top_by_value(values: &[Option<i64>], n: usize) -> Distribution<i64> {
    Distribution::from_values(values.iter().copied())
        .by_count()
        .head(n)
        .sort_by_key()
}
