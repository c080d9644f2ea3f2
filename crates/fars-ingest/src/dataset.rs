//! Loaded accident table with typed, presence-aware column access.

use polars::prelude::*;
use tracing::{debug, warn};

use fars_model::FarsColumn;

/// The accident table held in memory for the lifetime of a run.
///
/// Read-only after construction. Column accessors return `None` when the
/// column is absent so callers can skip dependent sections.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
    origin: String,
}

impl Dataset {
    pub fn new(frame: DataFrame, origin: impl Into<String>) -> Self {
        Self {
            frame,
            origin: origin.into(),
        }
    }

    /// Description of where the data came from (URL or path).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Number of accident records.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Number of columns, consumed or not.
    pub fn width(&self) -> usize {
        self.frame.width()
    }

    /// All column headers in file order.
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn has_column(&self, column: FarsColumn) -> bool {
        self.frame.column(column.as_str()).is_ok()
    }

    /// Integer codes of a column, `None` entries for missing cells.
    ///
    /// Values that cannot be represented as integers become missing. Returns
    /// `None` when the column is absent.
    pub fn codes(&self, column: FarsColumn) -> Option<Vec<Option<i64>>> {
        let cast = self.cast_column(column, &DataType::Int64)?;
        match cast.i64() {
            Ok(chunked) => Some(chunked.iter().collect()),
            Err(error) => {
                warn!(column = %column, %error, "column is not integer-coded");
                None
            }
        }
    }

    /// Floating point values of a column, `None` entries for missing cells.
    pub fn values(&self, column: FarsColumn) -> Option<Vec<Option<f64>>> {
        let cast = self.cast_column(column, &DataType::Float64)?;
        match cast.f64() {
            Ok(chunked) => Some(chunked.iter().collect()),
            Err(error) => {
                warn!(column = %column, %error, "column is not numeric");
                None
            }
        }
    }

    fn cast_column(&self, column: FarsColumn, dtype: &DataType) -> Option<Column> {
        let Ok(source) = self.frame.column(column.as_str()) else {
            debug!(column = %column, "column not present");
            return None;
        };
        match source.cast(dtype) {
            Ok(cast) => Some(cast),
            Err(error) => {
                warn!(column = %column, %error, "column cast failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_with_nulls() {
        let df = df! {
            "WEATHER" => &[Some(1i64), None, Some(99)],
        }
        .unwrap();
        let dataset = Dataset::new(df, "test");

        assert!(dataset.has_column(FarsColumn::Weather));
        assert_eq!(
            dataset.codes(FarsColumn::Weather),
            Some(vec![Some(1), None, Some(99)])
        );
    }

    #[test]
    fn test_missing_column() {
        let df = df! { "HOUR" => &[1i64, 2] }.unwrap();
        let dataset = Dataset::new(df, "test");

        assert!(!dataset.has_column(FarsColumn::Weather));
        assert_eq!(dataset.codes(FarsColumn::Weather), None);
        assert_eq!(dataset.values(FarsColumn::Latitude), None);
    }

    #[test]
    fn test_string_codes_are_parsed() {
        let df = df! { "STATE" => &["6", "48", "x"] }.unwrap();
        let dataset = Dataset::new(df, "test");

        assert_eq!(
            dataset.codes(FarsColumn::State),
            Some(vec![Some(6), Some(48), None])
        );
    }

    #[test]
    fn test_values_as_float() {
        let df = df! {
            "LATITUDE" => &[33.5f64, -1.0],
            "PERSONS" => &[2i64, 3],
        }
        .unwrap();
        let dataset = Dataset::new(df, "test");

        assert_eq!(
            dataset.values(FarsColumn::Latitude),
            Some(vec![Some(33.5), Some(-1.0)])
        );
        assert_eq!(
            dataset.values(FarsColumn::Persons),
            Some(vec![Some(2.0), Some(3.0)])
        );
        assert_eq!(dataset.height(), 2);
        assert_eq!(dataset.width(), 2);
        assert_eq!(dataset.column_names(), vec!["LATITUDE", "PERSONS"]);
    }
}
