//! Accident file columns consumed by the analysis.

use std::fmt;

use serde::Serialize;

/// A FARS accident-level column.
///
/// Only the columns the analysis reads are listed. Every one of them is
/// optional in the input; sections depending on a missing column are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum FarsColumn {
    Hour,
    DayOfWeek,
    Month,
    Weather,
    LightCondition,
    AtmosphericCondition,
    RuralUrban,
    WorkZone,
    Persons,
    VehicleTotal,
    State,
    FunctionalSystem,
    Latitude,
    Longitude,
}

impl FarsColumn {
    /// All consumed columns in report order.
    pub const ALL: [FarsColumn; 14] = [
        FarsColumn::Hour,
        FarsColumn::DayOfWeek,
        FarsColumn::Month,
        FarsColumn::Weather,
        FarsColumn::LightCondition,
        FarsColumn::AtmosphericCondition,
        FarsColumn::RuralUrban,
        FarsColumn::WorkZone,
        FarsColumn::Persons,
        FarsColumn::VehicleTotal,
        FarsColumn::State,
        FarsColumn::FunctionalSystem,
        FarsColumn::Latitude,
        FarsColumn::Longitude,
    ];

    /// Column header as it appears in the CSV.
    pub const fn as_str(self) -> &'static str {
        match self {
            FarsColumn::Hour => "HOUR",
            FarsColumn::DayOfWeek => "DAY_WEEK",
            FarsColumn::Month => "MONTH",
            FarsColumn::Weather => "WEATHER",
            FarsColumn::LightCondition => "LGT_COND",
            FarsColumn::AtmosphericCondition => "ATMOSPH_COND",
            FarsColumn::RuralUrban => "RUR_URB",
            FarsColumn::WorkZone => "WRK_ZONE",
            FarsColumn::Persons => "PERSONS",
            FarsColumn::VehicleTotal => "VE_TOTAL",
            FarsColumn::State => "STATE",
            FarsColumn::FunctionalSystem => "FUNC_SYS",
            FarsColumn::Latitude => "LATITUDE",
            FarsColumn::Longitude => "LONGITUD",
        }
    }

    /// Looks up a column by its CSV header (exact, case-sensitive).
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == header)
    }
}

impl From<FarsColumn> for &'static str {
    fn from(column: FarsColumn) -> Self {
        column.as_str()
    }
}

impl fmt::Display for FarsColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup() {
        for column in FarsColumn::ALL {
            assert_eq!(FarsColumn::from_header(column.as_str()), Some(column));
        }
        assert_eq!(FarsColumn::from_header("hour"), None);
        assert_eq!(FarsColumn::from_header("LONGITUDE"), None);
    }

    #[test]
    fn test_serializes_as_header() {
        let json = serde_json::to_string(&FarsColumn::LightCondition).unwrap();
        assert_eq!(json, "\"LGT_COND\"");
    }
}
