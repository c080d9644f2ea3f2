//! Static code to label tables.
//!
//! FARS stores categorical fields as integer codes. The tables below are the
//! subset of the FARS coding manual used when labelling distributions; codes
//! not listed here are treated as unmapped and dropped from labelled output.

use serde::Serialize;

use crate::columns::FarsColumn;
use crate::conditions::{DAY_NAMES, MONTH_NAMES};

/// Identifies one of the built-in code tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeTableKind {
    Weather,
    Atmospheric,
    Light,
    RuralUrban,
    WorkZone,
    FunctionalSystem,
    State,
}

/// A fixed mapping from integer code to human-readable label.
#[derive(Debug)]
pub struct CodeTable {
    pub kind: CodeTableKind,
    pub column: FarsColumn,
    pub title: &'static str,
    entries: &'static [(i64, &'static str)],
}

impl CodeTable {
    /// Resolves a code to its label.
    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.entries
            .binary_search_by_key(&code, |(key, _)| *key)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Entries in ascending code order.
    pub fn entries(&self) -> &'static [(i64, &'static str)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CodeTableKind {
    pub const ALL: [CodeTableKind; 7] = [
        CodeTableKind::Weather,
        CodeTableKind::Atmospheric,
        CodeTableKind::Light,
        CodeTableKind::RuralUrban,
        CodeTableKind::WorkZone,
        CodeTableKind::FunctionalSystem,
        CodeTableKind::State,
    ];

    /// Returns the static table for this kind.
    pub fn table(self) -> &'static CodeTable {
        match self {
            CodeTableKind::Weather => &WEATHER,
            CodeTableKind::Atmospheric => &ATMOSPHERIC,
            CodeTableKind::Light => &LIGHT,
            CodeTableKind::RuralUrban => &RURAL_URBAN,
            CodeTableKind::WorkZone => &WORK_ZONE,
            CodeTableKind::FunctionalSystem => &FUNCTIONAL_SYSTEM,
            CodeTableKind::State => &STATE,
        }
    }
}

// Weather and atmospheric condition share one coding scheme.
const WEATHER_ENTRIES: &[(i64, &str)] = &[
    (1, "Clear"),
    (2, "Rain"),
    (3, "Sleet/Hail"),
    (4, "Snow"),
    (5, "Fog/Smog/Smoke"),
    (6, "Severe Crosswinds"),
    (7, "Blowing Sand/Dirt"),
    (8, "Other"),
    (10, "Cloudy"),
    (11, "Blowing Snow"),
    (98, "Not Reported"),
    (99, "Unknown"),
];

static WEATHER: CodeTable = CodeTable {
    kind: CodeTableKind::Weather,
    column: FarsColumn::Weather,
    title: "Weather Condition",
    entries: WEATHER_ENTRIES,
};

static ATMOSPHERIC: CodeTable = CodeTable {
    kind: CodeTableKind::Atmospheric,
    column: FarsColumn::AtmosphericCondition,
    title: "Atmospheric Condition",
    entries: WEATHER_ENTRIES,
};

static LIGHT: CodeTable = CodeTable {
    kind: CodeTableKind::Light,
    column: FarsColumn::LightCondition,
    title: "Light Condition",
    entries: &[
        (1, "Daylight"),
        (2, "Dark - Street Lights"),
        (3, "Dark - No Street Lights"),
        (4, "Dawn"),
        (5, "Dusk"),
        (6, "Dark - Unknown Lighting"),
        (7, "Other"),
        (8, "Not Reported"),
        (9, "Unknown"),
    ],
};

static RURAL_URBAN: CodeTable = CodeTable {
    kind: CodeTableKind::RuralUrban,
    column: FarsColumn::RuralUrban,
    title: "Rural/Urban",
    entries: &[(1, "Rural"), (2, "Urban")],
};

static WORK_ZONE: CodeTable = CodeTable {
    kind: CodeTableKind::WorkZone,
    column: FarsColumn::WorkZone,
    title: "Work Zone",
    entries: &[(0, "No Work Zone"), (1, "Work Zone")],
};

static FUNCTIONAL_SYSTEM: CodeTable = CodeTable {
    kind: CodeTableKind::FunctionalSystem,
    column: FarsColumn::FunctionalSystem,
    title: "Road Functional System",
    entries: &[
        (1, "Interstate"),
        (2, "Other Freeways"),
        (3, "Other Principal Arterial"),
        (4, "Minor Arterial"),
        (5, "Major Collector"),
        (6, "Minor Collector"),
        (7, "Local"),
    ],
};

static STATE: CodeTable = CodeTable {
    kind: CodeTableKind::State,
    column: FarsColumn::State,
    title: "State",
    entries: &[
        (1, "Alabama"),
        (2, "Alaska"),
        (4, "Arizona"),
        (5, "Arkansas"),
        (6, "California"),
        (8, "Colorado"),
        (9, "Connecticut"),
        (10, "Delaware"),
        (11, "DC"),
        (12, "Florida"),
        (13, "Georgia"),
        (15, "Hawaii"),
        (16, "Idaho"),
        (17, "Illinois"),
        (18, "Indiana"),
        (19, "Iowa"),
        (20, "Kansas"),
        (21, "Kentucky"),
        (22, "Louisiana"),
        (23, "Maine"),
        (24, "Maryland"),
        (25, "Massachusetts"),
        (26, "Michigan"),
        (27, "Minnesota"),
        (28, "Mississippi"),
        (29, "Missouri"),
        (30, "Montana"),
        (31, "Nebraska"),
        (32, "Nevada"),
        (33, "New Hampshire"),
        (34, "New Jersey"),
        (35, "New Mexico"),
        (36, "New York"),
        (37, "North Carolina"),
        (38, "North Dakota"),
        (39, "Ohio"),
        (40, "Oklahoma"),
        (41, "Oregon"),
        (42, "Pennsylvania"),
        (44, "Rhode Island"),
        (45, "South Carolina"),
        (46, "South Dakota"),
        (47, "Tennessee"),
        (48, "Texas"),
        (49, "Utah"),
        (50, "Vermont"),
        (51, "Virginia"),
        (53, "Washington"),
        (54, "West Virginia"),
        (55, "Wisconsin"),
        (56, "Wyoming"),
    ],
};

/// Day-of-week name for a `DAY_WEEK` code (1 = Sunday).
pub fn day_name(code: i64) -> Option<&'static str> {
    name_at(&DAY_NAMES, code)
}

/// Month abbreviation for a `MONTH` code (1 = Jan).
pub fn month_name(code: i64) -> Option<&'static str> {
    name_at(&MONTH_NAMES, code)
}

fn name_at(names: &[&'static str], code: i64) -> Option<&'static str> {
    let idx = usize::try_from(code).ok()?.checked_sub(1)?;
    names.get(idx).copied()
}
