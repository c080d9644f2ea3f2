//! Road setting and roadway classification.

use serde::Serialize;

use fars_ingest::Dataset;
use fars_model::{CodeTableKind, FarsColumn};

use crate::conditions::labeled_by_count;
use crate::distribution::Distribution;

/// Rural/urban, work-zone and functional-system distributions, highest
/// count first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoadConditions {
    pub rural_urban: Option<Distribution<&'static str>>,
    pub work_zone: Option<Distribution<&'static str>>,
    pub functional_system: Option<Distribution<&'static str>>,
}

impl RoadConditions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let labeled = |column: FarsColumn, kind: CodeTableKind| {
            dataset
                .codes(column)
                .map(|codes| labeled_by_count(&codes, kind))
        };
        Self {
            rural_urban: labeled(FarsColumn::RuralUrban, CodeTableKind::RuralUrban),
            work_zone: labeled(FarsColumn::WorkZone, CodeTableKind::WorkZone),
            functional_system: labeled(
                FarsColumn::FunctionalSystem,
                CodeTableKind::FunctionalSystem,
            ),
        }
    }
}
