//! Integration tests for the code tables.

use fars_model::{CodeTableKind, FarsColumn};

#[test]
fn test_weather_labels() {
    let table = CodeTableKind::Weather.table();
    assert_eq!(table.column, FarsColumn::Weather);
    assert_eq!(table.label(1), Some("Clear"));
    assert_eq!(table.label(5), Some("Fog/Smog/Smoke"));
    assert_eq!(table.label(10), Some("Cloudy"));
    assert_eq!(table.label(11), Some("Blowing Snow"));
    assert_eq!(table.label(98), Some("Not Reported"));
    assert_eq!(table.label(99), Some("Unknown"));
    // 9 is not part of the table
    assert_eq!(table.label(9), None);
    assert_eq!(table.len(), 12);
}

#[test]
fn test_atmospheric_matches_weather() {
    let weather = CodeTableKind::Weather.table();
    let atmos = CodeTableKind::Atmospheric.table();
    assert_eq!(atmos.column, FarsColumn::AtmosphericCondition);
    assert_eq!(weather.entries(), atmos.entries());
}

#[test]
fn test_light_labels() {
    let table = CodeTableKind::Light.table();
    assert_eq!(table.label(1), Some("Daylight"));
    assert_eq!(table.label(2), Some("Dark - Street Lights"));
    assert_eq!(table.label(3), Some("Dark - No Street Lights"));
    assert_eq!(table.label(6), Some("Dark - Unknown Lighting"));
    assert_eq!(table.label(9), Some("Unknown"));
    assert_eq!(table.label(0), None);
}

#[test]
fn test_binary_tables() {
    let rural = CodeTableKind::RuralUrban.table();
    assert_eq!(rural.label(1), Some("Rural"));
    assert_eq!(rural.label(2), Some("Urban"));
    assert_eq!(rural.label(9), None);

    let work_zone = CodeTableKind::WorkZone.table();
    assert_eq!(work_zone.label(0), Some("No Work Zone"));
    assert_eq!(work_zone.label(1), Some("Work Zone"));
    assert_eq!(work_zone.label(2), None);
}

#[test]
fn test_functional_system_labels() {
    let table = CodeTableKind::FunctionalSystem.table();
    assert_eq!(table.label(1), Some("Interstate"));
    assert_eq!(table.label(7), Some("Local"));
    assert_eq!(table.label(96), None);
}

#[test]
fn test_state_table() {
    let table = CodeTableKind::State.table();
    assert_eq!(table.len(), 51);
    assert_eq!(table.label(6), Some("California"));
    assert_eq!(table.label(11), Some("DC"));
    assert_eq!(table.label(48), Some("Texas"));
    assert_eq!(table.label(56), Some("Wyoming"));
    for gap in [3, 7, 14, 43, 52] {
        assert_eq!(table.label(gap), None, "code {gap} is not a state");
    }
}

#[test]
fn test_every_entry_round_trips() {
    for kind in CodeTableKind::ALL {
        let table = kind.table();
        assert_eq!(table.kind, kind);
        for (code, label) in table.entries() {
            assert_eq!(table.label(*code), Some(*label));
        }
    }
}
