//! Property tests for distribution and share invariants.

use proptest::prelude::*;

use fars_analysis::{Distribution, hourly_distribution, labeled_by_count, light_share, weather_share};
use fars_model::CodeTableKind;

fn codes(max: i64) -> impl Strategy<Value = Vec<Option<i64>>> {
    prop::collection::vec(prop::option::of(0..max), 0..200)
}

proptest! {
    #[test]
    fn counts_sum_to_present_values(values in codes(120)) {
        let present = values.iter().flatten().count();
        let dist = Distribution::from_values(values.iter().copied());
        prop_assert_eq!(dist.total(), present);
    }

    #[test]
    fn labeled_distribution_only_has_table_labels(values in codes(120)) {
        for kind in CodeTableKind::ALL {
            let table = kind.table();
            let labeled = labeled_by_count(&values, kind);
            let mapped = values
                .iter()
                .flatten()
                .filter(|code| table.label(**code).is_some())
                .count();
            prop_assert_eq!(labeled.total(), mapped);
            for bucket in labeled.iter() {
                prop_assert!(table.entries().iter().any(|(_, label)| *label == bucket.key));
            }
        }
    }

    #[test]
    fn by_count_is_non_increasing(values in codes(30)) {
        let dist = Distribution::from_values(values.iter().copied()).by_count();
        prop_assert!(dist.buckets().windows(2).all(|pair| pair[0].count >= pair[1].count));
    }

    #[test]
    fn peak_is_lowest_key_with_max_count(values in codes(30)) {
        let dist = Distribution::from_values(values.iter().copied());
        match dist.peak() {
            None => prop_assert!(dist.is_empty()),
            Some(peak) => {
                let max = dist.iter().map(|b| b.count).max().unwrap_or(0);
                prop_assert_eq!(peak.count, max);
                let lowest = dist.iter().find(|b| b.count == max).map(|b| b.key);
                prop_assert_eq!(Some(peak.key), lowest);
            }
        }
    }

    #[test]
    fn hourly_keys_are_valid_hours(values in codes(100)) {
        let dist = hourly_distribution(&values);
        prop_assert!(dist.iter().all(|b| (0..24).contains(&b.key)));
    }

    #[test]
    fn condition_shares_are_consistent(values in codes(100)) {
        for share in [weather_share(&values), light_share(&values)].into_iter().flatten() {
            prop_assert!(share.baseline + share.adverse <= share.reported);
            prop_assert!(share.baseline_pct() + share.adverse_pct() <= 100.0 + 1e-9);
        }
    }
}
