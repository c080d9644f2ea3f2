//! State-level counts and coordinate availability.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use serde::Serialize;

use fars_ingest::Dataset;
use fars_model::{CodeTableKind, FarsColumn};

use crate::conditions::labeled_by_count;
use crate::distribution::Distribution;

/// Number of states charted.
pub const STATES_TOP_N: usize = 15;

/// Default number of rows sampled when checking coordinates.
pub const DEFAULT_HOTSPOT_SAMPLE: usize = 1000;

/// Labelled state counts, highest first, at most [`STATES_TOP_N`].
pub fn top_states(codes: &[Option<i64>]) -> Distribution<&'static str> {
    labeled_by_count(codes, CodeTableKind::State).head(STATES_TOP_N)
}

/// Result of sampling rows for usable coordinates.
///
/// Descriptive only; no spatial clustering is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HotspotSample {
    /// Rows drawn.
    pub sampled: usize,
    /// Sampled rows in the western hemisphere north of the equator.
    pub valid: usize,
}

impl HotspotSample {
    /// Samples up to `sample_size` rows without replacement and counts those
    /// with `LATITUDE > 0` and `LONGITUD < 0`.
    ///
    /// Returns `None` unless both coordinate columns are present.
    pub fn from_dataset(dataset: &Dataset, sample_size: usize, seed: Option<u64>) -> Option<Self> {
        let latitudes = dataset.values(FarsColumn::Latitude)?;
        let longitudes = dataset.values(FarsColumn::Longitude)?;
        Some(Self::from_coordinates(
            &latitudes,
            &longitudes,
            sample_size,
            seed,
        ))
    }

    pub fn from_coordinates(
        latitudes: &[Option<f64>],
        longitudes: &[Option<f64>],
        sample_size: usize,
        seed: Option<u64>,
    ) -> Self {
        let rows = latitudes.len().min(longitudes.len());
        let amount = sample_size.min(rows);
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let valid = index::sample(&mut rng, rows, amount)
            .into_iter()
            .filter(|&row| {
                matches!(
                    (latitudes[row], longitudes[row]),
                    (Some(lat), Some(lon)) if lat > 0.0 && lon < 0.0
                )
            })
            .count();
        Self {
            sampled: amount,
            valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sample_counts_every_valid_row() {
        let lat = [Some(33.0), Some(-10.0), None, Some(40.0), Some(45.0)];
        let lon = [Some(-86.0), Some(-50.0), Some(-90.0), Some(120.0), Some(-100.0)];
        let sample = HotspotSample::from_coordinates(&lat, &lon, 1000, None);
        assert_eq!(sample.sampled, 5);
        assert_eq!(sample.valid, 2);
    }

    #[test]
    fn test_seeded_sample_is_repeatable() {
        let lat: Vec<Option<f64>> = (0..100).map(|i| Some(f64::from(i) - 50.0)).collect();
        let lon = vec![Some(-90.0); 100];
        let first = HotspotSample::from_coordinates(&lat, &lon, 10, Some(7));
        let second = HotspotSample::from_coordinates(&lat, &lon, 10, Some(7));
        assert_eq!(first, second);
        assert_eq!(first.sampled, 10);
        assert!(first.valid <= 10);
    }

    #[test]
    fn test_top_states() {
        let codes = [Some(6), Some(6), Some(48), Some(3), None];
        let states = top_states(&codes);
        assert_eq!(states.first().unwrap().key, "California");
        assert_eq!(states.get(&"Texas"), Some(1));
        assert_eq!(states.total(), 3);
    }
}
