//! Frequency distributions and cross-tabulations.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use fars_model::CodeTable;

/// One bucket of a frequency distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket<K> {
    pub key: K,
    pub count: usize,
}

/// An ordered list of `(key, count)` buckets.
///
/// Construction yields buckets in ascending key order. Reordering is
/// explicit (`by_count`, `sort_by_key`) so the order any consumer sees is
/// always the order the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Distribution<K> {
    buckets: Vec<Bucket<K>>,
}

impl<K> Default for Distribution<K> {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }
}

impl<K: Ord> Distribution<K> {
    /// Counts the non-missing values, buckets in ascending key order.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<K>>,
    {
        let mut counts: BTreeMap<K, usize> = BTreeMap::new();
        for value in values.into_iter().flatten() {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self {
            buckets: counts
                .into_iter()
                .map(|(key, count)| Bucket { key, count })
                .collect(),
        }
    }

    /// Reorders buckets by ascending key.
    #[must_use]
    pub fn sort_by_key(mut self) -> Self {
        self.buckets.sort_by(|a, b| a.key.cmp(&b.key));
        self
    }
}

impl<K> Distribution<K> {
    /// Reorders buckets by descending count.
    ///
    /// The sort is stable: buckets with equal counts keep their current
    /// relative order, so on a key-ordered distribution ties stay in key order.
    #[must_use]
    pub fn by_count(mut self) -> Self {
        self.buckets.sort_by(|a, b| b.count.cmp(&a.count));
        self
    }

    /// Keeps the first `n` buckets.
    #[must_use]
    pub fn head(mut self, n: usize) -> Self {
        self.buckets.truncate(n);
        self
    }

    /// Drops buckets whose key fails the predicate.
    #[must_use]
    pub fn retain_keys<F>(mut self, keep: F) -> Self
    where
        F: Fn(&K) -> bool,
    {
        self.buckets.retain(|bucket| keep(&bucket.key));
        self
    }

    /// The first bucket holding the maximum count, in current order.
    pub fn peak(&self) -> Option<&Bucket<K>> {
        let mut best: Option<&Bucket<K>> = None;
        for bucket in &self.buckets {
            match best {
                Some(current) if bucket.count <= current.count => {}
                _ => best = Some(bucket),
            }
        }
        best
    }

    /// The first bucket in current order.
    pub fn first(&self) -> Option<&Bucket<K>> {
        self.buckets.first()
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn buckets(&self) -> &[Bucket<K>] {
        &self.buckets
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket<K>> {
        self.buckets.iter()
    }
}

impl<K: PartialEq> Distribution<K> {
    /// Count for `key`, if it has a bucket.
    pub fn get(&self, key: &K) -> Option<usize> {
        self.buckets
            .iter()
            .find(|bucket| &bucket.key == key)
            .map(|bucket| bucket.count)
    }
}

impl Distribution<i64> {
    /// Replaces codes by their labels.
    ///
    /// Codes missing from `table` are dropped. Codes sharing a label are
    /// merged into the position of the first one.
    pub fn labeled(&self, table: &CodeTable) -> Distribution<&'static str> {
        let mut buckets: Vec<Bucket<&'static str>> = Vec::with_capacity(self.buckets.len());
        for bucket in &self.buckets {
            let Some(label) = table.label(bucket.key) else {
                continue;
            };
            match buckets.iter_mut().find(|existing| existing.key == label) {
                Some(existing) => existing.count += bucket.count,
                None => buckets.push(Bucket {
                    key: label,
                    count: bucket.count,
                }),
            }
        }
        Distribution { buckets }
    }
}

/// Counts of `(row, column)` pairs, e.g. hour of day by weather label.
///
/// Rows and columns are both kept in ascending order; cells for pairs that
/// never occur are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTab {
    rows: Vec<i64>,
    columns: Vec<&'static str>,
    cells: Vec<Vec<usize>>,
}

impl CrossTab {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, &'static str)>,
    {
        let mut counts: BTreeMap<(i64, &'static str), usize> = BTreeMap::new();
        let mut columns: BTreeSet<&'static str> = BTreeSet::new();
        for pair in pairs {
            columns.insert(pair.1);
            *counts.entry(pair).or_insert(0) += 1;
        }
        let rows: Vec<i64> = counts
            .keys()
            .map(|(row, _)| *row)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let columns: Vec<&'static str> = columns.into_iter().collect();
        let cells = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| counts.get(&(*row, *column)).copied().unwrap_or(0))
                    .collect()
            })
            .collect();
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> &[i64] {
        &self.rows
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|value| *value == column)
    }

    pub fn count(&self, row: i64, column: &str) -> usize {
        let Some(r) = self.rows.iter().position(|value| *value == row) else {
            return 0;
        };
        let Some(c) = self.columns.iter().position(|value| *value == column) else {
            return 0;
        };
        self.cells[r][c]
    }

    /// One `(row, count)` point per row for `column`, or `None` if the
    /// column never occurs.
    pub fn series(&self, column: &str) -> Option<Vec<(i64, usize)>> {
        if !self.has_column(column) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| (*row, self.count(*row, column)))
                .collect(),
        )
    }

    /// Drops rows whose key fails the predicate.
    #[must_use]
    pub fn retain_rows<F>(mut self, keep: F) -> Self
    where
        F: Fn(i64) -> bool,
    {
        let mut rows = Vec::with_capacity(self.rows.len());
        let mut cells = Vec::with_capacity(self.cells.len());
        for (row, row_cells) in self.rows.into_iter().zip(self.cells) {
            if keep(row) {
                rows.push(row);
                cells.push(row_cells);
            }
        }
        self.rows = rows;
        self.cells = cells;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fars_model::CodeTableKind;

    #[test]
    fn test_from_values_skips_missing() {
        let dist = Distribution::from_values(vec![Some(3i64), None, Some(1), Some(3)]);
        let keys: Vec<i64> = dist.iter().map(|b| b.key).collect();
        assert_eq!(keys, vec![1, 3]);
        assert_eq!(dist.get(&3), Some(2));
        assert_eq!(dist.total(), 3);
    }

    #[test]
    fn test_by_count_is_stable() {
        let dist = Distribution::from_values(vec![Some(5i64), Some(2), Some(9), Some(9)]).by_count();
        let keys: Vec<i64> = dist.iter().map(|b| b.key).collect();
        // 9 has the most; 2 and 5 tie and stay in key order
        assert_eq!(keys, vec![9, 2, 5]);
    }

    #[test]
    fn test_peak_prefers_first_on_tie() {
        let dist = Distribution::from_values(vec![Some(20i64), Some(7), Some(20), Some(7)]);
        assert_eq!(dist.peak(), Some(&Bucket { key: 7, count: 2 }));

        let empty: Distribution<i64> = Distribution::default();
        assert_eq!(empty.peak(), None);
    }

    #[test]
    fn test_head_and_sort_by_key() {
        let dist = Distribution::from_values(vec![
            Some(1i64),
            Some(2),
            Some(2),
            Some(3),
            Some(3),
            Some(3),
        ])
        .by_count()
        .head(2)
        .sort_by_key();
        let keys: Vec<i64> = dist.iter().map(|b| b.key).collect();
        assert_eq!(keys, vec![2, 3]);
    }

    #[test]
    fn test_labeled_drops_unmapped() {
        let table = CodeTableKind::RuralUrban.table();
        let dist = Distribution::from_values(vec![Some(1i64), Some(2), Some(2), Some(9)]);
        let labeled = dist.labeled(table);
        assert_eq!(labeled.get(&"Rural"), Some(1));
        assert_eq!(labeled.get(&"Urban"), Some(2));
        assert_eq!(labeled.total(), 3);
        assert_eq!(labeled.len(), 2);
    }

    #[test]
    fn test_crosstab() {
        let tab = CrossTab::from_pairs(vec![(8, "Clear"), (8, "Rain"), (8, "Clear"), (17, "Rain")]);
        assert_eq!(tab.rows(), &[8, 17]);
        assert_eq!(tab.columns(), &["Clear", "Rain"]);
        assert_eq!(tab.count(8, "Clear"), 2);
        assert_eq!(tab.count(17, "Clear"), 0);
        assert_eq!(tab.series("Rain"), Some(vec![(8, 1), (17, 1)]));
        assert_eq!(tab.series("Snow"), None);
    }

    #[test]
    fn test_crosstab_series_fills_absent_pairs() {
        let tab = CrossTab::from_pairs(vec![(2, "Cloudy"), (18, "Clear"), (18, "Clear")]);
        assert!(tab.has_column("Cloudy"));
        assert!(!tab.has_column("Snow"));
        assert_eq!(tab.series("Clear"), Some(vec![(2, 0), (18, 2)]));
        assert_eq!(tab.series("Cloudy"), Some(vec![(2, 1), (18, 0)]));
    }

    #[test]
    fn test_crosstab_retain_rows() {
        let tab = CrossTab::from_pairs(vec![(8, "Clear"), (99, "Clear")]).retain_rows(|h| h < 24);
        assert_eq!(tab.rows(), &[8]);
        assert_eq!(tab.series("Clear"), Some(vec![(8, 1)]));
    }
}
