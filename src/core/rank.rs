//! Rank records by line count.
//!
//! [`rank`] sorts records by count, highest first. The sort is stable:
//! records with equal counts keep the order in which their files were
//! discovered. Records sharing a label are never merged.
//!
//! # Example
//!
//! ```
//! use talkrank::{Record, rank};
//!
//! let ranked = rank(vec![Record::new("alice", 3), Record::new("bob", 10)]);
//!
//! let table: Vec<_> = ranked
//!     .entries()
//!     .map(|e| (e.rank, e.label, e.count))
//!     .collect();
//! assert_eq!(table, vec![(1, "bob", 10), (2, "alice", 3)]);
//! ```

use std::cmp::Reverse;

use serde::Serialize;

use crate::record::Record;

/// Records ordered by count, highest first.
///
/// This is the canonical ranking shown in the table. Construct it with
/// [`rank`]; the ordering invariant can't be broken from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedSeries {
    records: Vec<Record>,
}

/// One row of the ranking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    /// 1-based position in the ranking
    pub rank: usize,
    /// Record label
    pub label: &'a str,
    /// Line count
    pub count: usize,
}

/// Sorts records by count descending, keeping discovery order among ties.
///
/// Never fails; an empty input yields an empty series.
pub fn rank(mut records: Vec<Record>) -> RankedSeries {
    records.sort_by_key(|r| Reverse(r.count));
    RankedSeries { records }
}

impl RankedSeries {
    /// Returns the ranked records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates over table rows with their 1-based rank.
    pub fn entries(&self) -> impl Iterator<Item = RankedEntry<'_>> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| RankedEntry {
                rank: i + 1,
                label: &r.label,
                count: r.count,
            })
    }

    /// Number of ranked records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all line counts.
    pub fn total_count(&self) -> usize {
        self.records.iter().map(|r| r.count).sum()
    }

    /// Consumes the series, returning the records in ranked order.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a RankedSeries {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(series: &RankedSeries) -> Vec<&str> {
        series.records().iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank(vec![
            Record::new("alice", 3),
            Record::new("bob", 10),
            Record::new("carol", 7),
        ]);
        assert_eq!(labels(&ranked), vec!["bob", "carol", "alice"]);
    }

    #[test]
    fn test_rank_is_stable() {
        let ranked = rank(vec![
            Record::new("first", 5),
            Record::new("big", 9),
            Record::new("second", 5),
            Record::new("third", 5),
        ]);
        assert_eq!(labels(&ranked), vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn test_rank_keeps_duplicate_labels() {
        let ranked = rank(vec![Record::new("dup", 1), Record::new("dup", 4)]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked.records()[0], Record::new("dup", 4));
        assert_eq!(ranked.records()[1], Record::new("dup", 1));
    }

    #[test]
    fn test_rank_empty() {
        let ranked = rank(Vec::new());
        assert!(ranked.is_empty());
        assert_eq!(ranked.entries().count(), 0);
        assert_eq!(ranked.total_count(), 0);
    }

    #[test]
    fn test_entries_are_one_based() {
        let ranked = rank(vec![Record::new("a", 1), Record::new("b", 2)]);
        let ranks: Vec<_> = ranked.entries().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let once = rank(vec![
            Record::new("x", 2),
            Record::new("y", 2),
            Record::new("z", 8),
        ]);
        let twice = rank(once.clone().into_records());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_total_count() {
        let ranked = rank(vec![Record::new("a", 1_000), Record::new("b", 234)]);
        assert_eq!(ranked.total_count(), 1_234);
    }

    #[test]
    fn test_serializes_as_array() {
        let ranked = rank(vec![Record::new("a", 1)]);
        let json = serde_json::to_string(&ranked).unwrap();
        assert_eq!(json, r#"[{"label":"a","count":1}]"#);
    }
}
