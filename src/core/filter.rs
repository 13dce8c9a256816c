//! Derive the chart series from a ranking.
//!
//! The chart leaves out participants the user excluded by name and lists
//! the rest in render order for a horizontal bar chart, whose categories
//! run bottom-to-top. The series is therefore the ranking **reversed**: the
//! top-ranked participant comes last.
//!
//! # Exclusion syntax
//!
//! | Input | Excluded labels |
//! |-------|-----------------|
//! | `""` | none |
//! | `"alice"` | `alice` |
//! | `" alice , bob "` | `alice`, `bob` |
//! | `",,alice,,"` | `alice` |
//! | `" , "` | none |
//!
//! Matching is exact and case-sensitive: `Alice` does not exclude `alice`,
//! and `ali` does not exclude `alice`. Every record carrying an excluded
//! label is removed, including duplicates.
//!
//! # Example
//!
//! ```
//! use talkrank::{Record, rank, to_chart_series};
//!
//! let ranked = rank(vec![
//!     Record::new("alice", 3),
//!     Record::new("bob", 10),
//!     Record::new("carol", 7),
//! ]);
//!
//! let chart = to_chart_series(&ranked, "carol");
//! assert_eq!(chart.labels(), ["alice", "bob"]);
//! assert_eq!(chart.counts(), [3, 10]);
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::rank::RankedSeries;

/// Labels to leave out of the chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    labels: BTreeSet<String>,
}

impl ExclusionSet {
    /// Parses a comma-separated list of labels.
    ///
    /// Each term is trimmed; empty terms are dropped. Never fails.
    pub fn parse(raw: &str) -> Self {
        raw.split(',').collect()
    }

    /// Returns `true` if `label` is excluded (exact, case-sensitive).
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Number of distinct excluded labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over excluded labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let labels = iter
            .into_iter()
            .map(|term| term.as_ref().trim().to_string())
            .filter(|term| !term.is_empty())
            .collect();
        Self { labels }
    }
}

/// Chart-ready data: parallel label and count arrays in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    labels: Vec<String>,
    counts: Vec<usize>,
}

impl ChartSeries {
    /// Category labels, lowest-ranked first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Bar values, parallel to [`labels`](Self::labels).
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Iterates over `(label, count)` pairs in render order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, usize)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }

    /// Largest count in the series, used to scale bars.
    pub fn max_count(&self) -> Option<usize> {
        self.counts.iter().copied().max()
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Removes excluded labels from a ranking and reverses it for rendering.
pub fn to_chart_series(ranked: &RankedSeries, excluded_raw: &str) -> ChartSeries {
    to_chart_series_with(ranked, &ExclusionSet::parse(excluded_raw))
}

/// Same as [`to_chart_series`] with an already-parsed exclusion set.
pub fn to_chart_series_with(ranked: &RankedSeries, excluded: &ExclusionSet) -> ChartSeries {
    let (labels, counts) = ranked
        .records()
        .iter()
        .rev()
        .filter(|r| !excluded.contains(&r.label))
        .map(|r| (r.label.clone(), r.count))
        .unzip();

    ChartSeries { labels, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rank::rank;
    use crate::record::Record;

    fn sample() -> RankedSeries {
        rank(vec![
            Record::new("alice", 3),
            Record::new("bob", 10),
            Record::new("carol", 7),
        ])
    }

    #[test]
    fn test_parse_trims_and_drops_empty() {
        let set = ExclusionSet::parse(" alice , ,bob,,  ");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["alice", "bob"]);
    }

    #[test]
    fn test_parse_degenerate_inputs() {
        assert!(ExclusionSet::parse("").is_empty());
        assert!(ExclusionSet::parse(",,,").is_empty());
        assert!(ExclusionSet::parse("   ").is_empty());
        assert!(ExclusionSet::parse(" , \t ,").is_empty());
    }

    #[test]
    fn test_parse_deduplicates() {
        assert_eq!(ExclusionSet::parse("a, a ,a").len(), 1);
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let set = ExclusionSet::parse(" Yamada Taro ");
        assert!(set.contains("Yamada Taro"));
        assert!(!set.contains("Yamada"));
    }

    #[test]
    fn test_no_exclusion_is_reversed_ranking() {
        let chart = to_chart_series(&sample(), "");
        assert_eq!(chart.labels(), ["alice", "carol", "bob"]);
        assert_eq!(chart.counts(), [3, 7, 10]);
    }

    #[test]
    fn test_exclusion_is_case_sensitive_and_exact() {
        let chart = to_chart_series(&sample(), "Alice, bo, caro");
        assert_eq!(chart.len(), 3);
    }

    #[test]
    fn test_exclude_everything() {
        let chart = to_chart_series(&sample(), "alice,bob,carol");
        assert!(chart.is_empty());
        assert_eq!(chart.max_count(), None);
    }

    #[test]
    fn test_exclusion_removes_every_duplicate() {
        let ranked = rank(vec![
            Record::new("dup", 5),
            Record::new("solo", 4),
            Record::new("dup", 1),
        ]);
        let chart = to_chart_series(&ranked, "dup");
        assert_eq!(chart.labels(), ["solo"]);
    }

    #[test]
    fn test_iter_pairs_and_max() {
        let chart = to_chart_series(&sample(), "carol");
        let pairs: Vec<_> = chart.iter().collect();
        assert_eq!(pairs, vec![("alice", 3), ("bob", 10)]);
        assert_eq!(chart.max_count(), Some(10));
    }

    #[test]
    fn test_empty_ranking() {
        let chart = to_chart_series(&RankedSeries::default(), "anything");
        assert!(chart.is_empty());
    }
}
