//! The single entry point a front end calls per refresh.
//!
//! [`analyze`] runs ingest, rank and filter in one go and hands back plain
//! values: the ranking for the table, the chart series, and the per-file
//! skip diagnostics. Nothing is cached between calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use talkrank::{TalkrankError, analyze};
//!
//! match analyze(Path::new("talk_upload"), "me, bot") {
//!     Ok(analysis) => {
//!         for entry in analysis.ranked.entries() {
//!             println!("{:>3}. {} ({})", entry.rank, entry.label, entry.count);
//!         }
//!     }
//!     Err(TalkrankError::NoInputFiles { directory, .. }) => {
//!         println!("Put your exports into {}", directory.display());
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use std::path::Path;

use tracing::info;

use crate::config::AnalysisConfig;
use crate::core::filter::{ChartSeries, ExclusionSet, to_chart_series_with};
use crate::core::ingest::{SkippedFile, discover_and_count_with};
use crate::core::rank::{RankedSeries, rank};
use crate::error::{Result, TalkrankError};

/// Everything one analysis request produces.
#[derive(Debug, Default)]
pub struct Analysis {
    /// Full ranking, for the table
    pub ranked: RankedSeries,
    /// Ranking minus exclusions, in bar-chart render order
    pub chart: ChartSeries,
    /// Files that matched but could not be counted
    pub skipped: Vec<SkippedFile>,
    /// Exclusions that were applied to the chart
    pub excluded: ExclusionSet,
}

impl Analysis {
    /// Returns `true` if at least one file was skipped.
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Analyzes `directory` with default settings.
///
/// # Errors
///
/// - [`TalkrankError::NoInputFiles`] if no `*.txt` file exists there
/// - [`TalkrankError::Io`] if the directory can't be listed
pub fn analyze(directory: &Path, excluded_raw: &str) -> Result<Analysis> {
    analyze_with(directory, excluded_raw, &AnalysisConfig::default())
}

/// Analyzes `directory` using an explicit configuration.
pub fn analyze_with(
    directory: &Path,
    excluded_raw: &str,
    config: &AnalysisConfig,
) -> Result<Analysis> {
    let ingested = discover_and_count_with(directory, &config.ingest)?;

    if ingested.found_nothing() {
        return Err(TalkrankError::no_input_files(
            directory,
            config.ingest.extension.clone(),
        ));
    }

    info!(
        discovered = ingested.discovered(),
        counted = ingested.records.len(),
        skipped = ingested.skipped.len(),
        "Ingested talk exports"
    );

    let excluded = ExclusionSet::parse(excluded_raw);
    let ranked = rank(ingested.records);
    let chart = to_chart_series_with(&ranked, &excluded);

    Ok(Analysis {
        ranked,
        chart,
        skipped: ingested.skipped,
        excluded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_analyze_ranks_and_charts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("alice.txt"), "a\nb\nc\n").unwrap();
        fs::write(dir.path().join("bob.txt"), "x\n".repeat(10)).unwrap();

        let analysis = analyze(dir.path(), "alice").unwrap();
        assert_eq!(
            analysis.ranked.records(),
            [Record::new("bob", 10), Record::new("alice", 3)]
        );
        assert_eq!(analysis.chart.labels(), ["bob"]);
        assert!(analysis.excluded.contains("alice"));
        assert!(!analysis.has_skipped());
    }

    #[test]
    fn test_analyze_without_exports() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "not an export").unwrap();

        let err = analyze(dir.path(), "").unwrap_err();
        assert!(err.is_no_input());
    }

    #[test]
    fn test_analyze_all_skipped_is_ok_and_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.txt"), [0x81u8, 0x0a, 0x81, 0x0a]).unwrap();

        let analysis = analyze(dir.path(), "").unwrap();
        assert!(analysis.ranked.is_empty());
        assert!(analysis.chart.is_empty());
        assert_eq!(analysis.skipped.len(), 1);
        assert_eq!(analysis.skipped[0].label, "broken");
    }
}
