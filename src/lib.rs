//! # talkrank
//!
//! A Rust library for ranking chat-export text files by line count.
//!
//! ## Overview
//!
//! Drop one talk history export per participant into a folder (the file
//! name is the participant's nickname) and talkrank will:
//! - read every `*.txt` file, tolerating UTF-8 and Shift_JIS exports
//! - count lines as a proxy for how much each participant talked
//! - rank participants, highest first
//! - derive a chart series with chosen nicknames left out
//!
//! Files that can't be read or decoded are skipped and reported; one bad
//! file never stops the rest.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use talkrank::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let analysis = analyze(Path::new("talk_upload"), "me")?;
//!
//!     for entry in analysis.ranked.entries() {
//!         println!("{}. {} - {} lines", entry.rank, entry.label, entry.count);
//!     }
//!
//!     // Parallel arrays, lowest bar first
//!     let labels = analysis.chart.labels();
//!     let counts = analysis.chart.counts();
//!     assert_eq!(labels.len(), counts.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`core`] - The analysis pipeline
//!   - [`core::ingest`] - [`discover_and_count`](core::ingest::discover_and_count), [`SkippedFile`](core::ingest::SkippedFile)
//!   - [`core::rank`] - [`rank`], [`RankedSeries`](core::rank::RankedSeries)
//!   - [`core::filter`] - [`to_chart_series`], [`ChartSeries`](core::filter::ChartSeries)
//!   - [`core::analysis`] - [`analyze`], [`Analysis`](core::analysis::Analysis)
//!   - [`core::output`] - CSV and JSON writers
//! - [`encoding`] - Ordered encoding fallback
//! - [`config`] - [`IngestConfig`](config::IngestConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] - Export format selection
//! - [`report`] - Text table and bar chart rendering
//! - [`error`] - [`TalkrankError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod encoding;
pub mod error;
pub mod format;
pub mod record;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use crate::core::analysis::{Analysis, analyze};
pub use crate::core::filter::to_chart_series;
pub use crate::core::rank::rank;
pub use error::{Result, TalkrankError};
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use talkrank::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::Record;

    // Error types
    pub use crate::error::{IngestError, Result, TalkrankError};

    // Pipeline
    pub use crate::core::analysis::{Analysis, analyze, analyze_with};
    pub use crate::core::filter::{ChartSeries, ExclusionSet, to_chart_series};
    pub use crate::core::ingest::{Ingested, SkippedFile, discover_and_count};
    pub use crate::core::rank::{RankedSeries, rank};

    // Configuration
    pub use crate::config::{AnalysisConfig, IngestConfig};
    pub use crate::encoding::TextEncoding;

    // Export
    pub use crate::format::{ExportFormat, write_to_format};
}
