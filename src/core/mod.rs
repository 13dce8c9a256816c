//! Core analysis pipeline.
//!
//! This module contains:
//! - [`ingest`] - Export discovery, decoding and line counting
//! - [`rank`] - Stable ranking by line count
//! - [`filter`] - Exclusion parsing and chart-series derivation
//! - [`analysis`] - The combined entry point
//! - [`output`] - Export writers (CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use talkrank::core::{Record, rank, to_chart_series};
//!
//! let ranked = rank(vec![Record::new("alice", 3), Record::new("bob", 10)]);
//! let chart = to_chart_series(&ranked, "");
//! assert_eq!(chart.labels(), ["alice", "bob"]);
//! ```

pub mod analysis;
pub mod filter;
pub mod ingest;
pub mod output;
pub mod rank;

// Re-export main types for convenience
pub use analysis::{Analysis, analyze, analyze_with};
pub use filter::{ChartSeries, ExclusionSet, to_chart_series, to_chart_series_with};
pub use ingest::{Ingested, SkippedFile, discover_and_count, discover_and_count_with};
pub use rank::{RankedEntry, RankedSeries, rank};

// Re-export Record from the crate root
pub use crate::Record;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
