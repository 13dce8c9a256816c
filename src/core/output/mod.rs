//! Export writers for analysis results.
//!
//! - [`write_csv`] / [`to_csv`] - ranking table, semicolon-delimited - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - full report with chart series and skipped files - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> talkrank::Result<()> {
//! use std::path::Path;
//! use talkrank::analyze;
//! use talkrank::core::output::{write_csv, write_json};
//!
//! let analysis = analyze(Path::new("talk_upload"), "")?;
//! write_csv(&analysis, Path::new("ranking.csv"))?;
//! write_json(&analysis, Path::new("ranking.json"))?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, to_json_at, write_json};
