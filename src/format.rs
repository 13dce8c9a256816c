//! Export format types for the talkrank library.
//!
//! These types don't depend on CLI frameworks, so any front end can pick an
//! export format and hand it to [`write_to_format`].
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> talkrank::Result<()> {
//! use std::path::Path;
//! use talkrank::analyze;
//! use talkrank::format::{ExportFormat, write_to_format};
//!
//! let analysis = analyze(Path::new("talk_upload"), "")?;
//!
//! // Detect format from extension
//! let format = ExportFormat::from_path(Path::new("ranking.json"))?;
//! write_to_format(&analysis, Path::new("ranking.json"), format)?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::analysis::Analysis;
use crate::error::TalkrankError;

/// Export format for analysis results.
///
/// - [`Csv`](ExportFormat::Csv) - The ranking table, for spreadsheets
/// - [`Json`](ExportFormat::Json) - Ranking, chart series and skipped files
///
/// # Example
///
/// ```rust
/// use talkrank::format::ExportFormat;
/// use std::str::FromStr;
///
/// let format = ExportFormat::from_str("json").unwrap();
/// assert_eq!(format, ExportFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// Pretty-printed JSON report
    Json,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json"]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::path::Path;
    /// use talkrank::format::ExportFormat;
    ///
    /// let format = ExportFormat::from_path(Path::new("out/ranking.CSV")).unwrap();
    /// assert_eq!(format, ExportFormat::Csv);
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, TalkrankError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        [ExportFormat::Csv, ExportFormat::Json]
            .into_iter()
            .find(|format| format.extension() == ext)
            .ok_or_else(|| {
                TalkrankError::invalid_format(
                    "export",
                    format!(
                        "Unknown file extension: '.{}'. Expected one of: {}",
                        ext,
                        ExportFormat::all_names().join(", ")
                    ),
                )
            })
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes the analysis to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    analysis: &Analysis,
    path: &Path,
    format: ExportFormat,
) -> Result<(), TalkrankError> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::write_csv(analysis, path),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::write_json(analysis, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts the analysis to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(analysis: &Analysis, format: ExportFormat) -> Result<String, TalkrankError> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::to_csv(analysis),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::to_json(analysis),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: ExportFormat) -> TalkrankError {
    TalkrankError::invalid_format(
        "export",
        format!(
            "Export format {:?} requires the '{}' feature to be enabled",
            format,
            match format {
                ExportFormat::Csv => "csv-output",
                ExportFormat::Json => "json-output",
            }
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_str("JSON").unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ExportFormat::Csv.to_string(), "CSV");
        assert_eq!(ExportFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("ranking.csv")).unwrap(),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("/tmp/report.JSON")).unwrap(),
            ExportFormat::Json
        );
        assert!(ExportFormat::from_path(Path::new("ranking.txt")).is_err());
        assert!(ExportFormat::from_path(Path::new("ranking")).is_err());
    }

    #[test]
    fn test_format_default() {
        assert_eq!(ExportFormat::default(), ExportFormat::Csv);
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_to_format_string_dispatch() {
        let analysis = Analysis::default();
        let csv = to_format_string(&analysis, ExportFormat::Csv).unwrap();
        assert!(csv.starts_with("Rank;Nickname;Lines"));
        let json = to_format_string(&analysis, ExportFormat::Json).unwrap();
        assert!(json.contains("\"ranking\""));
    }
}
