//! Unified error types for talkrank.
//!
//! This module provides a single [`TalkrankError`] enum covering everything
//! that can stop an analysis request, plus [`IngestError`] for the per-file
//! failures that never stop one.
//!
//! # Error Handling Philosophy
//!
//! - A file that cannot be read or decoded is **skipped**, not fatal. Its
//!   cause travels as an [`IngestError`] inside a
//!   [`SkippedFile`](crate::core::ingest::SkippedFile).
//! - An input directory without any `*.txt` file is reported as
//!   [`TalkrankError::NoInputFiles`] so the caller can show a notice.
//! - Malformed exclusion strings are never an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::TextEncoding;

/// A specialized [`Result`] type for talkrank operations.
///
/// # Example
///
/// ```rust
/// use talkrank::error::Result;
/// use talkrank::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TalkrankError>;

/// The error type for all talkrank operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TalkrankError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input directory doesn't exist or can't be listed
    /// - The export file can't be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input directory contains no file matching the export pattern.
    ///
    /// Not a failure of the pipeline: callers surface it as a notice.
    #[error("No *.{extension} files found in '{}'", .directory.display())]
    NoInputFiles {
        /// The directory that was scanned
        directory: PathBuf,
        /// The extension that was looked for (without dot)
        extension: String,
    },

    /// An unknown output or encoding name was requested.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single export file was left out of the ranking.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened or read.
    #[error("read failed: {0}")]
    Read(#[from] io::Error),

    /// None of the candidate encodings could decode the file.
    #[error("not decodable as {}", format_encodings(.tried))]
    Undecodable {
        /// Encodings that were attempted, in order
        tried: Vec<TextEncoding>,
    },
}

fn format_encodings(tried: &[TextEncoding]) -> String {
    if tried.is_empty() {
        return "any encoding (none configured)".to_string();
    }
    tried
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TalkrankError {
    /// Creates a "no input files" error.
    pub fn no_input_files(directory: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        TalkrankError::NoInputFiles {
            directory: directory.into(),
            extension: extension.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TalkrankError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TalkrankError::Io(_))
    }

    /// Returns `true` if the input directory had nothing to analyze.
    pub fn is_no_input(&self) -> bool {
        matches!(self, TalkrankError::NoInputFiles { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TalkrankError::InvalidFormat { .. })
    }
}

impl IngestError {
    /// Returns `true` if the file was read but could not be decoded.
    pub fn is_undecodable(&self) -> bool {
        matches!(self, IngestError::Undecodable { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
