//! Configuration types for ingestion and analysis.
//!
//! These are plain structs with builder methods and no CLI framework
//! dependencies, so the library can be driven from any front end.
//!
//! - [`IngestConfig`] - which files are picked up and how they are decoded
//! - [`AnalysisConfig`] - full pipeline settings
//!
//! # Example
//!
//! ```rust
//! use talkrank::config::{AnalysisConfig, IngestConfig};
//! use talkrank::encoding::TextEncoding;
//!
//! let ingest = IngestConfig::new()
//!     .with_encodings(vec![TextEncoding::Utf8, TextEncoding::EucJp]);
//!
//! let config = AnalysisConfig::new().with_ingest(ingest);
//! assert_eq!(config.ingest.extension, "txt");
//! ```

use serde::{Deserialize, Serialize};

use crate::encoding::TextEncoding;

/// Default input directory name: where users drop their talk exports.
pub const DEFAULT_INPUT_DIR: &str = "talk_upload";

/// Default export file extension (without dot).
pub const DEFAULT_EXTENSION: &str = "txt";

/// Configuration for discovering and reading export files.
///
/// # Example
///
/// ```rust
/// use talkrank::config::IngestConfig;
/// use talkrank::encoding::TextEncoding;
///
/// let config = IngestConfig::new();
/// assert_eq!(config.encodings, vec![TextEncoding::Utf8, TextEncoding::ShiftJis]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// File extension to match, without dot, case-sensitive (default: "txt")
    pub extension: String,

    /// Encodings tried in order (default: UTF-8, then Shift_JIS)
    pub encodings: Vec<TextEncoding>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            encodings: TextEncoding::default_candidates().to_vec(),
        }
    }
}

impl IngestConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file extension to match.
    ///
    /// A leading dot is accepted and stripped.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension
            .strip_prefix('.')
            .map(str::to_string)
            .unwrap_or(extension);
        self
    }

    /// Replaces the ordered list of candidate encodings.
    #[must_use]
    pub fn with_encodings(mut self, encodings: Vec<TextEncoding>) -> Self {
        self.encodings = encodings;
        self
    }

    /// Appends a fallback encoding if it isn't already a candidate.
    #[must_use]
    pub fn with_fallback(mut self, encoding: TextEncoding) -> Self {
        if !self.encodings.contains(&encoding) {
            self.encodings.push(encoding);
        }
        self
    }
}

/// Configuration for a full analysis request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// File discovery and decoding settings
    pub ingest: IngestConfig,
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ingestion configuration.
    #[must_use]
    pub fn with_ingest(mut self, ingest: IngestConfig) -> Self {
        self.ingest = ingest;
        self
    }
}
