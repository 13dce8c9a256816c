//! The per-file record produced by ingestion.
//!
//! A [`Record`] pairs a label (the export's file name without its extension,
//! usually the participant's nickname) with the number of lines the file
//! holds. Line count stands in for how much that participant talked.
//!
//! # Examples
//!
//! ```
//! use talkrank::Record;
//!
//! let record = Record::new("alice", 42);
//! assert_eq!(record.label(), "alice");
//! assert_eq!(record.count(), 42);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use talkrank::Record;
//!
//! let record = Record::new("bob", 10);
//! let json = serde_json::to_string(&record)?;
//! assert_eq!(json, r#"{"label":"bob","count":10}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// One export file reduced to its label and line count.
///
/// Labels are **not** guaranteed unique. Records that share a label are
/// never merged; each one stays its own entry through ranking and
/// filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// File name with the trailing extension removed.
    pub label: String,

    /// Number of lines read from the file.
    pub count: usize,
}

impl Record {
    /// Creates a new record.
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }

    /// Returns the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the line count.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.count)
    }
}

impl<S: Into<String>> From<(S, usize)> for Record {
    fn from((label, count): (S, usize)) -> Self {
        Record::new(label, count)
    }
}
