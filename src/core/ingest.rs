//! Discover talk exports in a directory and count their lines.
//!
//! Every file directly inside the input directory whose name matches
//! `*.txt` becomes one [`Record`]. Files that can't be read or decoded are
//! reported as [`SkippedFile`]s and never stop the rest of the batch.
//!
//! # Matching rules
//!
//! | Rule | Behavior |
//! |------|----------|
//! | Recursion | None, only direct children are considered |
//! | Extension | Compared exactly, so `NOTES.TXT` is not picked up |
//! | Dot-files | Names starting with `.` never match |
//! | Order | File-name byte order |
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use talkrank::core::ingest::discover_and_count;
//!
//! # fn main() -> talkrank::Result<()> {
//! let ingested = discover_and_count(Path::new("talk_upload"))?;
//! for record in &ingested.records {
//!     println!("{}: {} lines", record.label, record.count);
//! }
//! for skipped in &ingested.skipped {
//!     eprintln!("skipped {}: {}", skipped.label, skipped.reason);
//! }
//! # Ok(())
//! # }
//! ```

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::IngestConfig;
use crate::encoding::{self, TextEncoding};
use crate::error::{IngestError, Result};
use crate::record::Record;

/// A matched file that was left out of the results, and why.
#[derive(Debug)]
pub struct SkippedFile {
    /// Full path of the file
    pub path: PathBuf,
    /// Label the file would have had
    pub label: String,
    /// Underlying cause
    pub reason: IngestError,
}

/// Outcome of one ingestion pass.
#[derive(Debug, Default)]
pub struct Ingested {
    /// Successfully counted files, in discovery order
    pub records: Vec<Record>,
    /// Files that matched the pattern but could not be counted
    pub skipped: Vec<SkippedFile>,
    discovered: usize,
}

impl Ingested {
    /// Number of files that matched the pattern, counted or not.
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// Returns `true` if the directory held no matching file at all.
    ///
    /// This differs from `records.is_empty()`, which is also true when
    /// every matching file was skipped.
    pub fn found_nothing(&self) -> bool {
        self.discovered == 0
    }
}

/// Creates the input directory if it doesn't exist yet.
///
/// Returns `true` when the directory was created by this call, so the
/// caller can tell the user where to put their exports.
pub fn ensure_input_dir(directory: &Path) -> Result<bool> {
    if directory.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(directory)?;
    debug!(directory = %directory.display(), "Created input directory");
    Ok(true)
}

/// Lists the files directly inside `directory` that match `*.{extension}`.
pub fn discover_files(directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if matches_extension(&path, extension) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn matches_extension(path: &Path, extension: &str) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    if name.as_encoded_bytes().starts_with(b".") {
        return false;
    }
    path.extension() == Some(OsStr::new(extension))
}

/// Derives a record label from a file path by dropping the last extension.
///
/// ```
/// use std::path::Path;
/// use talkrank::core::ingest::label_for;
///
/// assert_eq!(label_for(Path::new("talk/山田.txt")).as_deref(), Some("山田"));
/// assert_eq!(label_for(Path::new("a.b.txt")).as_deref(), Some("a.b"));
/// ```
pub fn label_for(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

/// Counts lines the way a text reader with universal newlines does.
///
/// `\n`, `\r\n` and a lone `\r` each end one line; a trailing line
/// without a terminator still counts; an empty string has no lines.
///
/// ```
/// use talkrank::core::ingest::count_lines;
///
/// assert_eq!(count_lines(""), 0);
/// assert_eq!(count_lines("a\nb\n"), 2);
/// assert_eq!(count_lines("a\r\nb\rc"), 3);
/// ```
pub fn count_lines(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut lines = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => lines += 1,
            b'\r' => {
                lines += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if text.ends_with(|c: char| c != '\n' && c != '\r') {
        lines += 1;
    }

    lines
}

/// Reads one file and counts its lines, trying each encoding in order.
pub fn count_file(
    path: &Path,
    encodings: &[TextEncoding],
) -> std::result::Result<(usize, TextEncoding), IngestError> {
    let bytes = fs::read(path)?;
    let (text, used) = encoding::decode(&bytes, encodings)?;
    Ok((count_lines(&text), used))
}

/// Discovers `*.txt` exports in `directory` and counts each one.
///
/// Uses the default [`IngestConfig`]: UTF-8 first, Shift_JIS as fallback.
pub fn discover_and_count(directory: &Path) -> Result<Ingested> {
    discover_and_count_with(directory, &IngestConfig::default())
}

/// Discovers exports in `directory` using an explicit configuration.
///
/// # Errors
///
/// Only fails if the directory itself can't be listed. Per-file failures
/// end up in [`Ingested::skipped`].
pub fn discover_and_count_with(directory: &Path, config: &IngestConfig) -> Result<Ingested> {
    let files = discover_files(directory, &config.extension)?;
    let mut ingested = Ingested {
        discovered: files.len(),
        ..Ingested::default()
    };

    for path in files {
        let label = label_for(&path).unwrap_or_default();

        match count_file(&path, &config.encodings) {
            Ok((count, encoding)) => {
                debug!(label = %label, lines = count, %encoding, "Counted export");
                ingested.records.push(Record::new(label, count));
            }
            Err(reason) => {
                warn!(file = %path.display(), error = %reason, "Skipping export");
                ingested.skipped.push(SkippedFile {
                    path,
                    label,
                    reason,
                });
            }
        }
    }

    Ok(ingested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_count_lines_terminators() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("one"), 1);
        assert_eq!(count_lines("one\n"), 1);
        assert_eq!(count_lines("one\ntwo"), 2);
        assert_eq!(count_lines("\n"), 1);
        assert_eq!(count_lines("\n\n\n"), 3);
        assert_eq!(count_lines("a\r\nb\r\n"), 2);
        assert_eq!(count_lines("a\rb\rc"), 3);
        assert_eq!(count_lines("a\r\n\r\nb"), 3);
        assert_eq!(count_lines("a\n\rb"), 3);
    }

    #[test]
    fn test_count_lines_multibyte() {
        assert_eq!(count_lines("山田: こんにちは\n田中: 🎉\n"), 2);
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(Path::new("alice.txt")).as_deref(), Some("alice"));
        assert_eq!(label_for(Path::new("/x/y/bob.txt")).as_deref(), Some("bob"));
        assert_eq!(
            label_for(Path::new("[LINE] Talk.2024.txt")).as_deref(),
            Some("[LINE] Talk.2024")
        );
    }

    #[test]
    fn test_discover_files_pattern() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("c.csv"), "x").unwrap();
        fs::write(dir.path().join("UPPER.TXT"), "x").unwrap();
        fs::write(dir.path().join(".hidden.txt"), "x").unwrap();
        fs::write(dir.path().join("noext"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("nested.txt"), "x").unwrap();

        let files = discover_files(dir.path(), "txt").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_discover_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let err = discover_and_count(&dir.path().join("absent")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_discover_and_count_empty_dir() {
        let dir = tempdir().unwrap();
        let ingested = discover_and_count(dir.path()).unwrap();
        assert!(ingested.records.is_empty());
        assert!(ingested.skipped.is_empty());
        assert!(ingested.found_nothing());
    }

    #[test]
    fn test_discover_and_count_keeps_discovery_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bob.txt"), "1\n2\n3\n4\n").unwrap();
        fs::write(dir.path().join("alice.txt"), "1\n2\n").unwrap();

        let ingested = discover_and_count(dir.path()).unwrap();
        assert_eq!(
            ingested.records,
            vec![Record::new("alice", 2), Record::new("bob", 4)]
        );
        assert_eq!(ingested.discovered(), 2);
    }

    #[test]
    fn test_directory_named_like_export_is_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.txt")).unwrap();
        fs::write(dir.path().join("real.txt"), "hi\n").unwrap();

        let ingested = discover_and_count(dir.path()).unwrap();
        assert_eq!(ingested.records, vec![Record::new("real", 1)]);
        assert_eq!(ingested.skipped.len(), 1);
        assert_eq!(ingested.skipped[0].label, "folder");
        assert!(matches!(ingested.skipped[0].reason, IngestError::Read(_)));
        assert!(!ingested.found_nothing());
    }

    #[test]
    fn test_custom_extension_and_encodings() {
        let dir = tempdir().unwrap();
        let (euc, _, _) = encoding_rs::EUC_JP.encode("一行目\n二行目\n");
        fs::write(dir.path().join("old.log"), &euc).unwrap();
        fs::write(dir.path().join("ignored.txt"), "x\n").unwrap();

        let config = IngestConfig::new()
            .with_extension("log")
            .with_encodings(vec![TextEncoding::Utf8, TextEncoding::EucJp]);
        let ingested = discover_and_count_with(dir.path(), &config).unwrap();

        assert_eq!(ingested.records, vec![Record::new("old", 2)]);
    }

    #[test]
    fn test_ensure_input_dir() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("talk_upload");

        assert!(ensure_input_dir(&target).unwrap());
        assert!(target.is_dir());
        assert!(!ensure_input_dir(&target).unwrap());
    }
}
