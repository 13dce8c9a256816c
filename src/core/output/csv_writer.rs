//! CSV output writer.

use std::fs::File;
use std::path::Path;

use crate::core::analysis::Analysis;
use crate::error::Result;

const HEADER: [&str; 3] = ["Rank", "Nickname", "Lines"];

/// Writes the ranking to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Rank`, `Nickname`, `Lines`
/// - Rows: ranking order, counts without thousands separators
/// - Encoding: UTF-8
pub fn write_csv(analysis: &Analysis, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(file);

    write_rows(&mut writer, analysis)?;
    writer.flush()?;
    Ok(())
}

/// Converts the ranking to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(analysis: &Analysis) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    write_rows(&mut writer, analysis)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_rows<W: std::io::Write>(writer: &mut csv::Writer<W>, analysis: &Analysis) -> Result<()> {
    writer.write_record(HEADER)?;

    for entry in analysis.ranked.entries() {
        writer.write_record([
            entry.rank.to_string().as_str(),
            entry.label,
            entry.count.to_string().as_str(),
        ])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rank::rank;
    use crate::record::Record;
    use tempfile::NamedTempFile;

    fn sample() -> Analysis {
        Analysis {
            ranked: rank(vec![
                Record::new("alice", 3),
                Record::new("bob", 12_345),
            ]),
            ..Analysis::default()
        }
    }

    #[test]
    fn test_to_csv_basic() {
        let csv = to_csv(&sample()).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines, vec!["Rank;Nickname;Lines", "1;bob;12345", "2;alice;3"]);
    }

    #[test]
    fn test_to_csv_quotes_delimiter_in_label() {
        let analysis = Analysis {
            ranked: rank(vec![Record::new("a;b", 1)]),
            ..Analysis::default()
        };
        let csv = to_csv(&analysis).unwrap();
        assert!(csv.contains("1;\"a;b\";1"));
    }

    #[test]
    fn test_to_csv_empty_has_header_only() {
        let csv = to_csv(&Analysis::default()).unwrap();
        assert_eq!(csv.trim_end(), "Rank;Nickname;Lines");
    }

    #[test]
    fn test_write_csv_file() {
        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&sample(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("1;bob;12345"));
    }
}
