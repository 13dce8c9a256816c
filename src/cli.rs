//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - How results are printed or exported

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, DEFAULT_INPUT_DIR, IngestConfig};
use crate::encoding::TextEncoding;

/// Rank talk exports by line count and chart who talks the most.
#[derive(Parser, Debug, Clone)]
#[command(name = "talkrank")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    talkrank
    talkrank exports/ --exclude \"me, Bot\"
    talkrank -o ranking.csv
    talkrank -f json -o report.json --no-chart
    talkrank --encoding utf8 --encoding euc-jp")]
pub struct Args {
    /// Directory holding one *.txt export per participant
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    pub dir: PathBuf,

    /// Comma-separated nicknames to leave out of the chart
    #[arg(short = 'x', long, value_name = "NAMES", default_value = "")]
    pub exclude: String,

    /// Output format: table on stdout, or an export file format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write the export to this file (format from --format or the extension)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Candidate encodings in the order they are tried: utf8, shift-jis
    /// (alias sjis, cp932) or euc-jp [default: utf8, shift-jis]
    #[arg(short, long = "encoding", value_name = "ENCODING")]
    pub encodings: Vec<TextEncoding>,

    /// Don't print the bar chart
    #[arg(long)]
    pub no_chart: bool,

    /// Width of the longest bar, in characters
    #[arg(short, long, default_value_t = 40)]
    pub width: usize,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    /// Builds the library configuration from the command line.
    pub fn analysis_config(&self) -> AnalysisConfig {
        let mut ingest = IngestConfig::new();
        if !self.encodings.is_empty() {
            ingest = ingest.with_encodings(self.encodings.clone());
        }
        AnalysisConfig::new().with_ingest(ingest)
    }
}

/// How results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Ranking table (and chart) on stdout
    #[default]
    Table,

    /// CSV with semicolon delimiter
    Csv,

    /// JSON report
    Json,
}

impl OutputFormat {
    /// Returns the export format, or `None` for terminal output.
    pub fn export_format(&self) -> Option<crate::format::ExportFormat> {
        match self {
            OutputFormat::Table => None,
            OutputFormat::Csv => Some(crate::format::ExportFormat::Csv),
            OutputFormat::Json => Some(crate::format::ExportFormat::Json),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "Table"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["talkrank"]).unwrap();
        assert_eq!(args.dir, PathBuf::from("talk_upload"));
        assert_eq!(args.exclude, "");
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.output.is_none());
        assert_eq!(args.width, 40);
        assert_eq!(
            args.analysis_config().ingest.encodings,
            vec![TextEncoding::Utf8, TextEncoding::ShiftJis]
        );
    }

    #[test]
    fn test_encodings_in_order() {
        let args =
            Args::try_parse_from(["talkrank", "-e", "euc-jp", "--encoding", "sjis"]).unwrap();
        assert_eq!(
            args.analysis_config().ingest.encodings,
            vec![TextEncoding::EucJp, TextEncoding::ShiftJis]
        );
    }

    #[test]
    fn test_exclude_and_format() {
        let args =
            Args::try_parse_from(["talkrank", "dir", "-x", "a, b", "-f", "json", "-o", "r.json"])
                .unwrap();
        assert_eq!(args.dir, PathBuf::from("dir"));
        assert_eq!(args.exclude, "a, b");
        assert_eq!(
            args.format.export_format(),
            Some(crate::format::ExportFormat::Json)
        );
    }

    #[test]
    fn test_verbosity_counts() {
        let args = Args::try_parse_from(["talkrank", "-vv", "-q"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.quiet, 1);
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let err = Args::try_parse_from(["talkrank", "-e", "latin1"]).unwrap_err();
        assert!(err.to_string().contains("Unknown encoding"));
    }

    #[test]
    fn test_encoding_aliases() {
        let args =
            Args::try_parse_from(["talkrank", "-e", "UTF-8", "-e", "cp932", "-e", "eucjp"]).unwrap();
        assert_eq!(
            args.encodings,
            vec![TextEncoding::Utf8, TextEncoding::ShiftJis, TextEncoding::EucJp]
        );
    }

    #[test]
    fn test_output_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Table).unwrap();
        assert_eq!(json, "\"table\"");
    }
}
