//! JSON report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::core::analysis::Analysis;
use crate::error::Result;

/// Report layout. Borrowed from the analysis, so building one is cheap.
#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    total_lines: usize,
    ranking: Vec<JsonEntry<'a>>,
    chart: JsonChart<'a>,
    excluded: Vec<&'a str>,
    skipped: Vec<JsonSkipped>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    rank: usize,
    label: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct JsonChart<'a> {
    labels: &'a [String],
    counts: &'a [usize],
}

#[derive(Serialize)]
struct JsonSkipped {
    label: String,
    path: String,
    reason: String,
}

impl<'a> JsonReport<'a> {
    fn from_analysis(analysis: &'a Analysis, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            total_lines: analysis.ranked.total_count(),
            ranking: analysis
                .ranked
                .entries()
                .map(|e| JsonEntry {
                    rank: e.rank,
                    label: e.label,
                    count: e.count,
                })
                .collect(),
            chart: JsonChart {
                labels: analysis.chart.labels(),
                counts: analysis.chart.counts(),
            },
            excluded: analysis.excluded.iter().collect(),
            skipped: analysis
                .skipped
                .iter()
                .map(|s| JsonSkipped {
                    label: s.label.clone(),
                    path: s.path.display().to_string(),
                    reason: s.reason.to_string(),
                })
                .collect(),
        }
    }
}

/// Writes the analysis to a pretty-printed JSON file.
///
/// # Format
/// ```json
/// {
///   "generated_at": "2024-06-15T12:30:00Z",
///   "total_lines": 13,
///   "ranking": [{"rank": 1, "label": "bob", "count": 10}, ...],
///   "chart": {"labels": ["alice", "bob"], "counts": [3, 10]},
///   "excluded": [],
///   "skipped": [{"label": "carol", "path": "...", "reason": "..."}]
/// }
/// ```
pub fn write_json(analysis: &Analysis, output_path: &Path) -> Result<()> {
    let json = to_json(analysis)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the analysis to a JSON string, stamped with the current time.
pub fn to_json(analysis: &Analysis) -> Result<String> {
    to_json_at(analysis, Utc::now())
}

/// Converts the analysis to a JSON string with an explicit timestamp.
pub fn to_json_at(analysis: &Analysis, generated_at: DateTime<Utc>) -> Result<String> {
    let report = JsonReport::from_analysis(analysis, generated_at);
    Ok(serde_json::to_string_pretty(&report)?)
}
