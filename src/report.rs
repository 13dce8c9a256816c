//! Plain-text rendering of the ranking table and the bar chart.
//!
//! The library hands out values; this module turns them into text for a
//! terminal. Counts are shown with `,` thousands separators.
//!
//! # Example
//!
//! ```
//! use talkrank::{Record, rank, to_chart_series};
//! use talkrank::report::{render_chart, render_table};
//!
//! let ranked = rank(vec![Record::new("alice", 3), Record::new("bob", 1_200)]);
//! let table = render_table(&ranked);
//! assert!(table.contains("1,200"));
//!
//! let chart = render_chart(&to_chart_series(&ranked, ""), 20);
//! // Highest bar is printed first
//! assert!(chart.lines().next().unwrap().starts_with("bob"));
//! ```

use crate::core::filter::ChartSeries;
use crate::core::rank::RankedSeries;

const BAR: char = '█';

/// Formats a count with `,` every three digits.
///
/// ```
/// use talkrank::report::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

fn pad_right(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(text_width(s))));
    out
}

/// Renders the ranking as a three-column table: rank, nickname, lines.
pub fn render_table(ranked: &RankedSeries) -> String {
    let counts: Vec<String> = ranked.entries().map(|e| format_count(e.count)).collect();

    let rank_w = ranked.len().to_string().len().max("Rank".len());
    let name_w = ranked
        .entries()
        .map(|e| text_width(e.label))
        .max()
        .unwrap_or(0)
        .max("Nickname".len());
    let count_w = counts
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(0)
        .max("Lines".len());

    let mut out = format!(
        "{:>rank_w$}  {}  {:>count_w$}\n",
        "Rank",
        pad_right("Nickname", name_w),
        "Lines"
    );
    out.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(rank_w),
        "-".repeat(name_w),
        "-".repeat(count_w)
    ));

    for (entry, count) in ranked.entries().zip(&counts) {
        out.push_str(&format!(
            "{:>rank_w$}  {}  {:>count_w$}\n",
            entry.rank,
            pad_right(entry.label, name_w),
            count
        ));
    }

    out
}

/// Renders a horizontal bar chart, `width` characters for the longest bar.
///
/// The series is in bottom-to-top order, so rows are printed from its last
/// element to its first: the top-ranked participant ends up on top.
pub fn render_chart(chart: &ChartSeries, width: usize) -> String {
    let Some(max) = chart.max_count() else {
        return "(nothing to chart)\n".to_string();
    };

    let label_w = chart.labels().iter().map(|l| text_width(l)).max().unwrap_or(0);
    let mut out = String::new();

    for (label, count) in chart.iter().rev() {
        let len = bar_len(count, max, width);
        out.push_str(&format!(
            "{} │{} {}\n",
            pad_right(label, label_w),
            BAR.to_string().repeat(len),
            format_count(count)
        ));
    }

    out
}

fn bar_len(count: usize, max: usize, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let len = (count as f64 / max as f64 * width as f64).round() as usize;
    // Non-zero counts always get a visible bar
    if count > 0 { len.max(1) } else { 0 }
}
