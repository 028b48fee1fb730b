//! Presentation adapter.
//!
//! Converts a [`NucleotideCounts`] into the three views the page displays:
//! - Four descriptive sentences, one per base
//! - A two-column count table (nucleotide, count)
//! - A bar chart specification keyed on that table
//!
//! It also renders the plain-text report used by CLI mode. The adapter
//! never fails: the counter guarantees exactly four entries in fixed order.

use std::fmt::Write as _;

use crate::model::NucleotideCounts;
use crate::sequence::{extract_sequence, query_header};

/// Short description shown on the page and at the top of reports.
pub const ABOUT: &str =
    "This program counts the nucleotide composition of a query DNA sequence \
     and displays the result as text, a table, and a bar chart.";

/// Name of the first table column.
pub const NUCLEOTIDE_COLUMN: &str = "nucleotide";
/// Name of the second table column.
pub const COUNT_COLUMN: &str = "count";

/// Fixed width of one chart bar, in terminal cells.
pub const BAR_WIDTH: u16 = 7;

/// Width of the filled portion of an ASCII report bar at full scale.
const REPORT_BAR_WIDTH: u64 = 40;

/// Wrap width for report prose.
const REPORT_WRAP: usize = 72;

/// One row of the count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRow {
    pub nucleotide: &'static str,
    pub count: u64,
}

/// Two-column tabular projection of the counts, one row per base in
/// display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable {
    pub rows: Vec<CountRow>,
}

impl CountTable {
    /// Builds the table from the counts, preserving display order.
    pub fn from_counts(counts: &NucleotideCounts) -> Self {
        let rows = counts
            .iter()
            .map(|(base, count)| CountRow {
                nucleotide: base.symbol_str(),
                count,
            })
            .collect();
        Self { rows }
    }

    /// The two column names, in order.
    pub fn column_names() -> [&'static str; 2] {
        [NUCLEOTIDE_COLUMN, COUNT_COLUMN]
    }
}

/// Bar chart specification: one bar per base, categorical axis = symbol,
/// quantitative axis = count, fixed bar width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChartSpec {
    pub bar_width: u16,
    pub bars: Vec<(&'static str, u64)>,
}

impl BarChartSpec {
    /// Builds the chart specification keyed on the count table rows.
    pub fn from_table(table: &CountTable) -> Self {
        let bars = table
            .rows
            .iter()
            .map(|row| (row.nucleotide, row.count))
            .collect();
        Self {
            bar_width: BAR_WIDTH,
            bars,
        }
    }
}

/// Produces the four descriptive sentences, one per base in display order.
pub fn count_sentences(counts: &NucleotideCounts) -> Vec<String> {
    counts
        .iter()
        .map(|(base, count)| {
            format!(
                "There are {} {} ({})",
                count,
                base.full_name(),
                base.symbol()
            )
        })
        .collect()
}

/// Renders the full plain-text report for one raw query block.
///
/// Runs the whole pipeline (extract, tally, adapt) and lays the three
/// views out as wrapped prose, an aligned table, and ASCII bars.
pub fn render_report(raw: &str) -> String {
    let sequence = extract_sequence(raw);
    let counts = NucleotideCounts::tally(&sequence);
    let table = CountTable::from_counts(&counts);

    let mut out = String::new();
    out.push_str("DNA Nucleotide Count\n");
    out.push_str("====================\n\n");
    out.push_str(&textwrap::fill(ABOUT, REPORT_WRAP));
    out.push_str("\n\n");

    let header = query_header(raw);
    if !header.is_empty() {
        let _ = writeln!(out, "Query:           {}", header);
    }
    let _ = writeln!(out, "Sequence length: {}", sequence.chars().count());
    let _ = writeln!(out, "Bases counted:   {}", counts.total());
    out.push('\n');

    for sentence in count_sentences(&counts) {
        out.push_str(&sentence);
        out.push('\n');
    }
    out.push('\n');

    let [col_base, col_count] = CountTable::column_names();
    let _ = writeln!(out, "{:<10}  {:>5}", col_base, col_count);
    for row in &table.rows {
        let _ = writeln!(out, "{:<10}  {:>5}", row.nucleotide, row.count);
    }
    out.push('\n');

    out.push_str(&render_ascii_bars(&table));
    out
}

/// Renders one fixed-width ASCII bar per table row, scaled to the
/// largest count.
fn render_ascii_bars(table: &CountTable) -> String {
    let max = table.rows.iter().map(|r| r.count).max().unwrap_or(0);

    let mut out = String::new();
    for row in &table.rows {
        let filled = if max > 0 {
            (row.count * REPORT_BAR_WIDTH / max) as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{} {:<width$} {}",
            row.nucleotide,
            "█".repeat(filled),
            row.count,
            width = REPORT_BAR_WIDTH as usize
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences() {
        let counts = NucleotideCounts::tally("GAACACGT");
        let sentences = count_sentences(&counts);
        assert_eq!(
            sentences,
            vec![
                "There are 3 adenine (A)",
                "There are 1 thymine (T)",
                "There are 2 guanine (G)",
                "There are 2 cytosine (C)",
            ]
        );
    }

    #[test]
    fn test_table_rows_in_order() {
        let counts = NucleotideCounts::tally("GAACACGT");
        let table = CountTable::from_counts(&counts);
        let rows: Vec<(&str, u64)> = table
            .rows
            .iter()
            .map(|r| (r.nucleotide, r.count))
            .collect();
        assert_eq!(rows, vec![("A", 3), ("T", 1), ("G", 2), ("C", 2)]);
    }

    #[test]
    fn test_column_names() {
        assert_eq!(CountTable::column_names(), ["nucleotide", "count"]);
    }

    #[test]
    fn test_bar_chart_keyed_on_table() {
        let counts = NucleotideCounts::tally("GAACACGT");
        let table = CountTable::from_counts(&counts);
        let spec = BarChartSpec::from_table(&table);

        assert_eq!(spec.bar_width, BAR_WIDTH);
        assert_eq!(spec.bars, vec![("A", 3), ("T", 1), ("G", 2), ("C", 2)]);
    }

    #[test]
    fn test_report_end_to_end() {
        let report = render_report(">DNA Query 2\nGAAC\nACGT");

        assert!(report.contains("Query:           >DNA Query 2"));
        assert!(report.contains("Sequence length: 8"));
        assert!(report.contains("There are 3 adenine (A)"));
        assert!(report.contains("There are 1 thymine (T)"));
        assert!(report.contains("nucleotide"));
        assert!(report.contains("count"));
    }

    #[test]
    fn test_report_no_valid_symbols() {
        let report = render_report(">h\nXYZ");

        assert!(report.contains("Sequence length: 3"));
        assert!(report.contains("Bases counted:   0"));
        assert!(report.contains("There are 0 adenine (A)"));
        assert!(report.contains("There are 0 cytosine (C)"));
    }

    #[test]
    fn test_report_empty_input() {
        // Malformed input degrades silently, never errors
        let report = render_report("");
        assert!(report.contains("Sequence length: 0"));
    }

    #[test]
    fn test_ascii_bars_scaled() {
        let counts = NucleotideCounts::tally("GAACACGT");
        let table = CountTable::from_counts(&counts);
        let bars = render_ascii_bars(&table);

        let lines: Vec<&str> = bars.lines().collect();
        assert_eq!(lines.len(), 4);
        // Largest count fills the full bar width
        assert!(lines[0].contains(&"█".repeat(40)));
        assert!(lines[0].ends_with("3"));
    }

    #[test]
    fn test_ascii_bars_all_zero() {
        let table = CountTable::from_counts(&NucleotideCounts::tally(""));
        let bars = render_ascii_bars(&table);
        assert!(!bars.contains('█'));
    }
}
