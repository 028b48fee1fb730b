//! Query text handling.
//!
//! This module extracts the sequence from a FASTA-like query block and
//! loads query files for the CLI and TUI seeds.
//!
//! ## Query format
//!
//! ```text
//! >DNA Query 2
//! GAACACGTGGAGGCAAACAGGAAGGTGAAGAAGAACTTATCCTATCAGGACGGAAGGTCCTGTGCTCGGG
//! ATCTTCCAGACGTCGCGACTCTAAATTGCCCCCTCTGAGGTCAAGGAACACAAGATGGTTTTGGAAATGC
//! ```
//!
//! The first line is always treated as a header/label and discarded, even
//! when it does not start with '>'. Remaining lines are concatenated with
//! no separator and no trimming, so stray whitespace stays in the sequence
//! and simply never matches a base symbol during counting.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// The fixed illustrative DNA fragment used to seed the input area.
pub const DEFAULT_QUERY: &str = ">DNA Query 2\n\
GAACACGTGGAGGCAAACAGGAAGGTGAAGAAGAACTTATCCTATCAGGACGGAAGGTCCTGTGCTCGGG\n\
ATCTTCCAGACGTCGCGACTCTAAATTGCCCCCTCTGAGGTCAAGGAACACAAGATGGTTTTGGAAATGC\n\
TGAACCCGATACATTATAACATCACCAGCATCGTGCCTGAAGCCATGCCTGCTGCCACCATGCCAGTCCT";

/// Errors that can occur while loading a query file.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Failed to read query file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for query loading.
pub type QueryResult<T> = Result<T, QueryError>;

/// Extracts the sequence from a raw query block.
///
/// Splits on line breaks, drops the first line unconditionally, and joins
/// the remaining lines with no separator. Input with fewer than two lines
/// yields an empty sequence; this function never fails.
pub fn extract_sequence(raw: &str) -> String {
    raw.lines().skip(1).collect()
}

/// Returns the header line of a raw query block, if any.
pub fn query_header(raw: &str) -> &str {
    raw.lines().next().unwrap_or("")
}

/// Loads a query block from a file.
///
/// The content is used verbatim as the raw input; no format validation is
/// performed beyond being readable text.
pub fn load_query_file<P: AsRef<Path>>(path: P) -> QueryResult<String> {
    let content = fs::read_to_string(path)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_extract_drops_header() {
        assert_eq!(extract_sequence(">DNA Query 2\nGAAC\nACGT"), "GAACACGT");
    }

    #[test]
    fn test_extract_header_without_marker() {
        // The first line is dropped even when it is not a FASTA header
        assert_eq!(extract_sequence("plain label\nACGT"), "ACGT");
    }

    #[test]
    fn test_extract_single_line() {
        assert_eq!(extract_sequence(">only a header"), "");
    }

    #[test]
    fn test_extract_empty() {
        assert_eq!(extract_sequence(""), "");
    }

    #[test]
    fn test_extract_preserves_whitespace() {
        // No trimming: inner whitespace stays in the sequence
        assert_eq!(extract_sequence(">h\nAC GT\n TT"), "AC GT TT");
    }

    #[test]
    fn test_extract_crlf() {
        assert_eq!(extract_sequence(">h\r\nGAAC\r\nACGT"), "GAACACGT");
    }

    #[test]
    fn test_extract_default_query() {
        let seq = extract_sequence(DEFAULT_QUERY);
        assert_eq!(seq.len(), 210);
        assert!(!seq.contains('\n'));
        assert!(!seq.starts_with('>'));
    }

    #[test]
    fn test_query_header() {
        assert_eq!(query_header(">DNA Query 2\nGAAC"), ">DNA Query 2");
        assert_eq!(query_header(""), "");
    }

    #[test]
    fn test_load_query_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">q\nGAAC\nACGT").unwrap();

        let raw = load_query_file(file.path()).unwrap();
        assert_eq!(extract_sequence(&raw), "GAACACGT");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_query_file("/nonexistent/query.txt");
        assert!(matches!(result, Err(QueryError::IoError(_))));
    }
}
