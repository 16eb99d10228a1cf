//! Data models module
//!
//! Defines core data structures:
//! - LogEntry: One fully parsed access-log request
//! - ParseOutcome: Per-file partition of lines into entries and failures
//! - RankedItem: A grouping key with its occurrence count
//! - AnalysisResult: Aggregated statistics over a ParseOutcome
//!
//! A LogEntry only exists when every field matched and both numeric fields parsed.

use serde::Serialize;
use std::collections::BTreeMap;

/// Represents a single request line from an access log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Originating client; grouping key for client ranking
    pub client_address: String,
    /// Bracketed timestamp text, captured verbatim
    pub timestamp: String,
    /// Request method (not validated against a vocabulary)
    pub method: String,
    /// Request target with trailing slashes stripped (root stays `/`)
    pub path: String,
    /// Protocol version from the request line
    pub protocol_version: String,
    /// Three-digit HTTP status
    pub status_code: u16,
    /// Response size in bytes; 0 when the log recorded `-`
    pub response_size: u64,
    /// User-agent string, captured verbatim
    pub user_agent: String,
    /// Original unmodified line
    pub raw_line: String,
}

/// Result of parsing one file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseOutcome {
    /// Successfully parsed entries, in file order
    pub entries: Vec<LogEntry>,
    /// Raw lines that did not match or failed numeric parsing, in file order
    pub failed_lines: Vec<String>,
    /// Empty or all-whitespace lines that were skipped
    pub blank_lines: usize,
}

impl ParseOutcome {
    /// Lines that were classified as either success or failure
    pub fn total_lines(&self) -> usize {
        self.entries.len() + self.failed_lines.len()
    }

    /// Fraction of classified lines that parsed, 0.0 when nothing was classified
    pub fn success_rate(&self) -> f64 {
        let total = self.total_lines();
        if total == 0 {
            0.0
        } else {
            self.entries.len() as f64 / total as f64
        }
    }
}

/// A grouping key and how many entries carried it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedItem {
    pub key: String,
    pub count: usize,
}

impl RankedItem {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Aggregated statistics for one analysis call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Number of distinct client addresses
    pub unique_client_count: usize,
    /// Most requested paths, highest count first
    pub top_paths: Vec<RankedItem>,
    /// Most active clients, highest count first
    pub top_clients: Vec<RankedItem>,
    /// Requests per status code, ascending by code
    pub status_counts: BTreeMap<u16, usize>,
    /// Sum of recorded response sizes
    pub total_bytes: u64,
    /// The outcome this result was computed from (read-only)
    #[serde(skip)]
    pub parse_outcome: ParseOutcome,
}
