//! Access log line parsing module
//!
//! Handles:
//! - Matching combined-log-format lines against a fixed structural pattern
//! - Extracting and normalizing fields into LogEntry values
//! - Partitioning a file into parsed entries, failed lines and skipped blanks
//! - Path validation before any reading begins

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;

use crate::constants::{COMBINED_LOG_PATTERN, SIZE_PLACEHOLDER};
use crate::error::AnalyzerError;
use crate::models::{LogEntry, ParseOutcome};

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(COMBINED_LOG_PATTERN).expect("combined log pattern is a valid regex")
});

/// Why a single line did not become a LogEntry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineRejection {
    /// Empty or whitespace-only; skipped rather than counted as a failure
    #[error("blank line")]
    Blank,
    #[error("line does not match the combined log format")]
    NoMatch,
    /// Status token that does not fit a `u16`. The built-in pattern only
    /// admits three digits, so `CombinedLogParser` never yields this; other
    /// `LogParser` implementations may.
    #[error("status code '{0}' is not a number")]
    InvalidStatus(String),
    #[error("response size '{0}' is neither '-' nor a number")]
    InvalidSize(String),
}

/// Capability to turn raw log text into structured entries
pub trait LogParser {
    /// Parse one raw line into an entry or classify why it was rejected
    fn parse_line(&self, line: &str) -> Result<LogEntry, LineRejection>;

    /// Parse every line from a buffered reader.
    ///
    /// `source` is only used to label I/O errors. A read failure discards
    /// everything parsed so far.
    fn parse_reader<R: BufRead>(&self, reader: R, source: &Path) -> Result<ParseOutcome, AnalyzerError>
    where
        Self: Sized,
    {
        let mut outcome = ParseOutcome::default();

        for (index, chunk) in reader.split(b'\n').enumerate() {
            let bytes = chunk.map_err(|source_err| AnalyzerError::Io {
                path: source.to_path_buf(),
                source: source_err,
            })?;
            let text = String::from_utf8_lossy(&bytes);
            let line = text.strip_suffix('\r').unwrap_or(&text);

            match self.parse_line(line) {
                Ok(entry) => outcome.entries.push(entry),
                Err(LineRejection::Blank) => outcome.blank_lines += 1,
                Err(reason) => {
                    debug!("{}:{}: {}", source.display(), index + 1, reason);
                    outcome.failed_lines.push(line.to_string());
                }
            }
        }

        info!(
            "Parsed {}: {} entries, {} failed, {} blank",
            source.display(),
            outcome.entries.len(),
            outcome.failed_lines.len(),
            outcome.blank_lines
        );

        Ok(outcome)
    }

    /// Parse a log file from disk.
    ///
    /// Fails before reading when the path is blank or does not name an existing file.
    fn parse_file(&self, path: &Path) -> Result<ParseOutcome, AnalyzerError>
    where
        Self: Sized,
    {
        validate_log_path(path)?;

        let file = File::open(path).map_err(|source| AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse_reader(BufReader::new(file), path)
    }
}

/// Check that `path` is non-blank and names an existing regular file
pub fn validate_log_path(path: &Path) -> Result<(), AnalyzerError> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(AnalyzerError::InvalidArgument(
            "log file path must not be empty".to_string(),
        ));
    }

    if !path.is_file() {
        return Err(AnalyzerError::NotFound(path.to_path_buf()));
    }

    Ok(())
}

/// Strip trailing `/` characters from a request path.
///
/// A path made only of slashes collapses to `/`, so the root is never emptied.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && !path.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parser for the combined log format
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinedLogParser;

impl CombinedLogParser {
    pub fn new() -> Self {
        Self
    }
}

impl LogParser for CombinedLogParser {
    fn parse_line(&self, line: &str) -> Result<LogEntry, LineRejection> {
        if line.trim().is_empty() {
            return Err(LineRejection::Blank);
        }

        let caps = LINE_PATTERN.captures(line).ok_or(LineRejection::NoMatch)?;

        let status_token = &caps["status"];
        let status_code = status_token
            .parse::<u16>()
            .map_err(|_| LineRejection::InvalidStatus(status_token.to_string()))?;

        let size_token = &caps["size"];
        let response_size = if size_token == SIZE_PLACEHOLDER {
            0
        } else {
            size_token
                .parse::<u64>()
                .map_err(|_| LineRejection::InvalidSize(size_token.to_string()))?
        };

        Ok(LogEntry {
            client_address: caps["client"].to_string(),
            timestamp: caps["timestamp"].to_string(),
            method: caps["method"].to_string(),
            path: normalize_path(&caps["path"]),
            protocol_version: caps["protocol"].to_string(),
            status_code,
            response_size,
            user_agent: caps["user_agent"].to_string(),
            raw_line: line.to_string(),
        })
    }
}
