//! Error taxonomy for the parsing and aggregation pipeline
//!
//! Malformed lines are data, not errors: they are collected in
//! [`ParseOutcome::failed_lines`](crate::models::ParseOutcome) and never surface here.

use std::path::PathBuf;

/// Errors that abort a parse or an analysis
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// Blank file path, `top_n` of zero, or an out-of-range setting
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Target file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file existed but reading it failed
    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl AnalyzerError {
    /// Whether this error is the caller's fault (bad path, bad argument)
    /// rather than an unexpected failure.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::NotFound(_))
    }
}
