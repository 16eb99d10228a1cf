//! logtally - Access Log Summary Library
//!
//! This library exposes the parsing and aggregation pipeline for
//! combined-log-format access logs, plus the report and metadata
//! collaborators used by the command-line tool.

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod error;
pub mod file_info;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;
pub mod pipeline;

pub use analyzer::{FrequencyAnalyzer, LogAnalyzer};
pub use error::AnalyzerError;
pub use models::{AnalysisResult, LogEntry, ParseOutcome, RankedItem};
pub use parser::{CombinedLogParser, LogParser};
pub use pipeline::analyze_file;
