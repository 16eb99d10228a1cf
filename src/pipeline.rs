//! Parse-then-analyze orchestration
//!
//! Works against the [`LogParser`] and [`LogAnalyzer`] capabilities so either
//! side can be swapped out.

use std::path::Path;

use crate::analyzer::LogAnalyzer;
use crate::error::AnalyzerError;
use crate::models::AnalysisResult;
use crate::parser::LogParser;

/// Parse `path` and aggregate the successfully parsed entries.
///
/// File-level errors abort before analysis; malformed lines end up in
/// `result.parse_outcome.failed_lines`.
pub fn analyze_file<P, A>(
    parser: &P,
    analyzer: &A,
    path: &Path,
    top_n: usize,
) -> Result<AnalysisResult, AnalyzerError>
where
    P: LogParser,
    A: LogAnalyzer,
{
    let outcome = parser.parse_file(path)?;
    analyzer.analyze(outcome, top_n)
}
