//! Output formatting module
//!
//! Handles:
//! - Human-readable report layout
//! - JSON output of the analysis with derived parse statistics
//! - The one-line parse summary
//! - Verbatim listing of failed lines

use anyhow::Result;
use serde::Serialize;

use crate::models::{AnalysisResult, ParseOutcome, RankedItem};

/// JSON document: the analysis plus derived parse statistics
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    analysis: &'a AnalysisResult,
    total_lines: usize,
    successful_lines: usize,
    blank_lines: usize,
    success_rate: f64,
    failed_lines: &'a [String],
}

/// `Parsed <total> lines: <success> successful (<pct>%), <failed> failed`
pub fn format_parse_summary(outcome: &ParseOutcome) -> String {
    format!(
        "Parsed {} lines: {} successful ({:.1}%), {} failed",
        outcome.total_lines(),
        outcome.entries.len(),
        outcome.success_rate() * 100.0,
        outcome.failed_lines.len()
    )
}

fn format_ranking(out: &mut String, title: &str, items: &[RankedItem], unit: &str) {
    out.push_str(title);
    out.push('\n');

    if items.is_empty() {
        out.push_str("  (none)\n");
        return;
    }

    for (index, item) in items.iter().enumerate() {
        let suffix = if item.count == 1 { "" } else { "s" };
        out.push_str(&format!(
            "  {}. {} - {} {}{}\n",
            index + 1,
            item.key,
            item.count,
            unit,
            suffix
        ));
    }
}

/// Render the text report
pub fn format_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unique clients: {}\n\n", result.unique_client_count));
    format_ranking(&mut out, "Top paths:", &result.top_paths, "visit");
    out.push('\n');
    format_ranking(&mut out, "Top clients:", &result.top_clients, "request");
    out.push('\n');

    out.push_str(&format_parse_summary(&result.parse_outcome));
    out.push('\n');

    if !result.status_counts.is_empty() {
        let statuses: Vec<String> = result
            .status_counts
            .iter()
            .map(|(code, count)| format!("{}={}", code, count))
            .collect();
        out.push_str(&format!("Status codes: {}\n", statuses.join(", ")));
    }
    out.push_str(&format!("Total bytes: {}\n", result.total_bytes));

    out
}

/// Render the failed lines section, empty when every line parsed
pub fn format_failed_lines(outcome: &ParseOutcome) -> String {
    if outcome.failed_lines.is_empty() {
        return String::new();
    }

    let mut out = String::from("Failed lines:\n");
    for line in &outcome.failed_lines {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Render the analysis as pretty-printed JSON
pub fn format_json(result: &AnalysisResult) -> Result<String> {
    let outcome = &result.parse_outcome;
    let report = JsonReport {
        analysis: result,
        total_lines: outcome.total_lines(),
        successful_lines: outcome.entries.len(),
        blank_lines: outcome.blank_lines,
        success_rate: outcome.success_rate(),
        failed_lines: &outcome.failed_lines,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
