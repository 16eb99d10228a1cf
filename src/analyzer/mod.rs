//! Aggregation module
//!
//! Ranks grouping keys (request paths, client addresses) by frequency with a
//! deterministic tie-break: count descending, then key ascending.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;

use crate::error::AnalyzerError;
use crate::models::{AnalysisResult, LogEntry, ParseOutcome, RankedItem};

/// Capability to aggregate parsed entries into summary statistics
pub trait LogAnalyzer {
    /// Analyze the entries of `outcome`, keeping at most `top_n` ranked paths and clients.
    ///
    /// The outcome is moved into the result unchanged.
    fn analyze(&self, outcome: ParseOutcome, top_n: usize) -> Result<AnalysisResult, AnalyzerError>;
}

/// Frequency-ranking analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyAnalyzer {
    /// Compute path and client rankings on the rayon pool
    pub parallel: bool,
}

impl FrequencyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(parallel: bool) -> Self {
        Self { parallel }
    }
}

impl LogAnalyzer for FrequencyAnalyzer {
    fn analyze(&self, outcome: ParseOutcome, top_n: usize) -> Result<AnalysisResult, AnalyzerError> {
        if top_n < 1 {
            return Err(AnalyzerError::InvalidArgument(format!(
                "top_n must be at least 1, got {}",
                top_n
            )));
        }

        let entries = &outcome.entries;
        let paths = || rank_by_frequency(entries.iter().map(|e| e.path.as_str()), top_n);
        let clients = || rank_by_frequency(entries.iter().map(|e| e.client_address.as_str()), top_n);

        let (top_paths, top_clients) = if self.parallel {
            rayon::join(paths, clients)
        } else {
            (paths(), clients())
        };

        let unique_client_count = unique_count(entries.iter().map(|e| e.client_address.as_str()));
        let (status_counts, total_bytes) = traffic_totals(entries);

        debug!(
            "Analyzed {} entries: {} unique clients, top_n={}",
            entries.len(),
            unique_client_count,
            top_n
        );

        Ok(AnalysisResult {
            unique_client_count,
            top_paths,
            top_clients,
            status_counts,
            total_bytes,
            parse_outcome: outcome,
        })
    }
}

/// Count occurrences of every distinct key and sort the whole table.
///
/// Ordering is count descending, then key ascending, independent of input order.
pub fn frequency_table<'a, I>(keys: I) -> Vec<RankedItem>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut table: Vec<RankedItem> = counts
        .into_iter()
        .map(|(key, count)| RankedItem::new(key, count))
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    table
}

/// The first `top_n` rows of [`frequency_table`]
pub fn rank_by_frequency<'a, I>(keys: I, top_n: usize) -> Vec<RankedItem>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = frequency_table(keys);
    table.truncate(top_n);
    table
}

/// Number of distinct keys
pub fn unique_count<'a, I>(keys: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter().collect::<HashSet<_>>().len()
}

fn traffic_totals(entries: &[LogEntry]) -> (BTreeMap<u16, usize>, u64) {
    let mut status_counts = BTreeMap::new();
    let mut total_bytes: u64 = 0;
    for entry in entries {
        *status_counts.entry(entry.status_code).or_insert(0) += 1;
        total_bytes = total_bytes.saturating_add(entry.response_size);
    }
    (status_counts, total_bytes)
}
