//! File metadata display
//!
//! Renders name, size, line count and modification time for the log file
//! being analyzed. Used by the binary only; the pipeline never reads it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

/// Describe a file as a multi-line text block, or report that it is missing
pub fn describe_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Ok(format!("File not found: {}", path.display()));
    }

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
    let modified: DateTime<Local> = metadata
        .modified()
        .with_context(|| format!("Modification time unavailable for {}", path.display()))?
        .into();

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(format!(
        "File: {}\nSize: {} bytes\nLines: {}\nModified: {}",
        name,
        metadata.len(),
        count_lines(path)?,
        modified.format("%Y-%m-%d %H:%M:%S")
    ))
}

fn count_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut count = 0;
    for chunk in BufReader::new(file).split(b'\n') {
        chunk.with_context(|| format!("Failed to read {}", path.display()))?;
        count += 1;
    }
    Ok(count)
}
