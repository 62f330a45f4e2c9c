use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use super::record::{ParseOutcome, parse_line};
use crate::models::CallRecord;

/// Result of classifying every line of a saved SMDR capture
#[derive(Debug, Default)]
pub struct CaptureSummary {
    pub records: Vec<CallRecord>,
    pub ignored: usize,
    /// 1-based line number and text of each line that failed the grammar
    pub malformed: Vec<(usize, String)>,
}

impl CaptureSummary {
    pub fn total_lines(&self) -> usize {
        self.records.len() + self.ignored + self.malformed.len()
    }
}

/// Classify every line of a capture file without writing any logs.
///
/// Bytes that are not valid UTF-8 (line noise on a serial link) are replaced
/// rather than rejected, so such lines usually end up malformed.
pub fn parse_capture_file(path: &Path) -> Result<CaptureSummary> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open capture file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut summary = CaptureSummary::default();

    for (line_num, line) in reader.split(b'\n').enumerate() {
        let line = line.context("Failed to read line from capture file")?;
        let line = String::from_utf8_lossy(&line);

        match parse_line(&line) {
            ParseOutcome::Parsed(record) => summary.records.push(record),
            ParseOutcome::Ignored => summary.ignored += 1,
            ParseOutcome::Malformed => {
                summary.malformed.push((line_num + 1, line.trim().to_string()))
            }
        }
    }

    Ok(summary)
}
