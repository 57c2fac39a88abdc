//! Log file reader.
//!
//! Reads a whole log file up front and hands its entries to the aggregator.
//! Iterating a `&LogfileReader` yields the same entries every time, so one
//! reader can feed several passes.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use la_core::LogEntry;

/// Fully buffered entries of one log file.
#[derive(Debug, Clone, Default)]
pub struct LogfileReader {
    entries: Vec<LogEntry>,
}

impl LogfileReader {
    /// Reads and parses every line of the file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let reader = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to read {}", path.display()))?;
        tracing::debug!(path = %path.display(), entries = reader.len(), "read log file");
        Ok(reader)
    }

    /// Parses one entry per non-blank line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut entries = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let entry: LogEntry = trimmed
                .parse()
                .with_context(|| format!("invalid entry on line {}", idx + 1))?;
            entries.push(entry);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for LogfileReader {
    type Item = LogEntry;
    type IntoIter = std::vec::IntoIter<LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogfileReader {
    type Item = LogEntry;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, LogEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}
