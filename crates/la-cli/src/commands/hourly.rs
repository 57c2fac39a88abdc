//! Hourly command: an hour-only pass over a log file.

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use la_core::{Aggregator, HOURS_PER_DAY};

use crate::reader::LogfileReader;

/// Formats the `Hr: Count` table.
pub fn format_hourly_counts(hour_counts: &[u64; HOURS_PER_DAY]) -> String {
    let mut output = String::new();
    writeln!(output, "Hr: Count").unwrap();
    for (hour, count) in hour_counts.iter().enumerate() {
        writeln!(output, "{hour}: {count}").unwrap();
    }
    output
}

/// Runs the hourly command.
pub fn run(path: &Path) -> Result<()> {
    let reader = LogfileReader::open(path)?;
    let mut aggregator = Aggregator::new();
    aggregator
        .analyze_hourly_only(reader)
        .with_context(|| format!("failed to analyze {}", path.display()))?;

    print!("{}", format_hourly_counts(aggregator.hour_counts()));
    Ok(())
}
