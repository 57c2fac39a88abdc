//! Entries command for printing the raw contents of a log file.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;

use crate::reader::LogfileReader;

/// Formats one entry per line, in log file format.
pub fn format_entries(reader: &LogfileReader) -> String {
    let mut output = String::new();
    for entry in reader {
        writeln!(output, "{entry}").unwrap();
    }
    output
}

/// Runs the entries command.
pub fn run(path: &Path) -> Result<()> {
    let reader = LogfileReader::open(path)?;
    print!("{}", format_entries(&reader));
    Ok(())
}
