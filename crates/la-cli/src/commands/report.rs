//! Report command for full access statistics.
//!
//! This module implements `la report` with human-readable and JSON output.

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Month, Utc};
use la_core::{Aggregator, LogEntry, Summary};
use serde::Serialize;

use super::hourly::format_hourly_counts;
use crate::reader::LogfileReader;

/// Computed report data.
#[derive(Debug)]
pub struct ReportData {
    pub generated_at: DateTime<Utc>,
    /// Where the entries came from, for the header.
    pub source: String,
    pub summary: Summary,
}

// ========== Report Generation ==========

/// Runs a full pass over `entries` and summarizes it.
pub fn generate_report_data<I>(
    entries: I,
    source: String,
    years_span: u32,
    generated_at: DateTime<Utc>,
) -> Result<ReportData>
where
    I: IntoIterator<Item = LogEntry>,
{
    let mut aggregator = Aggregator::new();
    aggregator
        .analyze_all(entries)
        .with_context(|| format!("failed to analyze {source}"))?;
    let summary = aggregator
        .summary(years_span)
        .context("failed to compute monthly averages")?;

    Ok(ReportData {
        generated_at,
        source,
        summary,
    })
}

// ========== Formatting ==========

/// English month name for a 1-based month.
fn month_name(month: usize) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("?", |m| m.name())
}

/// Formats an hour as `HH:00`.
fn format_hour(hour: usize) -> String {
    format!("{hour:02}:00")
}

/// Formats the two-hour window starting at `start`, wrapping past midnight.
fn format_window(start: usize) -> String {
    format!("{}-{}", format_hour(start), format_hour((start + 2) % 24))
}

/// Formats the monthly totals and averages table.
pub fn format_monthly(summary: &Summary) -> String {
    let mut output = String::new();
    writeln!(output, "{:<10}{:>8}{:>9}", "Month", "Total", "Avg/yr").unwrap();
    for (idx, (total, avg)) in summary
        .month_counts
        .iter()
        .zip(summary.month_averages)
        .enumerate()
    {
        writeln!(output, "{:<10}{total:>8}{avg:>9.2}", month_name(idx + 1)).unwrap();
    }
    output
}

/// Formats the busiest/quietest statistics.
pub fn format_summary(summary: &Summary) -> String {
    let rows = [
        ("Total accesses:", summary.total_accesses.to_string()),
        ("Busiest hour:", format_hour(summary.busiest_hour)),
        ("Quietest hour:", format_hour(summary.quietest_hour)),
        (
            "Busiest window:",
            format_window(summary.busiest_two_hour_window),
        ),
        ("Busiest day:", summary.busiest_day.to_string()),
        ("Quietest day:", summary.quietest_day.to_string()),
        ("Busiest month:", month_name(summary.busiest_month).to_string()),
        (
            "Quietest month:",
            month_name(summary.quietest_month).to_string(),
        ),
    ];

    let mut output = String::new();
    writeln!(output, "SUMMARY").unwrap();
    writeln!(output, "───────").unwrap();
    for (label, value) in rows {
        writeln!(output, "{label:<17}{value}").unwrap();
    }
    output
}

/// Formats the human-readable report output.
pub fn format_report(data: &ReportData) -> String {
    let mut output = String::new();
    let summary = &data.summary;

    writeln!(output, "ACCESS REPORT: {}", data.source).unwrap();

    if summary.total_accesses == 0 {
        writeln!(output).unwrap();
        writeln!(output, "No entries recorded.").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "Hint: Run 'la generate' to create a sample log.").unwrap();
        return output;
    }

    writeln!(output).unwrap();
    writeln!(output, "HOURLY").unwrap();
    writeln!(output, "──────").unwrap();
    output.push_str(&format_hourly_counts(&summary.hour_counts));

    writeln!(output).unwrap();
    writeln!(output, "MONTHLY (averaged over {} years)", summary.years_span).unwrap();
    writeln!(output, "───────").unwrap();
    output.push_str(&format_monthly(summary));

    writeln!(output).unwrap();
    output.push_str(&format_summary(summary));

    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub source: &'a str,
    #[serde(flatten)]
    pub summary: &'a Summary,
}

/// Formats report data as JSON.
pub fn format_report_json(data: &ReportData) -> Result<String> {
    let report = JsonReport {
        generated_at: data.generated_at.to_rfc3339(),
        source: &data.source,
        summary: &data.summary,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

// ========== Public Interface ==========

/// Runs the report command.
pub fn run(path: &Path, years_span: u32, json: bool) -> Result<()> {
    let reader = LogfileReader::open(path)?;
    let data = generate_report_data(reader, path.display().to_string(), years_span, Utc::now())?;

    if json {
        let output = format_report_json(&data)?;
        println!("{output}");
    } else {
        let output = format_report(&data);
        print!("{output}");
    }

    Ok(())
}
