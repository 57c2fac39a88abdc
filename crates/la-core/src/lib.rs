//! Core logic for the access log analyzer.
//!
//! This crate contains:
//! - Log entries: the `YYYY MM DD HH MM` record and its line format
//! - Aggregation: hourly, daily and monthly access counters
//! - Statistics: busiest/quietest periods, averages and totals

mod aggregator;
pub mod entry;
mod summary;

pub use aggregator::{
    Aggregator, AnalysisError, DAYS_PER_MONTH, Field, HOURS_PER_DAY, MONTHS_PER_YEAR,
};
pub use entry::{LogEntry, ParseEntryError};
pub use summary::Summary;
