//! CLI subcommand implementations.

pub mod entries;
pub mod generate;
pub mod hourly;
pub mod report;
