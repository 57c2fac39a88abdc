//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Web server access log analyzer.
///
/// Aggregates log entries into hourly, daily and monthly access counts and
/// reports the busiest and quietest periods.
#[derive(Debug, Parser)]
#[command(name = "la", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze hour, day and month counts and print statistics.
    Report {
        /// Log file to analyze (defaults to the configured log path).
        file: Option<PathBuf>,

        /// Number of years the log covers, used for monthly averages.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        years: Option<u32>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Count accesses per hour only.
    Hourly {
        /// Log file to analyze (defaults to the configured log path).
        file: Option<PathBuf>,
    },

    /// Write a log file of random entries.
    Generate {
        /// Log file to create (defaults to the configured log path).
        file: Option<PathBuf>,

        /// Number of entries to write.
        #[arg(long)]
        count: Option<usize>,

        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,

        /// First year of generated entries.
        #[arg(long)]
        start_year: Option<i32>,
    },

    /// Print the entries read from a log file.
    Entries {
        /// Log file to read (defaults to the configured log path).
        file: Option<PathBuf>,
    },
}
