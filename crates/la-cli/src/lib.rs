//! Access log analyzer CLI library.
//!
//! This crate provides the CLI interface for the analyzer: reading and
//! generating log files, and rendering aggregated reports.

mod cli;
pub mod commands;
mod config;
pub mod generator;
pub mod reader;

pub use cli::{Cli, Commands};
pub use config::Config;
