//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Default number of years a log covers.
const DEFAULT_YEARS_SPAN: u32 = 5;

/// Default number of entries written by `la generate`.
const DEFAULT_GENERATE_COUNT: usize = 200;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log file used when a command is given no path.
    pub log_path: PathBuf,

    /// Number of years the log covers; divisor for monthly averages.
    pub years_span: u32,

    /// Number of entries `la generate` writes.
    pub generate_count: usize,

    /// First year of generated entries.
    pub start_year: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("demo.log"),
            years_span: DEFAULT_YEARS_SPAN,
            generate_count: DEFAULT_GENERATE_COUNT,
            start_year: Local::now()
                .year()
                .saturating_sub_unsigned(DEFAULT_YEARS_SPAN),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (LA_*)
        figment = figment.merge(Env::prefixed("LA_"));

        figment.extract()
    }

    /// Returns `path` if given, else the configured log path.
    pub fn log_path_or<'a>(&'a self, path: Option<&'a Path>) -> &'a Path {
        path.unwrap_or(&self.log_path)
    }
}

/// Returns the platform-specific config directory for la.
///
/// On Linux: `~/.config/la`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("la"))
}
