//! Synthetic log generation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use la_core::{DAYS_PER_MONTH, HOURS_PER_DAY, LogEntry, MONTHS_PER_YEAR};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Range of years generated entries fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// First year, inclusive.
    pub start_year: i32,
    /// Number of years, at least one.
    pub years_span: u32,
}

/// Writes log files of random, chronologically sorted entries.
#[derive(Debug)]
pub struct LogfileCreator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl LogfileCreator {
    /// Creates a generator seeded from the operating system.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a generator whose output depends only on `seed`.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GeneratorConfig, rng: StdRng) -> Result<Self> {
        if config.years_span == 0 {
            anyhow::bail!("years span must be positive");
        }
        Ok(Self { config, rng })
    }

    /// Generates `count` entries sorted by time.
    #[allow(clippy::cast_possible_truncation)]
    pub fn create_entries(&mut self, count: usize) -> Vec<LogEntry> {
        let mut entries: Vec<LogEntry> = (0..count)
            .map(|_| {
                let offset = self.rng.random_range(0..self.config.years_span);
                LogEntry::new(
                    self.config.start_year.saturating_add_unsigned(offset),
                    self.rng.random_range(1..=MONTHS_PER_YEAR as u8),
                    self.rng.random_range(1..=DAYS_PER_MONTH as u8),
                    self.rng.random_range(0..HOURS_PER_DAY as u8),
                    self.rng.random_range(0..60),
                )
            })
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Writes `count` entries to `path`, one per line.
    pub fn create_file(&mut self, path: &Path, count: usize) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for entry in self.create_entries(count) {
            writeln!(writer, "{entry}")
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::debug!(path = %path.display(), count, "wrote log file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::reader::LogfileReader;

    const CONFIG: GeneratorConfig = GeneratorConfig {
        start_year: 2015,
        years_span: 5,
    };

    #[test]
    fn test_entries_within_domain() {
        let mut creator = LogfileCreator::seeded(CONFIG, 7).unwrap();
        let entries = creator.create_entries(1000);

        assert_eq!(entries.len(), 1000);
        for entry in &entries {
            assert!((2015..2020).contains(&entry.year), "{entry}");
            assert!((1..=12).contains(&entry.month), "{entry}");
            assert!((1..=28).contains(&entry.day), "{entry}");
            assert!(entry.hour < 24, "{entry}");
            assert!(entry.minute < 60, "{entry}");
        }
    }

    #[test]
    fn test_entries_sorted() {
        let mut creator = LogfileCreator::seeded(CONFIG, 11).unwrap();
        let entries = creator.create_entries(200);
        assert!(entries.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_same_seed_same_entries() {
        let a = LogfileCreator::seeded(CONFIG, 42).unwrap().create_entries(50);
        let b = LogfileCreator::seeded(CONFIG, 42).unwrap().create_entries(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_year_span() {
        let config = GeneratorConfig {
            start_year: 2020,
            years_span: 1,
        };
        let entries = LogfileCreator::seeded(config, 3).unwrap().create_entries(20);
        assert!(entries.iter().all(|e| e.year == 2020));
    }

    #[test]
    fn test_zero_year_span_rejected() {
        let config = GeneratorConfig {
            start_year: 2020,
            years_span: 0,
        };
        assert!(LogfileCreator::seeded(config, 3).is_err());
    }

    #[test]
    fn test_create_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.log");

        LogfileCreator::seeded(CONFIG, 1)
            .unwrap()
            .create_file(&path, 200)
            .unwrap();

        let reader = LogfileReader::open(&path).unwrap();
        assert_eq!(reader.len(), 200);
        assert_eq!(
            reader.entries(),
            LogfileCreator::seeded(CONFIG, 1)
                .unwrap()
                .create_entries(200)
                .as_slice()
        );
    }
}
