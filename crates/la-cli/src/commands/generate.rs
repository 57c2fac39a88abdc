//! Generate command for writing synthetic log files.

use std::path::Path;

use anyhow::Result;

use crate::generator::{GeneratorConfig, LogfileCreator};

/// Writes `count` random entries to `path`, seeded if `seed` is given.
pub fn run(path: &Path, count: usize, config: GeneratorConfig, seed: Option<u64>) -> Result<()> {
    let mut creator = match seed {
        Some(seed) => LogfileCreator::seeded(config, seed)?,
        None => LogfileCreator::new(config)?,
    };
    creator.create_file(path, count)?;
    println!("Wrote {count} entries to {}", path.display());
    Ok(())
}
