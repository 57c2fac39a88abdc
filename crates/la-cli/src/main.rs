use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use la_cli::commands::{entries, generate, hourly, report};
use la_cli::generator::GeneratorConfig;
use la_cli::{Cli, Commands, Config};

/// Load config from the default locations plus an optional explicit file.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match &cli.command {
        Some(Commands::Report { file, years, json }) => {
            let config = load_config(cli.config.as_deref())?;
            let path = config.log_path_or(file.as_deref());
            report::run(path, years.unwrap_or(config.years_span), *json)?;
        }
        Some(Commands::Hourly { file }) => {
            let config = load_config(cli.config.as_deref())?;
            hourly::run(config.log_path_or(file.as_deref()))?;
        }
        Some(Commands::Generate {
            file,
            count,
            seed,
            start_year,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let generator = GeneratorConfig {
                start_year: start_year.unwrap_or(config.start_year),
                years_span: config.years_span,
            };
            generate::run(
                config.log_path_or(file.as_deref()),
                count.unwrap_or(config.generate_count),
                generator,
                *seed,
            )?;
        }
        Some(Commands::Entries { file }) => {
            let config = load_config(cli.config.as_deref())?;
            entries::run(config.log_path_or(file.as_deref()))?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
