//! Prefdir CLI Binary
//!
//! Command-line interface for reading merged directory settings.

use anyhow::Context;
use clap::Parser;
use prefdir::cli::{Cli, RunContext};
use prefdir::config::{ConfigLoader, PrefdirConfig};
use prefdir::error::ApiError;
use prefdir::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    let dispatch = match init_logging(Some(&config.logging)) {
        Ok(dispatch) => dispatch,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Prefdir CLI starting");

    let context = match RunContext::new(&config, &cli.workspace, Some(dispatch)) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error opening settings directory: {}", e);
            eprintln!("{}", prefdir::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", prefdir::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Load configuration and apply CLI overrides.
/// Precedence: CLI flags override environment override config files override defaults.
fn load_config(cli: &Cli) -> anyhow::Result<PrefdirConfig> {
    let mut config = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path)
            .map_err(ApiError::from)
            .with_context(|| format!("loading {}", config_path.display()))?,
        None => ConfigLoader::load(&cli.workspace).map_err(ApiError::from)?,
    };
    apply_cli_overrides(cli, &mut config);
    Ok(config)
}

fn apply_cli_overrides(cli: &Cli, config: &mut PrefdirConfig) {
    if let Some(ref dir) = cli.dir {
        config.settings.directory = dir.clone();
    }
    if let Some(ref extension) = cli.extension {
        config.settings.extension = extension.clone();
    }

    let logging = &mut config.logging;
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if cli.quiet {
        logging.level = "off".to_string();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = file.clone();
    }
}
