//! Casetree CLI Binary
//!
//! Command-line host for the casetree navigation engine.

use casetree::cli::{Cli, RunContext};
use casetree::config::CasetreeConfig;
use casetree::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match CasetreeConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, config.logging.clone());
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Casetree CLI starting");

    let case_path = match cli.case.clone().or_else(|| config.case.file.clone()) {
        Some(path) => path,
        None => {
            eprintln!("No case file given (pass --case or configure case.file)");
            process::exit(1);
        }
    };

    let context = match RunContext::new(&case_path) {
        Ok(ctx) => {
            info!(case = %case_path.display(), "Case loaded");
            ctx
        }
        Err(e) => {
            error!("Error loading case: {:#}", e);
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("{:#}", e);
            process::exit(1);
        }
    }
}

/// Apply CLI flag overrides on top of the configured logging settings.
/// Precedence: explicit flags override --verbose/--quiet override config.
fn build_logging_config(cli: &Cli, mut config: LoggingConfig) -> LoggingConfig {
    if cli.quiet {
        config.level = "off".to_string();
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    config
}
