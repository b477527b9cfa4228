//! Agentry CLI Binary
//!
//! Command-line interface for the agent persona registry.

use agentry::config::Config;
use agentry::logging::{init_logging, LoggingConfig};
use agentry::tooling::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    let logging = match Config::load(cli.config.as_deref()) {
        Ok(config) => {
            let mut logging = config.logging;
            if let Some(level) = cli.log_level.clone() {
                logging.level = level;
            }
            logging
        }
        // Config errors resurface from CliContext::new below with context.
        Err(_) => LoggingConfig::default(),
    };
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::new(cli.dir.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading persona registry: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
