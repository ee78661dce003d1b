//! swatch - asset migrator and JSON catalog generator for design kits.

#![allow(dead_code)]

mod catalog;
mod cli;
mod config;
mod filter;
mod logger;
mod migrate;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{Config, ConfigError};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir, force } => {
            let dir = match dir {
                Some(dir) => dir.clone(),
                None => std::env::current_dir().context("Failed to get current working directory")?,
            };
            cli::init::init_project(&dir, *force).map(|_| ())
        }
        Commands::Migrate { dry_run } => {
            let config = load_config(&cli)?;
            cli::migrate::run_migrate(&config, *dry_run).map(|_| ())
        }
        Commands::Catalog { domains } => {
            let config = load_config(&cli)?;
            cli::catalog::run_catalog(&config, domains).map(|_| ())
        }
    }
}

/// Load the config, pointing at `swatch init` when none exists.
fn load_config(cli: &Cli) -> Result<Config> {
    Config::load(&cli.config).inspect_err(|e| {
        if let Some(ConfigError::NotFound(_)) = e.downcast_ref::<ConfigError>() {
            log!("hint"; "run `swatch init` to create {}", cli.config.display());
        }
    })
}
